//! External configuration for VMware as a Service SDK clients.
//!
//! Service properties (URL, auth type and credentials, transport toggles)
//! are looked up by service name: first a TOML credentials file whose
//! `[<service-name>]` table holds them, then `<SERVICE_NAME>_*` environment
//! variables, which win. The resolved properties build an
//! [`Authenticator`] and the transport settings for a service client.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use tracing::debug;

use vmaas_core::{AuthType, Authenticator, RetryPolicy, TransportConfig};

/// Service name used when the caller does not pick one.
pub const DEFAULT_SERVICE_NAME: &str = "vmware";

/// Environment variable naming an explicit credentials file.
pub const CREDENTIALS_FILE_ENV: &str = "IBM_CREDENTIALS_FILE";

/// Credentials file looked up in the working directory.
pub const CREDENTIALS_FILE_NAME: &str = "vmaas-credentials.toml";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no authentication properties found for service '{service}'")]
    NoCredentials { service: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error(transparent)]
    Authenticator(#[from] vmaas_core::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl From<ConfigError> for vmaas_core::Error {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Authenticator(inner) => inner,
            other => Self::Configuration {
                message: other.to_string(),
            },
        }
    }
}

// ── Properties ──────────────────────────────────────────────────────

/// Raw shape shared by the TOML table and the environment variables.
#[derive(Debug, Default, Deserialize)]
struct RawProperties {
    #[serde(default, deserialize_with = "lenient_string")]
    url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    auth_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    apikey: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    username: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    password: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    bearer_token: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    auth_url: Option<String>,
    #[serde(default)]
    disable_ssl: bool,
    #[serde(default)]
    enable_gzip: bool,
    #[serde(default)]
    enable_retries: bool,
    max_retries: Option<u32>,
    retry_interval: Option<u64>,
}

/// Keys whose values are always text, even when they look like numbers
/// or booleans.
const STRING_KEYS: [&str; 7] = [
    "url",
    "auth_type",
    "apikey",
    "username",
    "password",
    "bearer_token",
    "auth_url",
];

/// A scalar config value that is read back as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Bool(bool),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Text(s) => s,
            Scalar::Bool(b) => b.to_string(),
            Scalar::Unsigned(n) => n.to_string(),
            Scalar::Signed(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
        }
    }
}

/// Accept a string, number or bool where a string is expected. TOML files
/// may write `password = 123456` unquoted.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(String::from))
}

/// Properties resolved for one service name.
#[derive(Debug, Default)]
pub struct ServiceProperties {
    pub service_name: String,
    pub url: Option<String>,
    pub auth_type: Option<String>,
    pub apikey: Option<SecretString>,
    pub username: Option<String>,
    pub password: Option<SecretString>,
    pub bearer_token: Option<SecretString>,
    pub auth_url: Option<String>,
    pub disable_ssl: bool,
    pub enable_gzip: bool,
    pub enable_retries: bool,
    pub max_retries: Option<u32>,
    /// Maximum retry interval, in seconds.
    pub retry_interval: Option<u64>,
}

impl ServiceProperties {
    fn from_raw(service_name: &str, raw: RawProperties) -> Self {
        Self {
            service_name: service_name.to_owned(),
            url: raw.url.filter(|u| !u.is_empty()),
            auth_type: raw.auth_type,
            apikey: raw.apikey.map(SecretString::from),
            username: raw.username,
            password: raw.password.map(SecretString::from),
            bearer_token: raw.bearer_token.map(SecretString::from),
            auth_url: raw.auth_url,
            disable_ssl: raw.disable_ssl,
            enable_gzip: raw.enable_gzip,
            enable_retries: raw.enable_retries,
            max_retries: raw.max_retries,
            retry_interval: raw.retry_interval,
        }
    }

    /// The auth flow these properties select.
    ///
    /// An explicit `auth_type` wins; otherwise the first credential present
    /// decides (API key, bearer token, username/password).
    pub fn resolved_auth_type(&self) -> Result<AuthType, ConfigError> {
        if let Some(ref raw) = self.auth_type {
            return raw.parse().map_err(|_| ConfigError::Validation {
                field: "auth_type".into(),
                reason: format!(
                    "expected 'noauth', 'basic', 'bearertoken' or 'iam', got '{raw}'"
                ),
            });
        }

        if self.apikey.is_some() {
            Ok(AuthType::Iam)
        } else if self.bearer_token.is_some() {
            Ok(AuthType::BearerToken)
        } else if self.username.is_some() && self.password.is_some() {
            Ok(AuthType::Basic)
        } else {
            Err(ConfigError::NoCredentials {
                service: self.service_name.clone(),
            })
        }
    }

    /// Build the authenticator these properties describe.
    pub fn authenticator(&self) -> Result<Authenticator, ConfigError> {
        let missing = |field: &str| ConfigError::Validation {
            field: field.into(),
            reason: format!("required for service '{}'", self.service_name),
        };

        let auth = match self.resolved_auth_type()? {
            AuthType::NoAuth => Authenticator::NoAuth,
            AuthType::Basic => Authenticator::basic(
                self.username.clone().ok_or_else(|| missing("username"))?,
                self.password.clone().ok_or_else(|| missing("password"))?,
            )?,
            AuthType::BearerToken => Authenticator::bearer_token(
                self.bearer_token
                    .clone()
                    .ok_or_else(|| missing("bearer_token"))?,
            )?,
            AuthType::Iam => Authenticator::iam(
                self.apikey.clone().ok_or_else(|| missing("apikey"))?,
                self.auth_url.as_deref(),
            )?,
        };
        Ok(auth)
    }

    /// Transport settings, honouring `disable_ssl`.
    pub fn transport(&self) -> TransportConfig {
        let transport = TransportConfig::default();
        if self.disable_ssl {
            transport.with_disable_ssl_verification()
        } else {
            transport
        }
    }

    /// Retry policy, when `enable_retries` is set.
    pub fn retry_policy(&self) -> Option<RetryPolicy> {
        self.enable_retries.then(|| {
            RetryPolicy::new(
                self.max_retries.unwrap_or(0),
                Duration::from_secs(self.retry_interval.unwrap_or(0)),
            )
        })
    }
}

// ── Loading ─────────────────────────────────────────────────────────

/// Environment variable prefix for a service name: `my-svc` → `MY_SVC_`.
pub fn env_prefix(service_name: &str) -> String {
    format!("{}_", service_name.to_ascii_uppercase().replace('-', "_"))
}

/// Resolve the credentials file: explicit env var, then the working
/// directory, then the platform config directory.
pub fn credentials_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CREDENTIALS_FILE_ENV) {
        return Some(PathBuf::from(path));
    }

    let local = PathBuf::from(CREDENTIALS_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    ProjectDirs::from("com", "ibm", "vmaas")
        .map(|dirs| dirs.config_dir().join("credentials.toml"))
        .filter(|p| p.is_file())
}

/// The layered figment for `service_name`: file table, then env vars.
pub fn figment(service_name: &str) -> Figment {
    let file = credentials_path().map_or_else(Figment::new, |path| {
        debug!("reading credentials file {}", path.display());
        Figment::from(Toml::file(path)).focus(service_name)
    });

    let prefix = env_prefix(service_name);
    let mut figment = file.merge(Env::prefixed(&prefix));

    // `Env` parses values into typed scalars, which turns `007` into `7`.
    // Re-read the text keys verbatim so credentials keep their exact form.
    for key in STRING_KEYS {
        if let Ok(value) = std::env::var(format!("{prefix}{}", key.to_ascii_uppercase())) {
            figment = figment.merge(Serialized::default(key, value));
        }
    }
    figment
}

/// Load the properties for `service_name` from file + environment.
pub fn load_properties(service_name: &str) -> Result<ServiceProperties, ConfigError> {
    let raw: RawProperties = figment(service_name).extract()?;
    Ok(ServiceProperties::from_raw(service_name, raw))
}

/// Build an authenticator for `service_name` from external configuration.
pub fn authenticator_from_environment(service_name: &str) -> Result<Authenticator, ConfigError> {
    load_properties(service_name)?.authenticator()
}
