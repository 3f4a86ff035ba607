// Request authentication
//
// Each variant carries the secret material for one auth flow and knows
// how to turn it into an `Authorization` header. IAM tokens are fetched
// lazily and cached behind a mutex so concurrent calls share one token.

use std::time::{Duration, Instant};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::response::preview;

/// Default IAM token endpoint host.
pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com";

const IAM_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";
const IAM_TOKEN_PATH: &str = "/identity/token";

/// Marker enum naming an auth flow, as written in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AuthType {
    NoAuth,
    Basic,
    BearerToken,
    Iam,
}

/// Credentials attached to every outgoing request.
#[derive(Debug)]
pub enum Authenticator {
    /// No `Authorization` header.
    NoAuth,
    /// HTTP basic auth.
    Basic {
        username: String,
        password: SecretString,
    },
    /// A caller-managed bearer token.
    BearerToken { token: SecretString },
    /// API key exchanged for short-lived IAM bearer tokens.
    Iam(IamAuthenticator),
}

impl Authenticator {
    /// Build a validated basic authenticator.
    pub fn basic(username: impl Into<String>, password: SecretString) -> Result<Self, Error> {
        let username = username.into();
        check_credential("username", &username)?;
        check_credential("password", password.expose_secret())?;
        Ok(Self::Basic { username, password })
    }

    /// Build a validated bearer-token authenticator.
    pub fn bearer_token(token: SecretString) -> Result<Self, Error> {
        check_credential("bearer token", token.expose_secret())?;
        Ok(Self::BearerToken { token })
    }

    /// Build a validated IAM authenticator. `url` defaults to [`DEFAULT_IAM_URL`].
    pub fn iam(apikey: SecretString, url: Option<&str>) -> Result<Self, Error> {
        IamAuthenticator::new(apikey, url).map(Self::Iam)
    }

    pub fn auth_type(&self) -> AuthType {
        match self {
            Self::NoAuth => AuthType::NoAuth,
            Self::Basic { .. } => AuthType::Basic,
            Self::BearerToken { .. } => AuthType::BearerToken,
            Self::Iam(_) => AuthType::Iam,
        }
    }

    /// Add the `Authorization` header for this flow to `headers`.
    pub async fn authenticate(&self, headers: &mut HeaderMap) -> Result<(), Error> {
        let value = match self {
            Self::NoAuth => return Ok(()),
            Self::Basic { username, password } => {
                let raw = format!("{username}:{}", password.expose_secret());
                format!("Basic {}", STANDARD.encode(raw))
            }
            Self::BearerToken { token } => format!("Bearer {}", token.expose_secret()),
            Self::Iam(iam) => format!("Bearer {}", iam.access_token().await?.expose_secret()),
        };

        let mut value = HeaderValue::from_str(&value).map_err(|e| Error::Authentication {
            message: format!("invalid authorization header value: {e}"),
        })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
        Ok(())
    }
}

/// Reject empty credentials and values still wrapped in `{}` or quotes,
/// which usually means a template placeholder was never filled in.
fn check_credential(name: &str, value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::configuration(format!("the {name} must not be empty")));
    }
    let wrapped = |open: char, close: char| value.starts_with(open) || value.ends_with(close);
    if wrapped('{', '}') || wrapped('"', '"') {
        return Err(Error::configuration(format!(
            "the {name} must not start or end with '{{', '}}' or '\"'"
        )));
    }
    Ok(())
}

// ── IAM ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct IamTokenResponse {
    access_token: String,
    expires_in: u64,
}

#[derive(Debug)]
struct CachedToken {
    token: SecretString,
    refresh_at: Instant,
}

/// Exchanges an API key for IAM access tokens.
#[derive(Debug)]
pub struct IamAuthenticator {
    apikey: SecretString,
    token_url: Url,
    http: reqwest::Client,
    cached: Mutex<Option<CachedToken>>,
}

impl IamAuthenticator {
    pub fn new(apikey: SecretString, url: Option<&str>) -> Result<Self, Error> {
        check_credential("apikey", apikey.expose_secret())?;

        let base = url.unwrap_or(DEFAULT_IAM_URL).trim_end_matches('/');
        let token_url = Url::parse(&format!("{base}{IAM_TOKEN_PATH}"))
            .map_err(|e| Error::configuration(format!("invalid IAM URL {base:?}: {e}")))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::configuration(format!("failed to build IAM client: {e}")))?;

        Ok(Self {
            apikey,
            token_url,
            http,
            cached: Mutex::new(None),
        })
    }

    /// The token endpoint this authenticator posts to.
    pub fn token_url(&self) -> &Url {
        &self.token_url
    }

    /// A valid access token, fetching a new one when the cached token
    /// has used up 80% of its lifetime.
    pub async fn access_token(&self) -> Result<SecretString, Error> {
        let mut cached = self.cached.lock().await;
        if let Some(ref token) = *cached {
            if Instant::now() < token.refresh_at {
                return Ok(token.token.clone());
            }
            trace!("IAM token due for refresh");
        }

        let fresh = self.request_token().await?;
        let token = fresh.token.clone();
        *cached = Some(fresh);
        Ok(token)
    }

    async fn request_token(&self) -> Result<CachedToken, Error> {
        debug!("requesting IAM token from {}", self.token_url);

        let body = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("grant_type", IAM_GRANT_TYPE)
            .append_pair("apikey", self.apikey.expose_secret())
            .append_pair("response_type", "cloud_iam")
            .finish();

        let resp = self
            .http
            .post(self.token_url.clone())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Accept", "application/json")
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Authentication {
                message: format!(
                    "IAM token request failed (HTTP {status}): {}",
                    preview(&body)
                ),
            });
        }

        let parsed: IamTokenResponse = resp.json().await.map_err(|e| Error::Authentication {
            message: format!("invalid IAM token response: {e}"),
        })?;

        let lifetime = Duration::from_secs(parsed.expires_in).mul_f64(0.8);
        Ok(CachedToken {
            token: SecretString::from(parsed.access_token),
            refresh_at: Instant::now() + lifetime,
        })
    }
}
