// Transport configuration for building reqwest::Client instances,
// plus the retry policy applied around each send.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, RETRY_AFTER};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// TLS verification mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsMode {
    /// Use the system certificate store.
    #[default]
    System,
    /// Use a custom CA certificate from the given PEM file.
    CustomCa(PathBuf),
    /// Accept any certificate (test endpoints behind self-signed proxies).
    DangerAcceptInvalid,
}

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::System,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("vmaas-rust-sdk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.clone());

        match &self.tls {
            TlsMode::System => {}
            TlsMode::CustomCa(path) => {
                let cert_pem = std::fs::read(path).map_err(|e| {
                    crate::error::Error::configuration(format!("failed to read CA cert: {e}"))
                })?;
                let cert = reqwest::Certificate::from_pem(&cert_pem).map_err(|e| {
                    crate::error::Error::configuration(format!("invalid CA cert: {e}"))
                })?;
                builder = builder.add_root_certificate(cert);
            }
            TlsMode::DangerAcceptInvalid => {
                builder = builder.danger_accept_invalid_certs(true);
            }
        }

        builder.build().map_err(|e| {
            crate::error::Error::configuration(format!("failed to build HTTP client: {e}"))
        })
    }

    /// Skip certificate verification.
    pub fn with_disable_ssl_verification(mut self) -> Self {
        self.tls = TlsMode::DangerAcceptInvalid;
        self
    }
}

// ── RetryPolicy ──────────────────────────────────────────────────────

/// Bounded retry configuration, opt-in per client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts after the first one. Default: 4.
    pub max_retries: u32,
    /// Upper bound on the delay between attempts. Default: 30s.
    pub max_interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 4,
            max_interval: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// Zero values fall back to the defaults.
    pub fn new(max_retries: u32, max_interval: Duration) -> Self {
        let defaults = Self::default();
        Self {
            max_retries: if max_retries == 0 {
                defaults.max_retries
            } else {
                max_retries
            },
            max_interval: if max_interval.is_zero() {
                defaults.max_interval
            } else {
                max_interval
            },
        }
    }

    /// Whether a response with this status should be retried.
    pub fn should_retry_status(status: StatusCode) -> bool {
        status == StatusCode::TOO_MANY_REQUESTS
            || (status.is_server_error() && status != StatusCode::NOT_IMPLEMENTED)
    }

    /// Whether a transport failure should be retried.
    pub fn should_retry_error(err: &reqwest::Error) -> bool {
        err.is_connect() || err.is_timeout()
    }

    /// Delay before retry number `attempt` (0-based).
    ///
    /// A `Retry-After` header given in seconds wins; otherwise
    /// `min(1s * 2^attempt, max_interval)`.
    pub fn backoff(&self, attempt: u32, headers: Option<&HeaderMap>) -> Duration {
        let retry_after = headers
            .and_then(|h| h.get(RETRY_AFTER))
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs);

        let delay = retry_after.unwrap_or_else(|| {
            Duration::from_secs(1).saturating_mul(2_u32.saturating_pow(attempt))
        });
        delay.min(self.max_interval)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
