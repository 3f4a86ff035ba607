use thiserror::Error;

use crate::response::DetailedResponse;

/// Message carried by [`Error::MissingServiceUrl`].
pub const ERRORMSG_SERVICE_URL_MISSING: &str = "service URL is missing";

/// Raw response attached to errors raised after a status line was received.
pub type RawResponse = DetailedResponse<String>;

/// Top-level error type for the SDK.
///
/// Covers every failure mode of an operation call: argument validation,
/// client configuration, transport, deadline/cancellation, and response
/// processing. Errors raised after a status line was received carry the
/// raw response; see [`Error::response`].
#[derive(Debug, Error)]
pub enum Error {
    // ── Before any request is sent ──────────────────────────────────
    /// A required option was unset or a parameter was malformed.
    #[error("{message}")]
    Validation { message: String },

    /// The client could not be configured (bad URL, unusable authenticator).
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// The service URL is empty.
    #[error("service URL is missing")]
    MissingServiceUrl,

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request body serialization failed.
    #[error("failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Gzip request compression failed.
    #[error("failed to compress request body: {0}")]
    Compression(std::io::Error),

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The caller-supplied deadline elapsed before the call completed.
    #[error("context deadline exceeded")]
    DeadlineExceeded,

    /// The caller cancelled the call.
    #[error("context canceled")]
    Cancelled,

    /// The authenticator could not produce credentials for the request.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── After a status line was received ────────────────────────────
    /// The call succeeded but the body could not be decoded.
    #[error("An error occurred while processing the operation response: {message}")]
    ResponseProcessing {
        message: String,
        response: Box<RawResponse>,
    },

    /// The service answered with a non-success status.
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        response: Box<RawResponse>,
    },
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// The raw HTTP response, when one was received.
    ///
    /// `None` for every error raised before a status line arrived
    /// (validation, missing URL, transport, deadline).
    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            Self::ResponseProcessing { response, .. } | Self::Api { response, .. } => {
                Some(response)
            }
            _ => None,
        }
    }

    /// HTTP status code, when a response was received.
    pub fn status(&self) -> Option<u16> {
        self.response().map(|r| r.status_code.as_u16())
    }

    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Api { status, .. } => *status == 429 || (*status >= 500 && *status != 501),
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}
