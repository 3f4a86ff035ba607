// Base service: sends `OperationRequest`s and decodes their responses.
//
// Owns the HTTP client, service URL, authenticator, retry policy and
// gzip toggle. Generated service clients wrap one of these and call
// `request` once per operation.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use flate2::Compression;
use flate2::write::GzEncoder;
use reqwest::header::{ACCEPT, CONTENT_ENCODING, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};
use url::Url;

use crate::auth::Authenticator;
use crate::context::CallContext;
use crate::error::Error;
use crate::request::{CONTENT_TYPE_JSON, OperationRequest};
use crate::response::{DetailedResponse, is_json_mime_type, preview};
use crate::transport::{RetryPolicy, TransportConfig};

// ── Error response shape ─────────────────────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    errors: Vec<ErrorItem>,
    #[serde(default)]
    error: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default, rename = "errorMessage")]
    error_message: Option<String>,
}

#[derive(serde::Deserialize)]
struct ErrorItem {
    #[serde(default)]
    message: Option<String>,
}

/// Construction parameters for [`BaseService`].
#[derive(Debug, Clone)]
pub struct ServiceOptions {
    /// Base URL; may be empty, in which case every call fails with
    /// [`Error::MissingServiceUrl`] until one is set.
    pub url: String,
    pub authenticator: Arc<Authenticator>,
    pub transport: TransportConfig,
}

/// Shared request machinery for a generated service client.
///
/// Cloning yields an independent service: URL, default headers, retry
/// policy and gzip setting are copied, the authenticator is shared.
#[derive(Debug, Clone)]
pub struct BaseService {
    http: reqwest::Client,
    service_url: String,
    authenticator: Arc<Authenticator>,
    default_headers: HeaderMap,
    retry: Option<RetryPolicy>,
    enable_gzip: bool,
}

impl BaseService {
    pub fn new(options: ServiceOptions) -> Result<Self, Error> {
        validate_service_url(&options.url)?;
        let http = options.transport.build_client()?;
        Ok(Self {
            http,
            service_url: options.url,
            authenticator: options.authenticator,
            default_headers: HeaderMap::new(),
            retry: None,
            enable_gzip: false,
        })
    }

    // ── Configuration ────────────────────────────────────────────────

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Replace the base URL. An empty string is accepted; calls will then
    /// fail with [`Error::MissingServiceUrl`].
    pub fn set_service_url(&mut self, url: &str) -> Result<(), Error> {
        validate_service_url(url)?;
        self.service_url = url.trim_end_matches('/').to_owned();
        Ok(())
    }

    pub fn authenticator(&self) -> &Arc<Authenticator> {
        &self.authenticator
    }

    /// Headers sent with every request, before per-operation headers.
    pub fn set_default_headers(&mut self, headers: HeaderMap) {
        self.default_headers = headers;
    }

    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    pub fn set_enable_gzip_compression(&mut self, enable: bool) {
        self.enable_gzip = enable;
    }

    pub fn enable_gzip_compression(&self) -> bool {
        self.enable_gzip
    }

    /// Retry transient failures up to `max_retries` times, waiting at most
    /// `max_interval` between attempts. Zero values use the defaults.
    pub fn enable_retries(&mut self, max_retries: u32, max_interval: Duration) {
        self.retry = Some(RetryPolicy::new(max_retries, max_interval));
    }

    pub fn disable_retries(&mut self) {
        self.retry = None;
    }

    pub fn retry_policy(&self) -> Option<RetryPolicy> {
        self.retry
    }

    // ── Request execution ────────────────────────────────────────────

    /// Issue `req` and decode a successful JSON body into `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        ctx: &CallContext,
        req: OperationRequest,
    ) -> Result<DetailedResponse<T>, Error> {
        let url = req.resolve_url(&self.service_url)?;
        debug!(operation = req.operation_id, "{} {url}", req.method);

        let request = self.build_request(&req, url)?;

        ctx.run(async move {
            let mut request = request;
            self.authenticator
                .authenticate(request.headers_mut())
                .await?;
            let resp = self.send(request).await?;
            Self::process_response(resp).await
        })
        .await
    }

    fn build_request(&self, req: &OperationRequest, url: Url) -> Result<reqwest::Request, Error> {
        let mut headers = self.default_headers.clone();
        headers.insert(ACCEPT, HeaderValue::from_static(CONTENT_TYPE_JSON));

        let mut body = None;
        if let Some(payload) = req.body() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(payload.content_type));
            if self.enable_gzip {
                headers.insert(CONTENT_ENCODING, HeaderValue::from_static("gzip"));
                body = Some(gzip(&payload.bytes)?);
            } else {
                body = Some(payload.bytes.clone());
            }
        }

        for (name, value) in req.headers() {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::validation(format!("invalid header name {name:?}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::validation(format!("invalid value for header {name}: {e}")))?;
            headers.insert(name, value);
        }

        let mut request = reqwest::Request::new(req.method.clone(), url);
        *request.headers_mut() = headers;
        *request.body_mut() = body.map(reqwest::Body::from);
        Ok(request)
    }

    /// Send once, or under the retry policy when one is enabled.
    async fn send(&self, request: reqwest::Request) -> Result<reqwest::Response, Error> {
        let Some(policy) = self.retry else {
            return Ok(self.http.execute(request).await?);
        };

        let mut attempt = 0;
        loop {
            let Some(this_try) = request.try_clone() else {
                return Ok(self.http.execute(request).await?);
            };

            let delay = match self.http.execute(this_try).await {
                Ok(resp)
                    if attempt < policy.max_retries
                        && RetryPolicy::should_retry_status(resp.status()) =>
                {
                    warn!(status = %resp.status(), attempt, "retrying request");
                    policy.backoff(attempt, Some(resp.headers()))
                }
                Err(e) if attempt < policy.max_retries && RetryPolicy::should_retry_error(&e) => {
                    warn!(error = %e, attempt, "retrying request");
                    policy.backoff(attempt, None)
                }
                other => return Ok(other?),
            };

            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    async fn process_response<T: DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<DetailedResponse<T>, Error> {
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.text().await?;
        trace!(%status, bytes = body.len(), "response received");

        let raw = |body: String| {
            Box::new(DetailedResponse {
                status_code: status,
                headers: headers.clone(),
                result: Some(body),
            })
        };

        if !status.is_success() {
            let message = error_message(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown Error").to_owned());
            return Err(Error::Api {
                status: status.as_u16(),
                message,
                response: raw(body),
            });
        }

        if body.trim().is_empty() {
            return Ok(DetailedResponse {
                status_code: status,
                headers,
                result: None,
            });
        }

        let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());
        if let Some(ct) = content_type {
            if !is_json_mime_type(ct) {
                return Err(Error::ResponseProcessing {
                    message: format!("unexpected content type {ct:?}"),
                    response: raw(body),
                });
            }
        }

        match serde_json::from_str(&body) {
            Ok(result) => Ok(DetailedResponse {
                status_code: status,
                headers,
                result: Some(result),
            }),
            Err(e) => Err(Error::ResponseProcessing {
                message: format!("{e} (body preview: {:?})", preview(&body)),
                response: raw(body),
            }),
        }
    }
}

fn validate_service_url(url: &str) -> Result<(), Error> {
    if url.is_empty() {
        return Ok(());
    }
    Url::parse(url)
        .map(|_| ())
        .map_err(|e| Error::configuration(format!("invalid service URL {url:?}: {e}")))
}

fn gzip(bytes: &[u8]) -> Result<Vec<u8>, Error> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).map_err(Error::Compression)?;
    encoder.finish().map_err(Error::Compression)
}

/// Pull a human-readable message out of an error body.
fn error_message(body: &str) -> Option<String> {
    let parsed: ErrorResponse = serde_json::from_str(body).ok()?;
    parsed
        .errors
        .into_iter()
        .find_map(|e| e.message)
        .or(parsed.message)
        .or_else(|| match parsed.error {
            Some(serde_json::Value::String(s)) => Some(s),
            Some(serde_json::Value::Object(map)) => map
                .get("message")
                .and_then(|m| m.as_str())
                .map(String::from),
            _ => None,
        })
        .or(parsed.error_message)
}
