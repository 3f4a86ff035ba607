// Operation request construction
//
// Collects everything an operation knows about its HTTP request (method,
// path template, parameters, headers, body) without touching the network.
// `BaseService` turns it into a `reqwest::Request` against the service URL.

use std::collections::HashMap;

use reqwest::Method;
use serde::Serialize;
use url::Url;

use crate::error::Error;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_JSON_PATCH: &str = "application/json-patch+json";
pub const CONTENT_TYPE_MERGE_PATCH: &str = "application/merge-patch+json";

pub const HEADER_ACCEPT_LANGUAGE: &str = "Accept-Language";
pub const HEADER_GLOBAL_TRANSACTION_ID: &str = "X-Global-Transaction-ID";

/// A request body, already serialized.
#[derive(Debug, Clone)]
pub struct RequestBody {
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Everything needed to issue one operation's HTTP request.
#[derive(Debug, Clone)]
pub struct OperationRequest {
    pub method: Method,
    pub operation_id: &'static str,
    path_template: &'static str,
    path_params: Vec<(&'static str, String)>,
    query: Vec<(&'static str, String)>,
    headers: Vec<(String, String)>,
    body: Option<RequestBody>,
}

impl OperationRequest {
    pub fn new(method: Method, path_template: &'static str) -> Self {
        Self {
            method,
            operation_id: "",
            path_template,
            path_params: Vec::new(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn operation(mut self, operation_id: &'static str) -> Self {
        self.operation_id = operation_id;
        self
    }

    /// Value substituted for `{name}` in the path template.
    pub fn path_param(mut self, name: &'static str, value: &str) -> Self {
        self.path_params.push((name, value.to_owned()));
        self
    }

    pub fn query(mut self, name: &'static str, value: impl ToString) -> Self {
        self.query.push((name, value.to_string()));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set `name` only when a value is present.
    pub fn optional_header(self, name: &str, value: Option<&String>) -> Self {
        match value {
            Some(v) => self.header(name, v.as_str()),
            None => self,
        }
    }

    /// Apply caller-supplied headers. Applied last, so they win.
    pub fn custom_headers(mut self, headers: &HashMap<String, String>) -> Self {
        self.headers
            .extend(headers.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    /// Serialize `body` as JSON with the given content type.
    pub fn json_body<B: Serialize + ?Sized>(
        mut self,
        body: &B,
        content_type: &'static str,
    ) -> Result<Self, Error> {
        self.body = Some(RequestBody {
            content_type,
            bytes: serde_json::to_vec(body)?,
        });
        Ok(self)
    }

    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Resolve the full URL: service URL, then the path template with each
    /// parameter pushed as an escaped segment, then the query string.
    pub fn resolve_url(&self, service_url: &str) -> Result<Url, Error> {
        if service_url.is_empty() {
            return Err(Error::MissingServiceUrl);
        }

        let mut url = Url::parse(service_url)?;

        {
            let Ok(mut segments) = url.path_segments_mut() else {
                return Err(Error::configuration(format!(
                    "service URL {service_url:?} cannot carry a path"
                )));
            };
            segments.pop_if_empty();

            for part in self.path_template.split('/').filter(|p| !p.is_empty()) {
                let Some(name) = part.strip_prefix('{').and_then(|p| p.strip_suffix('}')) else {
                    segments.push(part);
                    continue;
                };
                let value = self
                    .path_params
                    .iter()
                    .find(|(n, _)| *n == name)
                    .map(|(_, v)| v.as_str())
                    .unwrap_or_default();
                if value.is_empty() {
                    return Err(Error::validation(format!(
                        "path parameter '{name}' is empty"
                    )));
                }
                segments.push(value);
            }
        }

        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(k, v)| (*k, v.as_str())));
        }

        Ok(url)
    }
}
