// VmwareV1: the VMware as a Service API client
//
// Wraps a `BaseService` from vmaas-core. Construction resolves the service
// URL and authenticator from explicit options, falling back to external
// configuration (credentials file + environment) for the service name.
// Operations live in `crate::operations`, one `impl VmwareV1` per resource.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use tracing::debug;

use vmaas_config::{DEFAULT_SERVICE_NAME, ServiceProperties, load_properties};
use vmaas_core::{
    Authenticator, BaseService, CallContext, DetailedResponse, Error, OperationRequest,
    RetryPolicy, ServiceOptions, TransportConfig,
};

use crate::options::RequestHeaders;

/// Base URL of the `us-south` region.
pub const DEFAULT_SERVICE_URL: &str = "https://api.us-south.vmware.cloud.ibm.com/v1";

const REGIONS: &[&str] = &[
    "us-south", "eu-de", "eu-gb", "jp-tok", "au-syd", "us-east", "ca-tor",
];

/// Service URL for a region, or `None` for an unknown region.
pub fn service_url_for_region(region: &str) -> Option<String> {
    REGIONS
        .contains(&region)
        .then(|| format!("https://api.{region}.vmware.cloud.ibm.com/v1"))
}

/// Construction parameters for [`VmwareV1`].
#[derive(Debug, Clone, Default)]
pub struct VmwareV1Options {
    /// Name used to look up external configuration. Defaults to `vmware`.
    pub service_name: Option<String>,
    /// Explicit base URL; wins over external configuration.
    pub url: Option<String>,
    /// Explicit authenticator; wins over external configuration.
    pub authenticator: Option<Arc<Authenticator>>,
    /// Explicit transport settings.
    pub transport: Option<TransportConfig>,
}

impl VmwareV1Options {
    #[must_use]
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_authenticator(mut self, authenticator: impl Into<Arc<Authenticator>>) -> Self {
        self.authenticator = Some(authenticator.into());
        self
    }

    #[must_use]
    pub fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transport = Some(transport);
        self
    }
}

/// Client for the VMware as a Service API, version 1.
///
/// Cloning gives an independent client (URL, headers, retry policy) that
/// shares the authenticator and its token cache.
#[derive(Debug, Clone)]
pub struct VmwareV1 {
    service: BaseService,
}

impl VmwareV1 {
    /// Build a client.
    ///
    /// External configuration is only consulted when `url` or
    /// `authenticator` is missing. When it is, its gzip, retry and
    /// `disable_ssl` settings apply too.
    pub fn new(options: VmwareV1Options) -> Result<Self, Error> {
        let service_name = options
            .service_name
            .as_deref()
            .unwrap_or(DEFAULT_SERVICE_NAME);

        let properties = if options.url.is_none() || options.authenticator.is_none() {
            Some(load_properties(service_name)?)
        } else {
            None
        };

        let authenticator = match (options.authenticator, properties.as_ref()) {
            (Some(auth), _) => auth,
            (None, Some(props)) => Arc::new(props.authenticator()?),
            (None, None) => {
                return Err(Error::configuration("an authenticator is required"));
            }
        };

        let url = options
            .url
            .or_else(|| properties.as_ref().and_then(|p| p.url.clone()))
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_owned());

        let transport = options
            .transport
            .or_else(|| properties.as_ref().map(ServiceProperties::transport))
            .unwrap_or_default();

        debug!(service = service_name, url = %url, "creating VMware service client");

        let mut service = BaseService::new(ServiceOptions {
            url: url.trim_end_matches('/').to_owned(),
            authenticator,
            transport,
        })?;

        if let Some(props) = properties.as_ref() {
            service.set_enable_gzip_compression(props.enable_gzip);
            if let Some(policy) = props.retry_policy() {
                service.enable_retries(policy.max_retries, policy.max_interval);
            }
        }

        Ok(Self { service })
    }

    /// Build a client entirely from external configuration for `service_name`.
    pub fn new_from_environment(service_name: &str) -> Result<Self, Error> {
        Self::new(VmwareV1Options::default().with_service_name(service_name))
    }

    // ── Configuration ────────────────────────────────────────────────

    pub fn service_url(&self) -> &str {
        self.service.service_url()
    }

    pub fn set_service_url(&mut self, url: &str) -> Result<(), Error> {
        self.service.set_service_url(url)
    }

    pub fn authenticator(&self) -> &Arc<Authenticator> {
        self.service.authenticator()
    }

    /// Headers sent with every request, before any per-call header.
    pub fn set_default_headers(&mut self, headers: HeaderMap) {
        self.service.set_default_headers(headers);
    }

    pub fn set_enable_gzip_compression(&mut self, enable: bool) {
        self.service.set_enable_gzip_compression(enable);
    }

    pub fn enable_gzip_compression(&self) -> bool {
        self.service.enable_gzip_compression()
    }

    /// Retry transient failures. Zero values select the defaults
    /// (4 retries, 30s maximum interval).
    pub fn enable_retries(&mut self, max_retries: u32, max_interval: Duration) {
        self.service.enable_retries(max_retries, max_interval);
    }

    pub fn disable_retries(&mut self) {
        self.service.disable_retries();
    }

    pub fn retry_policy(&self) -> Option<RetryPolicy> {
        self.service.retry_policy()
    }

    // ── Internals ────────────────────────────────────────────────────

    /// Apply the per-call headers of `options` to `req` and issue it.
    pub(crate) async fn execute<T, O>(
        &self,
        ctx: &CallContext,
        options: &O,
        req: OperationRequest,
    ) -> Result<DetailedResponse<T>, Error>
    where
        T: DeserializeOwned,
        O: RequestHeaders,
    {
        self.service.request(ctx, options.apply_headers(req)).await
    }
}
