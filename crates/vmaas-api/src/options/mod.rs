// Per-operation options.
//
// Every options struct has public fields, a `new` taking the required
// values, consuming `with_*` setters and a `Validate` impl that rejects
// unset required fields before any request is built. Required fields are
// `Option`s so that `Default::default()` yields an options value that fails
// validation instead of silently sending empty parameters.

use std::collections::HashMap;

use vmaas_core::OperationRequest;
use vmaas_core::request::{HEADER_ACCEPT_LANGUAGE, HEADER_GLOBAL_TRANSACTION_ID};

mod catalog;
mod clusters;
mod director_sites;
mod pvdcs;
mod vdcs;

pub use catalog::{
    GetVcddPriceOptions, ListDirectorSiteHostProfilesOptions, ListDirectorSiteRegionsOptions,
    ListPricesOptions, ReplaceOrgAdminPasswordOptions,
};
pub use clusters::{
    DeleteDirectorSitesPvdcsClusterOptions, GetDirectorInstancesPvdcsClusterOptions,
    ListDirectorSitesPvdcsClustersOptions, UpdateDirectorSitesPvdcsClusterOptions,
};
pub use director_sites::{
    CreateDirectorSitesOptions, DeleteDirectorSiteOptions, GetDirectorSiteOptions,
    ListDirectorSitesOptions,
};
pub use pvdcs::{
    CreateDirectorSitesPvdcsOptions, GetDirectorSitesPvdcsOptions, ListDirectorSitesPvdcsOptions,
};
pub use vdcs::{CreateVdcOptions, DeleteVdcOptions, GetVdcOptions, ListVdcsOptions, UpdateVdcOptions};

/// Header fields every options struct carries.
pub(crate) trait RequestHeaders {
    fn accept_language(&self) -> Option<&String>;
    fn x_global_transaction_id(&self) -> Option<&String>;
    fn custom_headers(&self) -> &HashMap<String, String>;

    /// Apply the optional headers and then the caller's custom headers.
    fn apply_headers(&self, req: OperationRequest) -> OperationRequest {
        req.optional_header(HEADER_ACCEPT_LANGUAGE, self.accept_language())
            .optional_header(HEADER_GLOBAL_TRANSACTION_ID, self.x_global_transaction_id())
            .custom_headers(self.custom_headers())
    }
}

/// Implements the shared header setters and [`RequestHeaders`] for options
/// structs with `accept_language`, `x_global_transaction_id` and `headers`
/// fields.
macro_rules! header_options {
    ($($options:ty),+ $(,)?) => {$(
        impl $options {
            /// Language for error messages (`Accept-Language`).
            #[must_use]
            pub fn with_accept_language(mut self, accept_language: impl Into<String>) -> Self {
                self.accept_language = Some(accept_language.into());
                self
            }

            /// Transaction id echoed in service logs (`X-Global-Transaction-ID`).
            #[must_use]
            pub fn with_x_global_transaction_id(mut self, id: impl Into<String>) -> Self {
                self.x_global_transaction_id = Some(id.into());
                self
            }

            /// Extra headers, applied after all others.
            #[must_use]
            pub fn with_headers(
                mut self,
                headers: ::std::collections::HashMap<String, String>,
            ) -> Self {
                self.headers = headers;
                self
            }
        }

        impl $crate::options::RequestHeaders for $options {
            fn accept_language(&self) -> Option<&String> {
                self.accept_language.as_ref()
            }

            fn x_global_transaction_id(&self) -> Option<&String> {
                self.x_global_transaction_id.as_ref()
            }

            fn custom_headers(&self) -> &::std::collections::HashMap<String, String> {
                &self.headers
            }
        }
    )+};
}

pub(crate) use header_options;
