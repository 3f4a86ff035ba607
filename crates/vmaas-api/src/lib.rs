//! Client for the IBM Cloud VMware as a Service API (v1).
//!
//! [`VmwareV1`] provisions and manages director sites, provider virtual
//! data centers (PVDCs), clusters and virtual data centers (VDCs). Every
//! operation takes an options struct from [`options`], issues one HTTP
//! request and returns a [`DetailedResponse`] holding the decoded model
//! from [`models`].
//!
//! ```no_run
//! # async fn example() -> Result<(), vmaas_api::Error> {
//! use vmaas_api::{VmwareV1, options::ListDirectorSitesOptions};
//!
//! let client = VmwareV1::new_from_environment("vmware")?;
//! let sites = client
//!     .list_director_sites(&ListDirectorSitesOptions::new())
//!     .await?;
//! for site in sites.result().map(|c| &c.director_sites).into_iter().flatten() {
//!     println!("{:?} {:?}", site.name, site.status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod models;
mod operations;
pub mod options;
mod service;

pub use service::{DEFAULT_SERVICE_URL, VmwareV1, VmwareV1Options, service_url_for_region};

pub use vmaas_core::{
    AuthType, Authenticator, CallContext, DetailedResponse, Error, RawResponse, RetryPolicy, TlsMode,
    TransportConfig,
};
