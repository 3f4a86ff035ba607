// vmaas-core: HTTP core for the VMware as a Service SDK
//
// Authentication, transport configuration, retries, gzip request
// compression, deadlines, request construction and response decoding.
// Service crates build `OperationRequest`s and hand them to `BaseService`.

pub mod auth;
pub mod context;
pub mod error;
pub mod request;
pub mod response;
pub mod service;
pub mod transport;
pub mod validate;

pub use auth::{AuthType, Authenticator, IamAuthenticator};
pub use context::CallContext;
pub use error::{ERRORMSG_SERVICE_URL_MISSING, Error, RawResponse};
pub use request::OperationRequest;
pub use response::DetailedResponse;
pub use service::{BaseService, ServiceOptions};
pub use transport::{RetryPolicy, TlsMode, TransportConfig};
pub use validate::Validate;
