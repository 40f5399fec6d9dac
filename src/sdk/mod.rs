//! Shared SDK core used by the Direct Link client
//!
//! Authentication, retries, service URL handling, external configuration,
//! merge-patch bodies and pagination cursors live here.

pub mod authenticator;
pub mod external_config;
pub mod merge_patch;
pub mod pagination;
mod service;

pub use authenticator::{
    Authenticator, BasicAuthenticator, BearerTokenAuthenticator, NoAuthAuthenticator,
};
pub use external_config::ServiceProperties;
pub use merge_patch::AsPatch;
pub use pagination::{get_query_param, next_start, PageFirst, PageNext};
pub use service::{BaseService, RetryPolicy};
