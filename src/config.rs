/// Configuration constants for the Direct Link API
pub mod api {
    /// Default service endpoint
    pub const DEFAULT_SERVICE_URL: &str = "https://directlink.cloud.ibm.com/v1";

    /// Gateways endpoint
    pub const GATEWAYS: &str = "gateways";

    /// Ports endpoint
    pub const PORTS: &str = "ports";

    /// Offering types endpoint
    pub const OFFERING_TYPES: &str = "offering_types";

    /// Virtual connections (nested under a gateway)
    pub const VIRTUAL_CONNECTIONS: &str = "virtual_connections";

    /// Export route filters (nested under a gateway)
    pub const EXPORT_ROUTE_FILTERS: &str = "export_route_filters";

    /// Import route filters (nested under a gateway)
    pub const IMPORT_ROUTE_FILTERS: &str = "import_route_filters";

    /// Route reports (nested under a gateway)
    pub const ROUTE_REPORTS: &str = "route_reports";

    /// AS path prepends (nested under a gateway)
    pub const AS_PREPENDS: &str = "as_prepends";

    /// Query parameter carrying the API version date
    pub const VERSION_PARAM: &str = "version";

    /// Largest page the ports listing accepts
    pub const MAX_PAGE_LIMIT: u32 = 100;

    /// Content type for JSON Merge-Patch bodies
    pub const MERGE_PATCH_CONTENT_TYPE: &str = "application/merge-patch+json";

    /// User agent sent on every request
    pub const USER_AGENT: &str = concat!("directlink-rust-sdk/", env!("CARGO_PKG_VERSION"));
}

/// Names used when loading service properties from the environment
pub mod external {
    /// Default service name; property keys are `DIRECTLINK_<SUFFIX>`
    pub const DEFAULT_SERVICE_NAME: &str = "directlink";

    /// Credentials file name looked up in the working and home directories
    pub const CREDENTIALS_FILE_NAME: &str = "ibm-credentials.env";

    /// Environment variable pointing at an explicit credentials file
    pub const CREDENTIALS_FILE_ENV: &str = "IBM_CREDENTIALS_FILE";

    pub const PROP_URL: &str = "URL";
    pub const PROP_AUTH_TYPE: &str = "AUTH_TYPE";
    pub const PROP_BEARER_TOKEN: &str = "BEARER_TOKEN";
    pub const PROP_USERNAME: &str = "USERNAME";
    pub const PROP_PASSWORD: &str = "PASSWORD";
    pub const PROP_DISABLE_SSL: &str = "DISABLE_SSL";
    pub const PROP_ENABLE_RETRIES: &str = "ENABLE_RETRIES";
    pub const PROP_MAX_RETRIES: &str = "MAX_RETRIES";
    pub const PROP_RETRY_INTERVAL: &str = "RETRY_INTERVAL";
}

/// Default values
pub mod defaults {
    /// API version date sent when the caller does not pick one
    pub const API_VERSION: &str = "2024-05-21";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Retries used when retries are enabled without an explicit count
    pub const MAX_RETRIES: u32 = 4;

    /// Upper bound on the wait between retries, in seconds
    pub const RETRY_INTERVAL_SECS: u64 = 30;

    /// Connect timeout, in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Overall request timeout, in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_service_url_is_https() {
        assert!(api::DEFAULT_SERVICE_URL.starts_with("https://"));
        assert!(!api::DEFAULT_SERVICE_URL.ends_with('/'));
    }

    #[test]
    fn test_user_agent_carries_version() {
        assert!(api::USER_AGENT.starts_with("directlink-rust-sdk/"));
        assert!(api::USER_AGENT.ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_default_api_version_is_a_date() {
        let parts: Vec<&str> = defaults::API_VERSION.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 4);
    }
}
