//! Per-call options for AS prepend operations

use std::collections::HashMap;

use super::models::AsPrependTemplate;

/// Options for `list_gateway_as_prepends`
#[derive(Debug, Clone)]
pub struct ListGatewayAsPrependsOptions {
    pub gateway_id: String,
    pub headers: HashMap<String, String>,
}

impl ListGatewayAsPrependsOptions {
    pub fn new(gateway_id: impl Into<String>) -> Self {
        Self {
            gateway_id: gateway_id.into(),
            headers: HashMap::new(),
        }
    }
}

/// Options for `replace_gateway_as_prepends`
#[derive(Debug, Clone)]
pub struct ReplaceGatewayAsPrependsOptions {
    pub gateway_id: String,
    /// ETag from the last list or replace call
    pub if_match: String,
    pub as_prepends: Vec<AsPrependTemplate>,
    pub headers: HashMap<String, String>,
}

impl ReplaceGatewayAsPrependsOptions {
    pub fn new(
        gateway_id: impl Into<String>,
        if_match: impl Into<String>,
        as_prepends: Vec<AsPrependTemplate>,
    ) -> Self {
        Self {
            gateway_id: gateway_id.into(),
            if_match: if_match.into(),
            as_prepends,
            headers: HashMap::new(),
        }
    }
}

impl_custom_headers!(ListGatewayAsPrependsOptions, ReplaceGatewayAsPrependsOptions);
