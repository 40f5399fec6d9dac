//! Per-call options for export and import route filter operations

use std::collections::HashMap;

use super::models::{RouteFilterTemplate, UpdateRouteFilterTemplate};

/// Options for listing a gateway's export or import filters
#[derive(Debug, Clone)]
pub struct ListGatewayRouteFiltersOptions {
    pub gateway_id: String,
    pub headers: HashMap<String, String>,
}

impl ListGatewayRouteFiltersOptions {
    pub fn new(gateway_id: impl Into<String>) -> Self {
        Self {
            gateway_id: gateway_id.into(),
            headers: HashMap::new(),
        }
    }
}

/// Options for adding one filter
#[derive(Debug, Clone)]
pub struct CreateGatewayRouteFilterOptions {
    pub gateway_id: String,
    pub template: RouteFilterTemplate,
    pub headers: HashMap<String, String>,
}

impl CreateGatewayRouteFilterOptions {
    pub fn new(
        gateway_id: impl Into<String>,
        action: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            gateway_id: gateway_id.into(),
            template: RouteFilterTemplate::new(action, prefix),
            headers: HashMap::new(),
        }
    }

    pub fn with_before(mut self, before: impl Into<String>) -> Self {
        self.template.before = Some(before.into());
        self
    }

    pub fn with_ge(mut self, ge: u32) -> Self {
        self.template.ge = Some(ge);
        self
    }

    pub fn with_le(mut self, le: u32) -> Self {
        self.template.le = Some(le);
        self
    }
}

/// Options for replacing every filter of one kind
#[derive(Debug, Clone)]
pub struct ReplaceGatewayRouteFiltersOptions {
    pub gateway_id: String,
    /// ETag from the last list or replace call
    pub if_match: String,
    pub route_filters: Vec<RouteFilterTemplate>,
    pub headers: HashMap<String, String>,
}

impl ReplaceGatewayRouteFiltersOptions {
    pub fn new(
        gateway_id: impl Into<String>,
        if_match: impl Into<String>,
        route_filters: Vec<RouteFilterTemplate>,
    ) -> Self {
        Self {
            gateway_id: gateway_id.into(),
            if_match: if_match.into(),
            route_filters,
            headers: HashMap::new(),
        }
    }
}

/// Options for deleting one filter
#[derive(Debug, Clone)]
pub struct DeleteGatewayRouteFilterOptions {
    pub gateway_id: String,
    pub id: String,
    pub headers: HashMap<String, String>,
}

impl DeleteGatewayRouteFilterOptions {
    pub fn new(gateway_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            gateway_id: gateway_id.into(),
            id: id.into(),
            headers: HashMap::new(),
        }
    }
}

/// Options for reading one filter
#[derive(Debug, Clone)]
pub struct GetGatewayRouteFilterOptions {
    pub gateway_id: String,
    pub id: String,
    pub headers: HashMap<String, String>,
}

impl GetGatewayRouteFilterOptions {
    pub fn new(gateway_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            gateway_id: gateway_id.into(),
            id: id.into(),
            headers: HashMap::new(),
        }
    }
}

/// Options for patching one filter
#[derive(Debug, Clone)]
pub struct UpdateGatewayRouteFilterOptions {
    pub gateway_id: String,
    pub id: String,
    pub patch: UpdateRouteFilterTemplate,
    pub headers: HashMap<String, String>,
}

impl UpdateGatewayRouteFilterOptions {
    pub fn new(
        gateway_id: impl Into<String>,
        id: impl Into<String>,
        patch: UpdateRouteFilterTemplate,
    ) -> Self {
        Self {
            gateway_id: gateway_id.into(),
            id: id.into(),
            patch,
            headers: HashMap::new(),
        }
    }
}

impl_custom_headers!(
    ListGatewayRouteFiltersOptions,
    CreateGatewayRouteFilterOptions,
    ReplaceGatewayRouteFiltersOptions,
    DeleteGatewayRouteFilterOptions,
    GetGatewayRouteFilterOptions,
    UpdateGatewayRouteFilterOptions,
);
