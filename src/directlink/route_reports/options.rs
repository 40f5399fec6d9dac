//! Per-call options for route report operations

use std::collections::HashMap;

/// Options for listing or creating route reports
#[derive(Debug, Clone)]
pub struct GatewayRouteReportsOptions {
    pub gateway_id: String,
    pub headers: HashMap<String, String>,
}

impl GatewayRouteReportsOptions {
    pub fn new(gateway_id: impl Into<String>) -> Self {
        Self {
            gateway_id: gateway_id.into(),
            headers: HashMap::new(),
        }
    }
}

pub type ListGatewayRouteReportsOptions = GatewayRouteReportsOptions;
pub type CreateGatewayRouteReportOptions = GatewayRouteReportsOptions;

/// Options for reading or deleting one route report
#[derive(Debug, Clone)]
pub struct GatewayRouteReportOptions {
    pub gateway_id: String,
    pub id: String,
    pub headers: HashMap<String, String>,
}

impl GatewayRouteReportOptions {
    pub fn new(gateway_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            gateway_id: gateway_id.into(),
            id: id.into(),
            headers: HashMap::new(),
        }
    }
}

pub type GetGatewayRouteReportOptions = GatewayRouteReportOptions;
pub type DeleteGatewayRouteReportOptions = GatewayRouteReportOptions;

impl_custom_headers!(GatewayRouteReportsOptions, GatewayRouteReportOptions);
