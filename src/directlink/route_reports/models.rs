//! Route report data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Route report `status` values
pub mod route_report_status {
    pub const PENDING: &str = "pending";
    pub const COMPLETE: &str = "complete";
}

/// Prefix advertised to the on-premises network
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RouteReportAdvertisedRoute {
    pub prefix: String,
    pub as_path: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RouteReportRoute {
    pub prefix: String,
}

/// Prefix learned from the on-premises network
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RouteReportOnPremRoute {
    pub prefix: Option<String>,
    pub as_path: Option<String>,
    pub next_hop: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RouteReportOverlappingRoute {
    pub prefix: String,
    #[serde(rename = "type")]
    pub route_type: Option<String>,
    pub virtual_connection_id: Option<String>,
}

/// Routes that overlap one another
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RouteReportOverlappingRouteGroup {
    #[serde(default)]
    pub routes: Vec<RouteReportOverlappingRoute>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RouteReportConnectionRoute {
    pub prefix: Option<String>,
    pub active: Option<bool>,
    pub local_preference: Option<String>,
}

/// Routes reachable over one virtual connection
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RouteReportConnection {
    #[serde(default)]
    pub routes: Vec<RouteReportConnectionRoute>,
    pub virtual_connection_id: Option<String>,
    pub virtual_connection_name: Option<String>,
    pub virtual_connection_type: Option<String>,
}

/// Snapshot of a gateway's routing tables
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RouteReport {
    pub id: String,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub advertised_routes: Vec<RouteReportAdvertisedRoute>,
    #[serde(default)]
    pub gateway_routes: Vec<RouteReportRoute>,
    #[serde(default)]
    pub on_prem_routes: Vec<RouteReportOnPremRoute>,
    #[serde(default)]
    pub overlapping_routes: Vec<RouteReportOverlappingRouteGroup>,
    #[serde(default)]
    pub virtual_connection_routes: Vec<RouteReportConnection>,
}

impl RouteReport {
    pub fn is_complete(&self) -> bool {
        self.status == route_report_status::COMPLETE
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RouteReportCollection {
    pub route_reports: Vec<RouteReport>,
}
