//! Offering data models (locations, routers, speeds)

use serde::{Deserialize, Serialize};

/// `offering_type` path values
pub mod offering_type {
    pub const DEDICATED: &str = "dedicated";
    pub const CONNECT: &str = "connect";
}

/// A location where gateways of an offering type can be ordered
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LocationOutput {
    pub name: String,
    pub billing_location: Option<String>,
    pub building_colocation_owner: Option<String>,
    pub display_name: Option<String>,
    pub location_type: Option<String>,
    pub macsec_enabled: Option<bool>,
    pub market: Option<String>,
    pub market_geography: Option<String>,
    pub mzr: Option<bool>,
    pub offering_type: Option<String>,
    pub provision_enabled: Option<bool>,
    pub vpc_region: Option<String>,
}

impl LocationOutput {
    /// Display name, falling back to the short name
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LocationCollection {
    pub locations: Vec<LocationOutput>,
}

/// Cross connect router available at a dedicated location
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LocationCrossConnectRouter {
    pub router_name: String,
    #[serde(default)]
    pub capabilities: Vec<String>,
    pub total_connections: Option<u32>,
    pub macsec_enabled: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LocationCrossConnectRouterCollection {
    pub cross_connect_routers: Vec<LocationCrossConnectRouter>,
}

/// Link speed offered for an offering type
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OfferingSpeed {
    pub link_speed: u64,
    #[serde(default)]
    pub capabilities: Vec<String>,
    pub macsec_enabled: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OfferingSpeedCollection {
    pub speeds: Vec<OfferingSpeed>,
}
