//! Offering output rows (locations, speeds, routers)

use super::common::opt;
use super::Record;
use crate::directlink::offerings::{LocationCrossConnectRouter, LocationOutput, OfferingSpeed};

impl Record for LocationOutput {
    fn headers() -> &'static [&'static str] {
        &["NAME", "DISPLAY NAME", "TYPE", "MARKET", "VPC REGION", "MACSEC"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.display_name().to_string(),
            opt(self.location_type.as_deref()),
            opt(self.market.as_deref()),
            opt(self.vpc_region.as_deref()),
            opt(self.macsec_enabled),
        ]
    }
}

impl Record for OfferingSpeed {
    fn headers() -> &'static [&'static str] {
        &["SPEED (MBPS)", "CAPABILITIES", "MACSEC"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.link_speed.to_string(),
            self.capabilities.join(" "),
            opt(self.macsec_enabled),
        ]
    }
}

impl Record for LocationCrossConnectRouter {
    fn headers() -> &'static [&'static str] {
        &["ROUTER", "CONNECTIONS", "CAPABILITIES"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.router_name.clone(),
            opt(self.total_connections),
            self.capabilities.join(" "),
        ]
    }
}
