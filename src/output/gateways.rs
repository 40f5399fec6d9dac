//! Gateway output rows

use super::common::{format_time, opt};
use super::Record;
use crate::directlink::gateways::{Gateway, GatewayStatistic, GatewayStatus};

impl Record for Gateway {
    fn headers() -> &'static [&'static str] {
        &[
            "ID",
            "NAME",
            "TYPE",
            "LOCATION",
            "SPEED (MBPS)",
            "BGP ASN",
            "OPERATIONAL STATUS",
            "BGP STATUS",
            "PENDING CHANGE",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.gateway_type.clone(),
            self.location().to_string(),
            self.speed_mbps().to_string(),
            opt(self.bgp_asn),
            self.operational_status().to_string(),
            opt(self.bgp_status.as_deref()),
            if self.has_pending_change() { "Yes" } else { "No" }.to_string(),
        ]
    }
}

impl Record for GatewayStatus {
    fn headers() -> &'static [&'static str] {
        &["TYPE", "VALUE", "UPDATED AT"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.status_type.clone(),
            self.value.clone(),
            format_time(self.updated_at.as_ref()),
        ]
    }
}

impl Record for GatewayStatistic {
    fn headers() -> &'static [&'static str] {
        &["TYPE", "CREATED AT", "DATA"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.statistic_type.clone(),
            format_time(self.created_at.as_ref()),
            opt(self.data.as_deref()),
        ]
    }
}
