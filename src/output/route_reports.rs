//! Route report output rows

use super::common::format_time;
use super::Record;
use crate::directlink::route_reports::RouteReport;

impl Record for RouteReport {
    fn headers() -> &'static [&'static str] {
        &[
            "ID",
            "STATUS",
            "GATEWAY ROUTES",
            "ON-PREM ROUTES",
            "OVERLAPS",
            "CREATED AT",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.status.clone(),
            self.gateway_routes.len().to_string(),
            self.on_prem_routes.len().to_string(),
            self.overlapping_routes.len().to_string(),
            format_time(self.created_at.as_ref()),
        ]
    }
}
