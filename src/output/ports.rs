//! Port output rows

use super::common::opt;
use super::Record;
use crate::directlink::ports::Port;

impl Record for Port {
    fn headers() -> &'static [&'static str] {
        &["ID", "LABEL", "LOCATION", "PROVIDER", "GATEWAYS", "SPEEDS (MBPS)"]
    }

    fn row(&self) -> Vec<String> {
        let speeds: Vec<String> = self
            .supported_link_speeds
            .iter()
            .map(|s| s.to_string())
            .collect();
        vec![
            self.id.clone(),
            opt(self.label.as_deref()),
            opt(self.location_name.as_deref()),
            opt(self.provider_name.as_deref()),
            opt(self.direct_link_count),
            speeds.join(","),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_row_joins_speeds() {
        let port: Port = serde_json::from_value(serde_json::json!({
            "id": "port-1",
            "label": "XCR-FRK-CS-SEC-01",
            "location_name": "fra02",
            "provider_name": "provider_1",
            "direct_link_count": 2,
            "supported_link_speeds": [1000, 2000]
        }))
        .unwrap();
        assert_eq!(
            port.row(),
            vec!["port-1", "XCR-FRK-CS-SEC-01", "fra02", "provider_1", "2", "1000,2000"]
        );
    }
}
