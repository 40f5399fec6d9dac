//! Port data models

use serde::{Deserialize, Serialize};

use crate::directlink::traits::DirectLinkResource;
use crate::error::Result;
use crate::sdk::{next_start, PageFirst, PageNext};

/// Provider port available to connect gateways
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Port {
    pub id: String,
    pub direct_link_count: Option<u32>,
    pub label: Option<String>,
    pub location_display_name: Option<String>,
    pub location_name: Option<String>,
    pub provider_name: Option<String>,
    #[serde(default)]
    pub supported_link_speeds: Vec<u64>,
}

impl DirectLinkResource for Port {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }
}

/// One page of `GET /ports`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PortCollection {
    pub first: Option<PageFirst>,
    pub limit: Option<u32>,
    pub next: Option<PageNext>,
    pub total_count: Option<u32>,
    #[serde(default)]
    pub ports: Vec<Port>,
}

impl PortCollection {
    /// Cursor for the following page, `None` on the last page
    pub fn next_start(&self) -> Result<Option<String>> {
        next_start(self.next.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_start_from_href() {
        let page: PortCollection = serde_json::from_value(serde_json::json!({
            "first": {"href": "https://directlink.cloud.ibm.com/v1/ports?limit=100"},
            "limit": 100,
            "next": {"href": "https://directlink.cloud.ibm.com/v1/ports?start=9d5a91a3e2cbd233b5a5b33436855ed1&limit=100"},
            "total_count": 132,
            "ports": []
        }))
        .unwrap();

        assert_eq!(
            page.next_start().unwrap().as_deref(),
            Some("9d5a91a3e2cbd233b5a5b33436855ed1")
        );
    }

    #[test]
    fn test_next_start_last_page() {
        let page: PortCollection = serde_json::from_value(serde_json::json!({
            "ports": [{"id": "p1", "label": "XCR-FRK-CS-SEC-01", "supported_link_speeds": [1000, 2000]}]
        }))
        .unwrap();

        assert_eq!(page.next_start().unwrap(), None);
        assert_eq!(page.ports[0].name(), "XCR-FRK-CS-SEC-01");
        assert_eq!(page.ports[0].supported_link_speeds, vec![1000, 2000]);
    }
}
