//! Virtual connection data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::directlink::traits::DirectLinkResource;
use crate::sdk::AsPatch;

/// Virtual connection `type` values
pub mod virtual_connection_type {
    pub const CLASSIC: &str = "classic";
    pub const VPC: &str = "vpc";
    pub const TRANSIT: &str = "transit";
}

/// Virtual connection `status` values
pub mod virtual_connection_status {
    pub const ATTACHED: &str = "attached";
    pub const CREATING: &str = "creating";
    pub const DELETING: &str = "deleting";
    pub const DETACHED_BY_NETWORK: &str = "detached_by_network";
    pub const DETACHED_BY_NETWORK_PENDING: &str = "detached_by_network_pending";
    pub const EXPIRED: &str = "expired";
    pub const PENDING: &str = "pending";
    pub const REJECTED: &str = "rejected";
    pub const REJECTED_PENDING: &str = "rejected_pending";
}

/// Connection from a gateway to a classic, VPC or transit network
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GatewayVirtualConnection {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub connection_type: String,
    pub created_at: Option<DateTime<Utc>>,
    /// Account owning the network, when different from the gateway's
    pub network_account: Option<String>,
    pub network_id: Option<String>,
    pub status: Option<String>,
}

impl GatewayVirtualConnection {
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("unknown")
    }
}

impl DirectLinkResource for GatewayVirtualConnection {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GatewayVirtualConnectionCollection {
    pub virtual_connections: Vec<GatewayVirtualConnection>,
}

/// Body of `POST /gateways/{gateway_id}/virtual_connections`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GatewayVirtualConnectionTemplate {
    pub name: String,
    #[serde(rename = "type")]
    pub connection_type: String,
    /// CRN of the VPC or transit gateway; omitted for classic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,
}

/// Sparse virtual connection update
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct GatewayVirtualConnectionPatchTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Only `attached` or `rejected`, by the network owner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl AsPatch for GatewayVirtualConnectionPatchTemplate {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_omits_network_id_for_classic() {
        let template = GatewayVirtualConnectionTemplate {
            name: "classic-vc".to_string(),
            connection_type: virtual_connection_type::CLASSIC.to_string(),
            network_id: None,
        };
        assert_eq!(
            serde_json::to_value(&template).unwrap(),
            serde_json::json!({"name": "classic-vc", "type": "classic"})
        );
    }

    #[test]
    fn test_patch_status_only() {
        let patch = GatewayVirtualConnectionPatchTemplate {
            status: Some(virtual_connection_status::ATTACHED.to_string()),
            ..Default::default()
        };
        let map = patch.as_patch().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["status"], "attached");
    }
}
