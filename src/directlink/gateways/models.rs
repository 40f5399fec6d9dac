//! Gateway data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::directlink::as_prepends::AsPrependTemplate;
use crate::directlink::route_filters::RouteFilterTemplate;
use crate::directlink::traits::DirectLinkResource;
use crate::sdk::AsPatch;

/// Gateway `type` values
pub mod gateway_type {
    pub const DEDICATED: &str = "dedicated";
    pub const CONNECT: &str = "connect";
}

/// Gateway `connection_mode` values
pub mod connection_mode {
    pub const DIRECT: &str = "direct";
    pub const TRANSIT: &str = "transit";
}

/// `action` values accepted by the gateway actions endpoint
pub mod gateway_action {
    pub const CREATE_GATEWAY_APPROVE: &str = "create_gateway_approve";
    pub const CREATE_GATEWAY_REJECT: &str = "create_gateway_reject";
    pub const DELETE_GATEWAY_APPROVE: &str = "delete_gateway_approve";
    pub const DELETE_GATEWAY_REJECT: &str = "delete_gateway_reject";
    pub const UPDATE_ATTRIBUTES_APPROVE: &str = "update_attributes_approve";
    pub const UPDATE_ATTRIBUTES_REJECT: &str = "update_attributes_reject";
}

/// `type` values for the statistics endpoint
pub mod statistic_type {
    pub const MACSEC_MKA: &str = "macsec_mka";
    pub const MACSEC_SECURITY: &str = "macsec_security";
    pub const BFD: &str = "bfd";
}

/// `type` values for the status endpoint
pub mod status_type {
    pub const BGP: &str = "bgp";
    pub const LINK: &str = "link";
    pub const OPERATIONAL: &str = "operational";
}

/// Resource group reference
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct ResourceGroupReference {
    pub id: String,
}

/// Key Protect / HPCS key reference used for BGP MD5 or MACsec keys
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct KeyReference {
    pub crn: String,
}

/// Port a connect gateway is attached to
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct GatewayPortReference {
    pub id: String,
}

/// BFD configuration reported by the gateway
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GatewayBfdConfig {
    pub bfd_status: Option<String>,
    pub bfd_status_updated_at: Option<DateTime<Utc>>,
    pub interval: Option<u32>,
    pub multiplier: Option<u32>,
}

/// BFD configuration for create/action requests
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct GatewayBfdConfigTemplate {
    pub interval: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<u32>,
}

/// BFD configuration change
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct GatewayBfdPatchTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<u32>,
}

/// MACsec configuration reported by a dedicated gateway
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GatewayMacsecConfig {
    pub active: Option<bool>,
    pub cipher_suite: Option<String>,
    pub confidentiality_offset: Option<u32>,
    pub cryptographic_algorithm: Option<String>,
    pub fallback_cak: Option<KeyReference>,
    pub key_server_priority: Option<u32>,
    pub primary_cak: Option<KeyReference>,
    pub sak_expiry_time: Option<u64>,
    pub security_policy: Option<String>,
    pub status: Option<String>,
    pub window_size: Option<u64>,
}

/// MACsec configuration for a new dedicated gateway
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct GatewayMacsecConfigTemplate {
    pub active: bool,
    pub primary_cak: KeyReference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_cak: Option<KeyReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_size: Option<u64>,
}

/// MACsec configuration change
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct GatewayMacsecConfigPatchTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_cak: Option<KeyReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_cak: Option<KeyReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_size: Option<u64>,
}

/// Pending change awaiting provider approval, selected by `type`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GatewayChangeRequest {
    CreateGateway,
    UpdateAttributes {
        #[serde(default)]
        updates: Vec<serde_json::Value>,
    },
    DeleteGateway,
    #[serde(other)]
    Unknown,
}

/// Direct Link gateway
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Gateway {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub gateway_type: String,
    pub authentication_key: Option<KeyReference>,
    pub bfd_config: Option<GatewayBfdConfig>,
    pub bgp_asn: Option<u64>,
    pub bgp_cer_cidr: Option<String>,
    pub bgp_ibm_asn: Option<u64>,
    pub bgp_ibm_cidr: Option<String>,
    pub bgp_status: Option<String>,
    pub bgp_status_updated_at: Option<DateTime<Utc>>,
    pub carrier_name: Option<String>,
    pub change_request: Option<GatewayChangeRequest>,
    pub completion_notice_reject_reason: Option<String>,
    pub connection_mode: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub crn: Option<String>,
    pub cross_connect_router: Option<String>,
    pub customer_name: Option<String>,
    pub default_export_route_filter: Option<String>,
    pub default_import_route_filter: Option<String>,
    pub global: Option<bool>,
    pub link_status: Option<String>,
    pub link_status_updated_at: Option<DateTime<Utc>>,
    pub location_display_name: Option<String>,
    pub location_name: Option<String>,
    pub macsec_config: Option<GatewayMacsecConfig>,
    pub metered: Option<bool>,
    pub operational_status: Option<String>,
    pub patch_panel_completion_notice: Option<String>,
    pub port: Option<GatewayPortReference>,
    pub provider_api_managed: Option<bool>,
    pub resource_group: Option<ResourceGroupReference>,
    pub speed_mbps: Option<u64>,
    pub vlan: Option<u32>,
}

impl Gateway {
    pub fn is_dedicated(&self) -> bool {
        self.gateway_type == gateway_type::DEDICATED
    }

    /// Operational status, defaulting to "unknown"
    pub fn operational_status(&self) -> &str {
        self.operational_status.as_deref().unwrap_or("unknown")
    }

    pub fn location(&self) -> &str {
        self.location_name.as_deref().unwrap_or("")
    }

    pub fn speed_mbps(&self) -> u64 {
        self.speed_mbps.unwrap_or(0)
    }

    /// True while a change request waits for approval
    pub fn has_pending_change(&self) -> bool {
        self.change_request.is_some()
    }
}

impl DirectLinkResource for Gateway {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Response of `GET /gateways`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GatewayCollection {
    pub gateways: Vec<Gateway>,
}

/// Fields shared by every gateway template
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct GatewayTemplateCommon {
    pub bgp_asn: u64,
    pub global: bool,
    pub metered: bool,
    pub name: String,
    pub speed_mbps: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_prepends: Option<Vec<AsPrependTemplate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_key: Option<KeyReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bfd_config: Option<GatewayBfdConfigTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_cer_cidr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp_ibm_cidr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_export_route_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_import_route_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_route_filters: Option<Vec<RouteFilterTemplate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_route_filters: Option<Vec<RouteFilterTemplate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_panel_completion_notice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupReference>,
}

impl GatewayTemplateCommon {
    pub fn new(name: impl Into<String>, bgp_asn: u64, speed_mbps: u64, global: bool, metered: bool) -> Self {
        Self {
            bgp_asn,
            global,
            metered,
            name: name.into(),
            speed_mbps,
            ..Default::default()
        }
    }
}

/// Template for a dedicated gateway (customer-ordered cross connect)
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct GatewayTemplateDedicated {
    #[serde(flatten)]
    pub common: GatewayTemplateCommon,
    pub carrier_name: String,
    pub cross_connect_router: String,
    pub customer_name: String,
    pub location_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macsec_config: Option<GatewayMacsecConfigTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan: Option<u32>,
}

/// Template for a connect gateway (provider port)
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct GatewayTemplateConnect {
    #[serde(flatten)]
    pub common: GatewayTemplateCommon,
    pub port: GatewayPortReference,
}

/// Body of `POST /gateways`, discriminated by `type`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GatewayTemplate {
    Dedicated(GatewayTemplateDedicated),
    Connect(GatewayTemplateConnect),
}

impl GatewayTemplate {
    pub fn dedicated(
        common: GatewayTemplateCommon,
        carrier_name: impl Into<String>,
        cross_connect_router: impl Into<String>,
        customer_name: impl Into<String>,
        location_name: impl Into<String>,
    ) -> Self {
        GatewayTemplate::Dedicated(GatewayTemplateDedicated {
            common,
            carrier_name: carrier_name.into(),
            cross_connect_router: cross_connect_router.into(),
            customer_name: customer_name.into(),
            location_name: location_name.into(),
            macsec_config: None,
            vlan: None,
        })
    }

    pub fn connect(common: GatewayTemplateCommon, port_id: impl Into<String>) -> Self {
        GatewayTemplate::Connect(GatewayTemplateConnect {
            common,
            port: GatewayPortReference { id: port_id.into() },
        })
    }

    pub fn common(&self) -> &GatewayTemplateCommon {
        match self {
            GatewayTemplate::Dedicated(t) => &t.common,
            GatewayTemplate::Connect(t) => &t.common,
        }
    }

    /// Name of the `type` discriminator value
    pub fn gateway_type(&self) -> &'static str {
        match self {
            GatewayTemplate::Dedicated(_) => gateway_type::DEDICATED,
            GatewayTemplate::Connect(_) => gateway_type::CONNECT,
        }
    }

    /// Names of required string fields left empty
    pub(crate) fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.common().name.trim().is_empty() {
            missing.push("name");
        }
        match self {
            GatewayTemplate::Dedicated(t) => {
                for (field, value) in [
                    ("carrier_name", &t.carrier_name),
                    ("cross_connect_router", &t.cross_connect_router),
                    ("customer_name", &t.customer_name),
                    ("location_name", &t.location_name),
                ] {
                    if value.trim().is_empty() {
                        missing.push(field);
                    }
                }
            }
            GatewayTemplate::Connect(t) => {
                if t.port.id.trim().is_empty() {
                    missing.push("port.id");
                }
            }
        }
        missing
    }
}

/// Sparse gateway update sent as a merge patch
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct GatewayPatchTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_key: Option<KeyReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bfd_config: Option<GatewayBfdPatchTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_export_route_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_import_route_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loa_reject_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macsec_config: Option<GatewayMacsecConfigPatchTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metered: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operational_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_panel_completion_notice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_mbps: Option<u64>,
}

impl AsPatch for GatewayPatchTemplate {}

/// One attribute update approved or rejected through an action
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct GatewayActionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_mbps: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bfd_config: Option<GatewayBfdPatchTemplate>,
}

/// Body of `POST /gateways/{id}/actions`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct GatewayActionTemplate {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_key: Option<KeyReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bfd_config: Option<GatewayBfdConfigTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_export_route_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_import_route_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_route_filters: Option<Vec<RouteFilterTemplate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_route_filters: Option<Vec<RouteFilterTemplate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metered: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceGroupReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updates: Option<Vec<GatewayActionUpdate>>,
}

impl GatewayActionTemplate {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Default::default()
        }
    }
}

/// One statistics sample
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GatewayStatistic {
    #[serde(rename = "type")]
    pub statistic_type: String,
    pub created_at: Option<DateTime<Utc>>,
    /// Raw multi-line statistics text
    pub data: Option<String>,
}

/// Response of `GET /gateways/{id}/statistics`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GatewayStatisticCollection {
    pub statistics: Vec<GatewayStatistic>,
}

/// One status entry (bgp, link or operational)
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GatewayStatus {
    #[serde(rename = "type")]
    pub status_type: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub value: String,
}

/// Response of `GET /gateways/{id}/status`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GatewayStatusCollection {
    pub status: Vec<GatewayStatus>,
}
