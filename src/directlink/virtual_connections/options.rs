//! Per-call options for virtual connection operations

use std::collections::HashMap;

use super::models::{GatewayVirtualConnectionPatchTemplate, GatewayVirtualConnectionTemplate};

/// Options for `list_gateway_virtual_connections`
#[derive(Debug, Clone)]
pub struct ListGatewayVirtualConnectionsOptions {
    pub gateway_id: String,
    pub headers: HashMap<String, String>,
}

impl ListGatewayVirtualConnectionsOptions {
    pub fn new(gateway_id: impl Into<String>) -> Self {
        Self {
            gateway_id: gateway_id.into(),
            headers: HashMap::new(),
        }
    }
}

/// Options for `create_gateway_virtual_connection`
#[derive(Debug, Clone)]
pub struct CreateGatewayVirtualConnectionOptions {
    pub gateway_id: String,
    pub template: GatewayVirtualConnectionTemplate,
    pub headers: HashMap<String, String>,
}

impl CreateGatewayVirtualConnectionOptions {
    pub fn new(
        gateway_id: impl Into<String>,
        name: impl Into<String>,
        connection_type: impl Into<String>,
    ) -> Self {
        Self {
            gateway_id: gateway_id.into(),
            template: GatewayVirtualConnectionTemplate {
                name: name.into(),
                connection_type: connection_type.into(),
                network_id: None,
            },
            headers: HashMap::new(),
        }
    }

    pub fn with_network_id(mut self, network_id: impl Into<String>) -> Self {
        self.template.network_id = Some(network_id.into());
        self
    }
}

/// Options for `delete_gateway_virtual_connection`
#[derive(Debug, Clone)]
pub struct DeleteGatewayVirtualConnectionOptions {
    pub gateway_id: String,
    pub id: String,
    pub headers: HashMap<String, String>,
}

impl DeleteGatewayVirtualConnectionOptions {
    pub fn new(gateway_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            gateway_id: gateway_id.into(),
            id: id.into(),
            headers: HashMap::new(),
        }
    }
}

/// Options for `get_gateway_virtual_connection`
#[derive(Debug, Clone)]
pub struct GetGatewayVirtualConnectionOptions {
    pub gateway_id: String,
    pub id: String,
    pub headers: HashMap<String, String>,
}

impl GetGatewayVirtualConnectionOptions {
    pub fn new(gateway_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            gateway_id: gateway_id.into(),
            id: id.into(),
            headers: HashMap::new(),
        }
    }
}

/// Options for `update_gateway_virtual_connection`
#[derive(Debug, Clone)]
pub struct UpdateGatewayVirtualConnectionOptions {
    pub gateway_id: String,
    pub id: String,
    pub patch: GatewayVirtualConnectionPatchTemplate,
    pub headers: HashMap<String, String>,
}

impl UpdateGatewayVirtualConnectionOptions {
    pub fn new(
        gateway_id: impl Into<String>,
        id: impl Into<String>,
        patch: GatewayVirtualConnectionPatchTemplate,
    ) -> Self {
        Self {
            gateway_id: gateway_id.into(),
            id: id.into(),
            patch,
            headers: HashMap::new(),
        }
    }
}

impl_custom_headers!(
    ListGatewayVirtualConnectionsOptions,
    CreateGatewayVirtualConnectionOptions,
    DeleteGatewayVirtualConnectionOptions,
    GetGatewayVirtualConnectionOptions,
    UpdateGatewayVirtualConnectionOptions,
);
