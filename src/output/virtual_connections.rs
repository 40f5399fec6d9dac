//! Virtual connection output rows

use serde::Serialize;

use super::common::{format_time, opt};
use super::Record;
use crate::directlink::virtual_connections::GatewayVirtualConnection;

/// A virtual connection tagged with the gateway it belongs to
#[derive(Serialize, Debug, Clone)]
pub struct GatewayConnectionRow {
    pub gateway: String,
    #[serde(flatten)]
    pub connection: GatewayVirtualConnection,
}

impl Record for GatewayVirtualConnection {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "TYPE", "STATUS", "NETWORK", "CREATED AT"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.connection_type.clone(),
            self.status().to_string(),
            opt(self.network_id.as_deref()),
            format_time(self.created_at.as_ref()),
        ]
    }
}

impl Record for GatewayConnectionRow {
    fn headers() -> &'static [&'static str] {
        &["GATEWAY", "ID", "NAME", "TYPE", "STATUS", "NETWORK", "CREATED AT"]
    }

    fn row(&self) -> Vec<String> {
        let mut row = vec![self.gateway.clone()];
        row.extend(self.connection.row());
        row
    }
}
