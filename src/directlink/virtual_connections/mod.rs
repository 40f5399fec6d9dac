//! Virtual connections between a gateway and IBM Cloud networks

mod api;
pub mod commands;
pub mod models;
pub mod options;

pub use models::{
    virtual_connection_status, virtual_connection_type, GatewayVirtualConnection,
    GatewayVirtualConnectionCollection, GatewayVirtualConnectionPatchTemplate,
    GatewayVirtualConnectionTemplate,
};
pub use options::*;
pub use commands::{run_create_vc_command, run_delete_vc_command, run_vc_command};
