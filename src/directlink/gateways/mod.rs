//! Gateways: dedicated and connect links, their actions, documents and status

mod api;
pub mod commands;
pub mod models;
pub mod options;

pub use models::{
    connection_mode, gateway_action, gateway_type, statistic_type, status_type, Gateway,
    GatewayActionTemplate, GatewayActionUpdate, GatewayBfdConfig, GatewayBfdConfigTemplate,
    GatewayBfdPatchTemplate, GatewayChangeRequest, GatewayCollection, GatewayMacsecConfig,
    GatewayMacsecConfigPatchTemplate, GatewayMacsecConfigTemplate, GatewayPatchTemplate,
    GatewayPortReference, GatewayStatistic, GatewayStatisticCollection, GatewayStatus,
    GatewayStatusCollection, GatewayTemplate, GatewayTemplateCommon, GatewayTemplateConnect,
    GatewayTemplateDedicated, KeyReference, ResourceGroupReference,
};
pub use options::*;
pub use commands::{
    resolve_gateway, resolve_gateway_id, run_create_gateway_command, run_delete_gateway_command,
    run_download_command, run_gateway_command, run_stats_command, run_status_command,
    GatewayDocument,
};
