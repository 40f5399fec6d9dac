//! Delete command resource definitions and arguments

use clap::{Parser, Subcommand};

/// Resource types for the 'delete' command
#[derive(Subcommand, Debug)]
pub enum DeleteResource {
    /// Delete a gateway
    #[command(visible_alias = "gw")]
    Gateway(DeleteGatewayArgs),

    /// Delete a virtual connection
    #[command(visible_alias = "virtual-connection")]
    Vc(DeleteChildArgs),

    /// Delete an export route filter
    ExportFilter(DeleteChildArgs),

    /// Delete an import route filter
    ImportFilter(DeleteChildArgs),

    /// Delete a route report
    #[command(visible_alias = "rr")]
    RouteReport(DeleteChildArgs),
}

/// Arguments for 'delete gateway' subcommand
#[derive(Parser, Debug)]
pub struct DeleteGatewayArgs {
    /// Gateway ID or name
    pub id: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for deleting a resource that lives under a gateway
#[derive(Parser, Debug)]
pub struct DeleteChildArgs {
    /// Resource ID
    pub id: String,

    /// Gateway ID or name
    #[arg(short, long)]
    pub gateway: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
