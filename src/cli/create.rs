//! Create command resource definitions and arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::common::OutputFormat;

/// Resource types for the 'create' command
#[derive(Subcommand, Debug)]
pub enum CreateResource {
    /// Create a gateway from a JSON template file
    ///
    /// The file holds a gateway template with a "type" of "dedicated" or
    /// "connect", e.g.:
    ///
    ///   {"type": "connect", "name": "gw", "bgp_asn": 64999, "speed_mbps": 50,
    ///    "global": false, "metered": false, "port": {"id": "<port id>"}}
    #[command(verbatim_doc_comment, visible_alias = "gw")]
    Gateway(CreateGatewayArgs),

    /// Create a virtual connection on a gateway
    #[command(visible_alias = "virtual-connection")]
    Vc(CreateVcArgs),

    /// Request a new route report for a gateway
    #[command(visible_alias = "rr")]
    RouteReport(CreateRouteReportArgs),
}

/// Arguments for 'create gateway' subcommand
#[derive(Parser, Debug)]
pub struct CreateGatewayArgs {
    /// Path to the JSON gateway template
    #[arg(short, long)]
    pub file: PathBuf,

    /// Only validate the template server-side
    #[arg(long, default_value_t = false)]
    pub check_only: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'create vc' subcommand
#[derive(Parser, Debug)]
pub struct CreateVcArgs {
    /// Virtual connection name
    pub name: String,

    /// Gateway ID or name
    #[arg(short, long)]
    pub gateway: String,

    /// Network type
    #[arg(long = "type", value_parser = ["classic", "vpc", "transit"])]
    pub connection_type: String,

    /// CRN of the VPC or transit gateway (not used for classic)
    #[arg(long)]
    pub network_id: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'create route-report' subcommand
#[derive(Parser, Debug)]
pub struct CreateRouteReportArgs {
    /// Gateway ID or name
    #[arg(short, long)]
    pub gateway: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
