//! Get command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Get gateways
    #[command(visible_alias = "gw", visible_alias = "gateways")]
    Gateway(GatewayArgs),

    /// Get provider ports (connect offering)
    #[command(visible_alias = "ports")]
    Port(PortArgs),

    /// Get virtual connections of a gateway
    #[command(
        visible_alias = "vcs",
        visible_alias = "virtual-connection",
        visible_alias = "virtual-connections"
    )]
    Vc(VcArgs),

    /// Get export route filters of a gateway
    #[command(visible_alias = "export-filters")]
    ExportFilter(RouteFilterArgs),

    /// Get import route filters of a gateway
    #[command(visible_alias = "import-filters")]
    ImportFilter(RouteFilterArgs),

    /// Get route reports of a gateway
    #[command(visible_alias = "rr", visible_alias = "route-reports")]
    RouteReport(RouteReportArgs),

    /// Get AS prepends of a gateway
    #[command(visible_alias = "as-prepends")]
    AsPrepend(AsPrependArgs),

    /// Get locations where an offering type is available
    #[command(visible_alias = "locations")]
    Location(OfferingArgs),

    /// Get link speeds of an offering type
    #[command(visible_alias = "speeds")]
    Speed(OfferingArgs),

    /// Get cross connect routers at a location
    #[command(visible_alias = "routers")]
    Router(RouterArgs),

    /// Get BGP, link and operational status of a gateway
    Status(StatusArgs),

    /// Get MACsec or BFD statistics of a gateway
    #[command(visible_alias = "statistics")]
    Stats(StatsArgs),
}

/// Arguments for 'get gateway' subcommand
#[derive(Parser, Debug)]
pub struct GatewayArgs {
    /// Gateway ID or name (if specified, shows details for that gateway)
    pub id: Option<String>,

    /// Filter gateways by name (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get port' subcommand
#[derive(Parser, Debug)]
pub struct PortArgs {
    /// Port ID (if specified, shows details for that port)
    pub id: Option<String>,

    /// Only ports at this location (e.g. fra02)
    #[arg(long)]
    pub location: Option<String>,

    /// Page size used while walking the listing (1-100)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub limit: Option<u32>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get vc' subcommand
#[derive(Parser, Debug)]
pub struct VcArgs {
    /// Virtual connection ID or name (requires --gateway)
    #[arg(requires = "gateway")]
    pub id: Option<String>,

    /// Gateway ID or name; all gateways when omitted
    #[arg(short, long)]
    pub gateway: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get export-filter' and 'get import-filter' subcommands
#[derive(Parser, Debug)]
pub struct RouteFilterArgs {
    /// Route filter ID
    pub id: Option<String>,

    /// Gateway ID or name
    #[arg(short, long)]
    pub gateway: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get route-report' subcommand
#[derive(Parser, Debug)]
pub struct RouteReportArgs {
    /// Route report ID
    pub id: Option<String>,

    /// Gateway ID or name
    #[arg(short, long)]
    pub gateway: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get as-prepend' subcommand
#[derive(Parser, Debug)]
pub struct AsPrependArgs {
    /// Gateway ID or name
    #[arg(short, long)]
    pub gateway: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get location' and 'get speed' subcommands
#[derive(Parser, Debug)]
pub struct OfferingArgs {
    /// Offering type
    #[arg(long, default_value = "dedicated", value_parser = ["dedicated", "connect"])]
    pub offering: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get router' subcommand
#[derive(Parser, Debug)]
pub struct RouterArgs {
    /// Location name (e.g. dal03)
    #[arg(long)]
    pub location: String,

    /// Offering type
    #[arg(long, default_value = "dedicated", value_parser = ["dedicated", "connect"])]
    pub offering: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get status' subcommand
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Gateway ID or name
    #[arg(short, long)]
    pub gateway: String,

    /// Only this kind of status
    #[arg(long = "type", value_parser = ["bgp", "link", "operational"])]
    pub status_type: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get stats' subcommand
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Gateway ID or name
    #[arg(short, long)]
    pub gateway: String,

    /// Kind of statistics
    #[arg(long = "type", value_parser = ["macsec_mka", "macsec_security", "bfd"])]
    pub statistic_type: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
