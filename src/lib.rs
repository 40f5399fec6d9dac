//! Direct Link - IBM Cloud Direct Link API client and CLI
//!
//! A typed async client for the Direct Link v1 API plus `dlctl`, a CLI to
//! explore and manage gateways.
//!
//! # Features
//!
//! - Gateways, actions, completion notices, letters of authorization
//! - Virtual connections, route filters, route reports, AS prepends
//! - Offering locations, cross connect routers and speeds
//! - Paged port listing
//! - Bearer token or basic auth, from code or `DIRECTLINK_*` properties
//! - Optional retries with backoff on 429 and 5xx
//!
//! # Example
//!
//! ```bash
//! # List all gateways
//! dlctl get gw
//!
//! # Show one gateway by name or ID
//! dlctl get gw my-gateway -o json
//!
//! # Virtual connections of a gateway
//! dlctl get vc -g my-gateway
//!
//! # Locations for connect gateways
//! dlctl get location --offering connect
//! ```

pub mod cli;
pub mod config;
pub mod directlink;
pub mod error;
pub mod output;
pub mod sdk;
pub mod ui;

pub use cli::{
    Cli, Command, CreateResource, DeleteResource, DownloadResource, GetResource, OutputFormat,
};
pub use directlink::{
    find_resource, CommandResult, DirectLinkResource, DirectLinkV1, DirectLinkV1Options, Gateway,
    GatewayTemplate, Port, PortsPager, RouteFilterKind,
};
pub use error::{DirectLinkError, Result};
pub use output::{output_record, output_records, Record};
