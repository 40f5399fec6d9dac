//! CLI argument parsing

mod common;
mod create;
mod delete;
mod download;
mod get;

use clap::{Parser, Subcommand};
use std::sync::Arc;
use std::time::Duration;

use crate::config::defaults;
use crate::directlink::{DirectLinkV1, DirectLinkV1Options};
use crate::error::Result;
use crate::sdk::BearerTokenAuthenticator;

pub use common::OutputFormat;
pub use create::{CreateGatewayArgs, CreateResource, CreateRouteReportArgs, CreateVcArgs};
pub use delete::{DeleteChildArgs, DeleteGatewayArgs, DeleteResource};
pub use download::{DownloadArgs, DownloadResource};
pub use get::{
    AsPrependArgs, GatewayArgs, GetResource, OfferingArgs, PortArgs, RouteFilterArgs,
    RouteReportArgs, RouterArgs, StatsArgs, StatusArgs, VcArgs,
};

/// Direct Link CLI
#[derive(Parser, Debug)]
#[command(name = "dlctl")]
#[command(version)]
#[command(about = "Explore and manage IBM Cloud Direct Link gateways", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Direct Link API base URL
    #[arg(long, global = true, env = "DIRECTLINK_URL")]
    pub url: Option<String>,

    /// Bearer token (falls back to DIRECTLINK_* properties and ibm-credentials.env)
    #[arg(
        short = 't',
        long,
        global = true,
        env = "DIRECTLINK_BEARER_TOKEN",
        hide_env_values = true
    )]
    pub token: Option<String>,

    /// API version date sent with every request
    #[arg(long, global = true, default_value = defaults::API_VERSION)]
    pub api_version: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Retry throttled or failed requests up to N times (0 disables)
    #[arg(long, global = true, default_value_t = 0)]
    pub max_retries: u32,

    /// Batch mode: no spinner, no prompts
    #[arg(short = 'b', long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Omit the header row in table and CSV output
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get resources
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },

    /// Create resources
    Create {
        #[command(subcommand)]
        resource: CreateResource,
    },

    /// Delete resources
    Delete {
        #[command(subcommand)]
        resource: DeleteResource,
    },

    /// Download gateway documents
    Download {
        #[command(subcommand)]
        resource: DownloadResource,
    },
}

impl Cli {
    /// Build the API client from the flags
    ///
    /// With `--token` the client is configured from the flags alone;
    /// otherwise `DIRECTLINK_*` properties supply credentials.
    pub fn build_client(&self) -> Result<DirectLinkV1> {
        let mut options = DirectLinkV1Options::new(self.api_version.clone());
        if let Some(url) = &self.url {
            options = options.with_url(url.clone());
        }

        let mut client = match &self.token {
            Some(token) => DirectLinkV1::new(
                options.with_authenticator(Arc::new(BearerTokenAuthenticator::new(token.clone()))),
            )?,
            None => DirectLinkV1::new_using_external_config(options)?,
        };

        if self.max_retries > 0 {
            client.enable_retries(
                self.max_retries,
                Duration::from_secs(defaults::RETRY_INTERVAL_SECS),
            );
        }
        Ok(client)
    }
}
