//! Download command resource definitions and arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resource types for the 'download' command
#[derive(Subcommand, Debug)]
pub enum DownloadResource {
    /// Download the letter of authorization (PDF) of a dedicated gateway
    ///
    /// OUTPUT:
    ///   By default, saves to: loa-{gateway_id}.pdf
    ///   Use --file to specify a custom path.
    ///
    /// EXAMPLES:
    ///   dlctl download loa --gateway my-gateway
    ///   dlctl download loa -g 0a06fb9b-820f-4c44-8a31-77f1f0806d28 --file ./loa.pdf
    #[command(verbatim_doc_comment, visible_alias = "letter-of-authorization")]
    Loa(DownloadArgs),

    /// Download the completion notice (PDF) of a dedicated gateway
    ///
    /// OUTPUT:
    ///   By default, saves to: completion-notice-{gateway_id}.pdf
    #[command(verbatim_doc_comment, visible_alias = "cn")]
    CompletionNotice(DownloadArgs),
}

/// Arguments for 'download' subcommands
#[derive(Parser, Debug)]
pub struct DownloadArgs {
    /// Gateway ID or name
    #[arg(short, long)]
    pub gateway: String,

    /// Output file path
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}
