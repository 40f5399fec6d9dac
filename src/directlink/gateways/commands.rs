//! Gateway command handlers

use log::debug;
use std::path::PathBuf;

use crate::cli::{
    CreateGatewayArgs, DeleteGatewayArgs, DownloadArgs, GatewayArgs, StatsArgs, StatusArgs,
};
use crate::directlink::commands::{run_confirmed_delete, CommandResult};
use crate::directlink::{find_resource, DirectLinkResource, DirectLinkV1};
use crate::error::DirectLinkError;
use crate::output::{output_record, output_records};
use crate::ui::{create_spinner, finish_spinner};
use crate::Cli;

use super::models::{Gateway, GatewayTemplate};
use super::options::*;

/// Which gateway document to download
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayDocument {
    LetterOfAuthorization,
    CompletionNotice,
}

impl GatewayDocument {
    fn label(&self) -> &'static str {
        match self {
            GatewayDocument::LetterOfAuthorization => "letter of authorization",
            GatewayDocument::CompletionNotice => "completion notice",
        }
    }

    fn default_file(&self, gateway_id: &str) -> PathBuf {
        match self {
            GatewayDocument::LetterOfAuthorization => {
                PathBuf::from(format!("loa-{}.pdf", gateway_id))
            }
            GatewayDocument::CompletionNotice => {
                PathBuf::from(format!("completion-notice-{}.pdf", gateway_id))
            }
        }
    }
}

/// Look a gateway up by ID, falling back to a name match over the list
pub async fn resolve_gateway(client: &DirectLinkV1, input: &str) -> CommandResult<Gateway> {
    match client.get_gateway(&GetGatewayOptions::new(input)).await {
        Ok(gateway) => return Ok(gateway),
        Err(e) if e.status() == Some(404) => {
            debug!("No gateway with ID '{}', searching by name", input);
        }
        Err(e) => return Err(e.into()),
    }

    let gateways = client
        .list_gateways(&ListGatewaysOptions::new())
        .await?
        .gateways;
    find_resource(&gateways, input)
        .cloned()
        .ok_or_else(|| format!("Gateway '{}' not found", input).into())
}

/// Resolve a gateway name or ID to its ID
pub async fn resolve_gateway_id(client: &DirectLinkV1, input: &str) -> CommandResult<String> {
    Ok(resolve_gateway(client, input).await?.id)
}

/// Run the gateway list/get command
pub async fn run_gateway_command(
    client: &DirectLinkV1,
    cli: &Cli,
    args: &GatewayArgs,
) -> CommandResult {
    if let Some(id) = &args.id {
        let spinner = create_spinner(&format!("Fetching gateway '{}'...", id), cli.batch);
        let result = resolve_gateway(client, id).await;
        finish_spinner(spinner);
        output_record(&result?, args.output, cli.no_header);
        return Ok(());
    }

    let spinner = create_spinner("Fetching gateways...", cli.batch);
    let result = client.list_gateways(&ListGatewaysOptions::new()).await;
    finish_spinner(spinner);
    let mut gateways = result?.gateways;

    if let Some(filter) = &args.filter {
        let filter_lower = filter.to_lowercase();
        gateways.retain(|gw| {
            gw.name().to_lowercase().contains(&filter_lower) || gw.id().contains(filter.as_str())
        });
        debug!("Filtered to {} gateways matching '{}'", gateways.len(), filter);
    }

    if gateways.is_empty() {
        if args.filter.is_some() {
            eprintln!("No gateways found matching filter");
        } else {
            eprintln!("No gateways found");
        }
        return Ok(());
    }

    gateways.sort_by(|a, b| a.name.cmp(&b.name));
    output_records(&gateways, args.output, cli.no_header);
    Ok(())
}

/// Run the gateway status command
pub async fn run_status_command(
    client: &DirectLinkV1,
    cli: &Cli,
    args: &StatusArgs,
) -> CommandResult {
    let spinner = create_spinner(
        &format!("Fetching status of gateway '{}'...", args.gateway),
        cli.batch,
    );
    let result = async {
        let id = resolve_gateway_id(client, &args.gateway).await?;
        let mut options = GetGatewayStatusOptions::new(id);
        if let Some(status_type) = &args.status_type {
            options = options.with_status_type(status_type.clone());
        }
        Ok::<_, Box<dyn std::error::Error>>(client.get_gateway_status(&options).await?)
    }
    .await;
    finish_spinner(spinner);

    output_records(&result?.status, args.output, cli.no_header);
    Ok(())
}

/// Run the gateway statistics command
pub async fn run_stats_command(
    client: &DirectLinkV1,
    cli: &Cli,
    args: &StatsArgs,
) -> CommandResult {
    let spinner = create_spinner(
        &format!("Fetching {} statistics of gateway '{}'...", args.statistic_type, args.gateway),
        cli.batch,
    );
    let result = async {
        let id = resolve_gateway_id(client, &args.gateway).await?;
        let options = GetGatewayStatisticsOptions::new(id, args.statistic_type.clone());
        Ok::<_, Box<dyn std::error::Error>>(client.get_gateway_statistics(&options).await?)
    }
    .await;
    finish_spinner(spinner);

    output_records(&result?.statistics, args.output, cli.no_header);
    Ok(())
}

/// Run the gateway delete command
pub async fn run_delete_gateway_command(
    client: &DirectLinkV1,
    cli: &Cli,
    args: &DeleteGatewayArgs,
) -> CommandResult {
    let gateway = resolve_gateway(client, &args.id).await?;

    let what = format!("gateway '{}' ({})", gateway.name, gateway.id);
    let options = DeleteGatewayOptions::new(&gateway.id);
    run_confirmed_delete(&what, args.yes, cli.batch, client.delete_gateway(&options)).await
}

/// Run the gateway create command from a JSON template file
pub async fn run_create_gateway_command(
    client: &DirectLinkV1,
    cli: &Cli,
    args: &CreateGatewayArgs,
) -> CommandResult {
    let template = read_template(&args.file)?;
    debug!(
        "Creating {} gateway '{}' (check_only={})",
        template.gateway_type(),
        template.common().name,
        args.check_only
    );

    let mut options = CreateGatewayOptions::new(template);
    if args.check_only {
        options = options.with_check_only(true);
    }

    let spinner = create_spinner("Creating gateway...", cli.batch);
    let result = client.create_gateway(&options).await;
    finish_spinner(spinner);

    output_record(&result?, args.output, cli.no_header);
    Ok(())
}

/// Run the document download command
pub async fn run_download_command(
    client: &DirectLinkV1,
    cli: &Cli,
    args: &DownloadArgs,
    document: GatewayDocument,
) -> CommandResult {
    let spinner = create_spinner(
        &format!("Downloading {} for gateway '{}'...", document.label(), args.gateway),
        cli.batch,
    );
    let result = async {
        let id = resolve_gateway_id(client, &args.gateway).await?;
        let path = args
            .file
            .clone()
            .unwrap_or_else(|| document.default_file(&id));
        let written = match document {
            GatewayDocument::LetterOfAuthorization => {
                client
                    .download_gateway_letter_of_authorization_to(
                        &ListGatewayLetterOfAuthorizationOptions::new(&id),
                        &path,
                    )
                    .await?
            }
            GatewayDocument::CompletionNotice => {
                client
                    .download_gateway_completion_notice_to(
                        &ListGatewayCompletionNoticeOptions::new(&id),
                        &path,
                    )
                    .await?
            }
        };
        Ok::<_, Box<dyn std::error::Error>>((path, written))
    }
    .await;
    finish_spinner(spinner);

    let (path, written) = result?;
    println!("Saved {} ({} bytes) to {}", document.label(), written, path.display());
    Ok(())
}

fn read_template(path: &std::path::Path) -> CommandResult<GatewayTemplate> {
    let content = std::fs::read_to_string(path).map_err(|e| DirectLinkError::Io {
        message: format!("Failed to read '{}': {}", path.display(), e),
    })?;
    let template: GatewayTemplate = serde_json::from_str(&content)
        .map_err(|e| format!("Invalid gateway template '{}': {}", path.display(), e))?;
    Ok(template)
}
