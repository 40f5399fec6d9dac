//! Virtual connection command handlers

use futures::future::join_all;
use log::debug;

use crate::cli::{CreateVcArgs, DeleteChildArgs, VcArgs};
use crate::directlink::commands::{run_confirmed_delete, CommandResult};
use crate::directlink::gateways::commands::resolve_gateway_id;
use crate::directlink::gateways::ListGatewaysOptions;
use crate::directlink::{find_resource, DirectLinkV1};
use crate::output::{output_record, output_records, GatewayConnectionRow};
use crate::ui::{create_spinner, finish_spinner};
use crate::Cli;

use super::models::GatewayVirtualConnection;
use super::options::*;

async fn list_connections(
    client: &DirectLinkV1,
    gateway_id: &str,
) -> CommandResult<Vec<GatewayVirtualConnection>> {
    let collection = client
        .list_gateway_virtual_connections(&ListGatewayVirtualConnectionsOptions::new(gateway_id))
        .await?;
    debug!(
        "Gateway {} has {} virtual connections",
        gateway_id,
        collection.virtual_connections.len()
    );
    Ok(collection.virtual_connections)
}

/// Run the virtual connection list/get command
pub async fn run_vc_command(client: &DirectLinkV1, cli: &Cli, args: &VcArgs) -> CommandResult {
    let Some(gateway) = &args.gateway else {
        return run_vc_all_gateways(client, cli, args).await;
    };

    let spinner = create_spinner(
        &format!("Fetching virtual connections of gateway '{}'...", gateway),
        cli.batch,
    );
    let result = async {
        let gateway_id = resolve_gateway_id(client, gateway).await?;
        list_connections(client, &gateway_id).await
    }
    .await;
    finish_spinner(spinner);
    let connections = result?;

    if let Some(id) = &args.id {
        let vc = find_resource(&connections, id).ok_or_else(|| {
            format!(
                "Virtual connection '{}' not found on gateway '{}'",
                id, gateway
            )
        })?;
        output_record(vc, args.output, cli.no_header);
        return Ok(());
    }

    if connections.is_empty() {
        eprintln!("No virtual connections found on gateway '{}'", gateway);
        return Ok(());
    }

    output_records(&connections, args.output, cli.no_header);
    Ok(())
}

/// List virtual connections of every gateway, fetched in parallel
async fn run_vc_all_gateways(client: &DirectLinkV1, cli: &Cli, args: &VcArgs) -> CommandResult {
    let spinner = create_spinner("Fetching gateways...", cli.batch);
    let gateways = match client.list_gateways(&ListGatewaysOptions::new()).await {
        Ok(collection) => collection.gateways,
        Err(e) => {
            finish_spinner(spinner);
            return Err(e.into());
        }
    };
    if let Some(spinner) = &spinner {
        spinner.set_message(format!(
            "Fetching virtual connections from {} gateway(s)...",
            gateways.len()
        ));
    }

    let futures = gateways.iter().map(|gateway| async move {
        let result = list_connections(client, &gateway.id).await;
        (gateway, result)
    });
    let results = join_all(futures).await;
    finish_spinner(spinner);

    let mut rows = Vec::new();
    let mut had_errors = false;
    for (gateway, result) in results {
        match result {
            Ok(connections) => rows.extend(connections.into_iter().map(|connection| {
                GatewayConnectionRow {
                    gateway: gateway.name.clone(),
                    connection,
                }
            })),
            Err(e) => {
                eprintln!(
                    "Error fetching virtual connections for gateway '{}': {}",
                    gateway.name, e
                );
                had_errors = true;
            }
        }
    }

    if rows.is_empty() {
        if !had_errors {
            eprintln!("No virtual connections found");
        }
    } else {
        rows.sort_by(|a, b| {
            (a.gateway.as_str(), a.connection.name.as_str())
                .cmp(&(b.gateway.as_str(), b.connection.name.as_str()))
        });
        output_records(&rows, args.output, cli.no_header);
    }

    if had_errors {
        return Err("Some gateways could not be queried".into());
    }
    Ok(())
}

/// Run the virtual connection create command
pub async fn run_create_vc_command(
    client: &DirectLinkV1,
    cli: &Cli,
    args: &CreateVcArgs,
) -> CommandResult {
    let spinner = create_spinner(
        &format!("Creating virtual connection '{}'...", args.name),
        cli.batch,
    );
    let result = async {
        let gateway_id = resolve_gateway_id(client, &args.gateway).await?;
        let mut options = CreateGatewayVirtualConnectionOptions::new(
            gateway_id,
            args.name.clone(),
            args.connection_type.clone(),
        );
        if let Some(network_id) = &args.network_id {
            options = options.with_network_id(network_id.clone());
        }
        Ok::<_, Box<dyn std::error::Error>>(
            client.create_gateway_virtual_connection(&options).await?,
        )
    }
    .await;
    finish_spinner(spinner);

    output_record(&result?, args.output, cli.no_header);
    Ok(())
}

/// Run the virtual connection delete command
pub async fn run_delete_vc_command(
    client: &DirectLinkV1,
    cli: &Cli,
    args: &DeleteChildArgs,
) -> CommandResult {
    let gateway_id = resolve_gateway_id(client, &args.gateway).await?;
    let connections = list_connections(client, &gateway_id).await?;
    let vc = find_resource(&connections, &args.id).ok_or_else(|| {
        format!(
            "Virtual connection '{}' not found on gateway '{}'",
            args.id, args.gateway
        )
    })?;

    let what = format!("virtual connection '{}' ({})", vc.name, vc.id);
    let options = DeleteGatewayVirtualConnectionOptions::new(&gateway_id, &vc.id);
    run_confirmed_delete(
        &what,
        args.yes,
        cli.batch,
        client.delete_gateway_virtual_connection(&options),
    )
    .await
}
