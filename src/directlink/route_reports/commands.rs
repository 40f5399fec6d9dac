//! Route report command handlers

use log::info;

use crate::cli::{CreateRouteReportArgs, DeleteChildArgs, RouteReportArgs};
use crate::directlink::commands::{run_confirmed_delete, CommandResult};
use crate::directlink::gateways::commands::resolve_gateway_id;
use crate::directlink::DirectLinkV1;
use crate::output::{output_record, output_records};
use crate::ui::{create_spinner, finish_spinner};
use crate::Cli;

use super::options::*;

/// Run the route report list/get command
pub async fn run_route_report_command(
    client: &DirectLinkV1,
    cli: &Cli,
    args: &RouteReportArgs,
) -> CommandResult {
    let spinner = create_spinner(
        &format!("Fetching route reports of gateway '{}'...", args.gateway),
        cli.batch,
    );
    let gateway_id = match resolve_gateway_id(client, &args.gateway).await {
        Ok(id) => id,
        Err(e) => {
            finish_spinner(spinner);
            return Err(e);
        }
    };

    if let Some(id) = &args.id {
        let result = client
            .get_gateway_route_report(&GetGatewayRouteReportOptions::new(&gateway_id, id))
            .await;
        finish_spinner(spinner);
        let report = result?;
        if !report.is_complete() {
            eprintln!("Route report '{}' is still {}", report.id, report.status);
        }
        output_record(&report, args.output, cli.no_header);
        return Ok(());
    }

    let result = client
        .list_gateway_route_reports(&ListGatewayRouteReportsOptions::new(&gateway_id))
        .await;
    finish_spinner(spinner);
    let reports = result?.route_reports;

    if reports.is_empty() {
        eprintln!("No route reports found on gateway '{}'", args.gateway);
        return Ok(());
    }

    output_records(&reports, args.output, cli.no_header);
    Ok(())
}

/// Run the route report create command
pub async fn run_create_route_report_command(
    client: &DirectLinkV1,
    cli: &Cli,
    args: &CreateRouteReportArgs,
) -> CommandResult {
    let spinner = create_spinner(
        &format!("Requesting route report for gateway '{}'...", args.gateway),
        cli.batch,
    );
    let result = async {
        let gateway_id = resolve_gateway_id(client, &args.gateway).await?;
        Ok::<_, Box<dyn std::error::Error>>(
            client
                .create_gateway_route_report(&CreateGatewayRouteReportOptions::new(gateway_id))
                .await?,
        )
    }
    .await;
    finish_spinner(spinner);

    let report = result?;
    info!("Route report {} created ({})", report.id, report.status);
    output_record(&report, args.output, cli.no_header);
    Ok(())
}

/// Run the route report delete command
pub async fn run_delete_route_report_command(
    client: &DirectLinkV1,
    cli: &Cli,
    args: &DeleteChildArgs,
) -> CommandResult {
    let gateway_id = resolve_gateway_id(client, &args.gateway).await?;
    let what = format!("route report '{}'", args.id);
    let options = DeleteGatewayRouteReportOptions::new(&gateway_id, &args.id);
    run_confirmed_delete(
        &what,
        args.yes,
        cli.batch,
        client.delete_gateway_route_report(&options),
    )
    .await
}
