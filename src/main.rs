//! dlctl - Direct Link CLI entry point

use clap::Parser;
use log::{debug, info};
use std::process::ExitCode;

use directlink::directlink::{
    as_prepends, gateways, offerings, ports, route_filters, route_reports, virtual_connections,
};
use directlink::{
    Cli, Command, CommandResult, CreateResource, DeleteResource, DirectLinkV1, DownloadResource,
    GetResource, RouteFilterKind,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting dlctl v{}", env!("CARGO_PKG_VERSION"));
    debug!("CLI args: {:?}", cli.command);

    let client = match cli.build_client() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    debug!(
        "Using {} (version {})",
        client.service_url(),
        client.version()
    );

    match run(&client, &cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &DirectLinkV1, cli: &Cli) -> CommandResult {
    match &cli.command {
        Command::Get { resource } => match resource {
            GetResource::Gateway(args) => gateways::run_gateway_command(client, cli, args).await,
            GetResource::Port(args) => ports::run_port_command(client, cli, args).await,
            GetResource::Vc(args) => virtual_connections::run_vc_command(client, cli, args).await,
            GetResource::ExportFilter(args) => {
                route_filters::run_route_filter_command(client, cli, args, RouteFilterKind::Export)
                    .await
            }
            GetResource::ImportFilter(args) => {
                route_filters::run_route_filter_command(client, cli, args, RouteFilterKind::Import)
                    .await
            }
            GetResource::RouteReport(args) => {
                route_reports::run_route_report_command(client, cli, args).await
            }
            GetResource::AsPrepend(args) => {
                as_prepends::run_as_prepend_command(client, cli, args).await
            }
            GetResource::Location(args) => offerings::run_location_command(client, cli, args).await,
            GetResource::Speed(args) => offerings::run_speed_command(client, cli, args).await,
            GetResource::Router(args) => offerings::run_router_command(client, cli, args).await,
            GetResource::Status(args) => gateways::run_status_command(client, cli, args).await,
            GetResource::Stats(args) => gateways::run_stats_command(client, cli, args).await,
        },
        Command::Create { resource } => match resource {
            CreateResource::Gateway(args) => {
                gateways::run_create_gateway_command(client, cli, args).await
            }
            CreateResource::Vc(args) => {
                virtual_connections::run_create_vc_command(client, cli, args).await
            }
            CreateResource::RouteReport(args) => {
                route_reports::run_create_route_report_command(client, cli, args).await
            }
        },
        Command::Delete { resource } => match resource {
            DeleteResource::Gateway(args) => {
                gateways::run_delete_gateway_command(client, cli, args).await
            }
            DeleteResource::Vc(args) => {
                virtual_connections::run_delete_vc_command(client, cli, args).await
            }
            DeleteResource::ExportFilter(args) => {
                route_filters::run_delete_route_filter_command(
                    client,
                    cli,
                    args,
                    RouteFilterKind::Export,
                )
                .await
            }
            DeleteResource::ImportFilter(args) => {
                route_filters::run_delete_route_filter_command(
                    client,
                    cli,
                    args,
                    RouteFilterKind::Import,
                )
                .await
            }
            DeleteResource::RouteReport(args) => {
                route_reports::run_delete_route_report_command(client, cli, args).await
            }
        },
        Command::Download { resource } => match resource {
            DownloadResource::Loa(args) => {
                gateways::run_download_command(
                    client,
                    cli,
                    args,
                    gateways::GatewayDocument::LetterOfAuthorization,
                )
                .await
            }
            DownloadResource::CompletionNotice(args) => {
                gateways::run_download_command(
                    client,
                    cli,
                    args,
                    gateways::GatewayDocument::CompletionNotice,
                )
                .await
            }
        },
    }
}
