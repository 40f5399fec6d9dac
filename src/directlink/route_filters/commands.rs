//! Route filter command handlers

use crate::cli::{DeleteChildArgs, RouteFilterArgs};
use crate::directlink::commands::{run_confirmed_delete, CommandResult};
use crate::directlink::gateways::commands::resolve_gateway_id;
use crate::directlink::DirectLinkV1;
use crate::output::{output_record, output_records};
use crate::ui::{create_spinner, finish_spinner};
use crate::Cli;

use super::models::{RouteFilter, RouteFilterCollection, RouteFilterKind};
use super::options::*;

enum Fetched {
    One(RouteFilter),
    All(RouteFilterCollection),
}

/// Run the export/import filter list/get command
pub async fn run_route_filter_command(
    client: &DirectLinkV1,
    cli: &Cli,
    args: &RouteFilterArgs,
    kind: RouteFilterKind,
) -> CommandResult {
    let spinner = create_spinner(
        &format!("Fetching {} route filters of gateway '{}'...", kind.label(), args.gateway),
        cli.batch,
    );
    let result = async {
        let gateway_id = resolve_gateway_id(client, &args.gateway).await?;
        let fetched = match &args.id {
            Some(id) => Fetched::One(
                client
                    .get_gateway_route_filter(kind, &GetGatewayRouteFilterOptions::new(gateway_id, id))
                    .await?,
            ),
            None => Fetched::All(
                client
                    .list_gateway_route_filters(
                        kind,
                        &ListGatewayRouteFiltersOptions::new(gateway_id),
                    )
                    .await?,
            ),
        };
        Ok::<_, Box<dyn std::error::Error>>(fetched)
    }
    .await;
    finish_spinner(spinner);

    match result? {
        Fetched::One(filter) => output_record(&filter, args.output, cli.no_header),
        Fetched::All(collection) if collection.route_filters.is_empty() => {
            eprintln!(
                "No {} route filters on gateway '{}'",
                kind.label(),
                args.gateway
            );
        }
        // Order is evaluation order; keep it as returned
        Fetched::All(collection) => {
            output_records(&collection.route_filters, args.output, cli.no_header)
        }
    }
    Ok(())
}

/// Run the export/import filter delete command
pub async fn run_delete_route_filter_command(
    client: &DirectLinkV1,
    cli: &Cli,
    args: &DeleteChildArgs,
    kind: RouteFilterKind,
) -> CommandResult {
    let gateway_id = resolve_gateway_id(client, &args.gateway).await?;
    let what = format!("{} route filter '{}'", kind.label(), args.id);
    let options = DeleteGatewayRouteFilterOptions::new(&gateway_id, &args.id);
    run_confirmed_delete(
        &what,
        args.yes,
        cli.batch,
        client.delete_gateway_route_filter(kind, &options),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_gateway(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/gateways/gw-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "gw-1", "name": "prod", "type": "dedicated"
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_list_import_filters() {
        let server = MockServer::start().await;
        mount_gateway(&server).await;
        Mock::given(method("GET"))
            .and(path("/gateways/gw-1/import_route_filters"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "import_route_filters": [
                    {"id": "rf-1", "action": "permit", "prefix": "10.0.0.0/8"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = DirectLinkV1::test_client(&server.uri());
        let cli = Cli::parse_from(["dlctl", "-b", "get", "import-filter", "-g", "gw-1"]);
        let args = RouteFilterArgs {
            id: None,
            gateway: "gw-1".to_string(),
            output: crate::cli::OutputFormat::Csv,
        };
        run_route_filter_command(&client, &cli, &args, RouteFilterKind::Import)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_export_filter() {
        let server = MockServer::start().await;
        mount_gateway(&server).await;
        Mock::given(method("DELETE"))
            .and(path("/gateways/gw-1/export_route_filters/rf-9"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = DirectLinkV1::test_client(&server.uri());
        let cli = Cli::parse_from([
            "dlctl", "-b", "delete", "export-filter", "rf-9", "-g", "gw-1", "-y",
        ]);
        let args = DeleteChildArgs {
            id: "rf-9".to_string(),
            gateway: "gw-1".to_string(),
            yes: true,
        };
        run_delete_route_filter_command(&client, &cli, &args, RouteFilterKind::Export)
            .await
            .unwrap();
    }
}
