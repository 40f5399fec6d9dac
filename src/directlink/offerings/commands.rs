//! Offering command handlers

use crate::cli::{OfferingArgs, RouterArgs};
use crate::directlink::commands::CommandResult;
use crate::directlink::DirectLinkV1;
use crate::output::output_records;
use crate::ui::{create_spinner, finish_spinner};
use crate::Cli;

use super::options::*;

/// Run the location list command
pub async fn run_location_command(
    client: &DirectLinkV1,
    cli: &Cli,
    args: &OfferingArgs,
) -> CommandResult {
    let spinner = create_spinner(
        &format!("Fetching {} locations...", args.offering),
        cli.batch,
    );
    let result = client
        .list_offering_type_locations(&ListOfferingTypeLocationsOptions::new(&args.offering))
        .await;
    finish_spinner(spinner);

    let mut locations = result?.locations;
    locations.sort_by(|a, b| a.name.cmp(&b.name));
    output_records(&locations, args.output, cli.no_header);
    Ok(())
}

/// Run the speed list command
pub async fn run_speed_command(
    client: &DirectLinkV1,
    cli: &Cli,
    args: &OfferingArgs,
) -> CommandResult {
    let spinner = create_spinner(&format!("Fetching {} speeds...", args.offering), cli.batch);
    let result = client
        .list_offering_type_speeds(&ListOfferingTypeSpeedsOptions::new(&args.offering))
        .await;
    finish_spinner(spinner);

    let mut speeds = result?.speeds;
    speeds.sort_by_key(|s| s.link_speed);
    output_records(&speeds, args.output, cli.no_header);
    Ok(())
}

/// Run the cross connect router list command
pub async fn run_router_command(
    client: &DirectLinkV1,
    cli: &Cli,
    args: &RouterArgs,
) -> CommandResult {
    let spinner = create_spinner(
        &format!("Fetching cross connect routers in '{}'...", args.location),
        cli.batch,
    );
    let options =
        ListOfferingTypeLocationCrossConnectRoutersOptions::new(&args.offering, &args.location);
    let result = client
        .list_offering_type_location_cross_connect_routers(&options)
        .await;
    finish_spinner(spinner);

    let routers = result?.cross_connect_routers;
    if routers.is_empty() {
        eprintln!("No cross connect routers found in '{}'", args.location);
        return Ok(());
    }
    output_records(&routers, args.output, cli.no_header);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_speed_command_uses_offering_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/offering_types/connect/speeds"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "speeds": [{"link_speed": 2000}, {"link_speed": 1000}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = DirectLinkV1::test_client(&server.uri());
        let cli = Cli::parse_from(["dlctl", "-b", "get", "speed", "--offering", "connect"]);
        let args = OfferingArgs {
            offering: "connect".to_string(),
            output: crate::cli::OutputFormat::Csv,
        };
        run_speed_command(&client, &cli, &args).await.unwrap();
    }

    #[tokio::test]
    async fn test_router_command_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/offering_types/dedicated/locations/nowhere/cross_connect_routers"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "errors": [{"message": "location not found"}]
            })))
            .mount(&server)
            .await;

        let client = DirectLinkV1::test_client(&server.uri());
        let cli = Cli::parse_from(["dlctl", "-b", "get", "router", "--location", "nowhere"]);
        let args = RouterArgs {
            location: "nowhere".to_string(),
            offering: "dedicated".to_string(),
            output: crate::cli::OutputFormat::Table,
        };
        let err = run_router_command(&client, &cli, &args).await.unwrap_err();
        assert!(err.to_string().contains("404"));
    }
}
