//! Port command handlers

use log::debug;

use crate::cli::PortArgs;
use crate::directlink::commands::CommandResult;
use crate::directlink::DirectLinkV1;
use crate::output::{output_record, output_records};
use crate::ui::{create_spinner, finish_spinner};
use crate::Cli;

use super::options::{GetPortOptions, ListPortsOptions};
use super::pager::PortsPager;

/// Run the port list/get command
///
/// Lists walk every page; `--limit` only sets the page size.
pub async fn run_port_command(client: &DirectLinkV1, cli: &Cli, args: &PortArgs) -> CommandResult {
    if let Some(id) = &args.id {
        let spinner = create_spinner(&format!("Fetching port '{}'...", id), cli.batch);
        let result = client.get_port(&GetPortOptions::new(id)).await;
        finish_spinner(spinner);
        output_record(&result?, args.output, cli.no_header);
        return Ok(());
    }

    let mut options = ListPortsOptions::new();
    if let Some(limit) = args.limit {
        options = options.with_limit(limit);
    }
    if let Some(location) = &args.location {
        options = options.with_location_name(location.clone());
    }

    let spinner = create_spinner("Fetching ports...", cli.batch);
    let result = async {
        let mut pager = PortsPager::new(client, options)?;
        pager.get_all().await
    }
    .await;
    finish_spinner(spinner);
    let ports = result?;
    debug!("Fetched {} ports", ports.len());

    if ports.is_empty() {
        match &args.location {
            Some(location) => eprintln!("No ports found in location '{}'", location),
            None => eprintln!("No ports found"),
        }
        return Ok(());
    }

    output_records(&ports, args.output, cli.no_header);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_port_list_follows_pages() {
        let server = MockServer::start().await;
        let next_href = format!("{}/ports?start=page2&limit=1", server.uri());
        Mock::given(method("GET"))
            .and(path("/ports"))
            .and(query_param("start", "page2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "limit": 1,
                "ports": [{"id": "port-2", "label": "XCR-2"}]
            })))
            .expect(1)
            .with_priority(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/ports"))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "limit": 1,
                "next": {"href": next_href},
                "ports": [{"id": "port-1", "label": "XCR-1"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = DirectLinkV1::test_client(&server.uri());
        let cli = Cli::parse_from(["dlctl", "-b", "get", "port", "--limit", "1"]);
        let args = PortArgs {
            id: None,
            location: None,
            limit: Some(1),
            output: crate::cli::OutputFormat::Json,
        };
        run_port_command(&client, &cli, &args).await.unwrap();
    }

    #[tokio::test]
    async fn test_get_single_port() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ports/port-1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": "port-1", "label": "XCR-1"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = DirectLinkV1::test_client(&server.uri());
        let cli = Cli::parse_from(["dlctl", "-b", "get", "port", "port-1"]);
        let args = PortArgs {
            id: Some("port-1".to_string()),
            location: None,
            limit: None,
            output: crate::cli::OutputFormat::Table,
        };
        run_port_command(&client, &cli, &args).await.unwrap();
    }
}
