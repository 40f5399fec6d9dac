//! AS prepend command handlers

use log::debug;

use crate::cli::AsPrependArgs;
use crate::directlink::commands::CommandResult;
use crate::directlink::gateways::commands::resolve_gateway_id;
use crate::directlink::DirectLinkV1;
use crate::output::output_records;
use crate::ui::{create_spinner, finish_spinner};
use crate::Cli;

use super::options::ListGatewayAsPrependsOptions;

/// Run the AS prepend list command
pub async fn run_as_prepend_command(
    client: &DirectLinkV1,
    cli: &Cli,
    args: &AsPrependArgs,
) -> CommandResult {
    let spinner = create_spinner(
        &format!("Fetching AS prepends of gateway '{}'...", args.gateway),
        cli.batch,
    );
    let result = async {
        let gateway_id = resolve_gateway_id(client, &args.gateway).await?;
        Ok::<_, Box<dyn std::error::Error>>(
            client
                .list_gateway_as_prepends(&ListGatewayAsPrependsOptions::new(gateway_id))
                .await?,
        )
    }
    .await;
    finish_spinner(spinner);

    let collection = result?;
    debug!("AS prepends etag: {:?}", collection.etag);

    if collection.as_prepends.is_empty() {
        eprintln!("No AS prepends configured on gateway '{}'", args.gateway);
        return Ok(());
    }

    output_records(&collection.as_prepends, args.output, cli.no_header);
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
    async fn test_list_as_prepends() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gateways/gw-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "gw-1", "name": "prod", "type": "dedicated"
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/gateways/gw-1/as_prepends"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("ETag", "W/\"abc\"")
                    .set_body_json(json!({
                        "as_prepends": [
                            {"id": "ap-1", "length": 4, "policy": "import", "prefix": "10.0.0.0/16"}
                        ]
                    })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = DirectLinkV1::test_client(&server.uri());
        let cli = Cli::parse_from(["dlctl", "-b", "get", "as-prepend", "-g", "gw-1"]);
        let args = AsPrependArgs {
            gateway: "gw-1".to_string(),
            output: crate::cli::OutputFormat::Table,
        };
        run_as_prepend_command(&client, &cli, &args).await.unwrap();
    }
}
