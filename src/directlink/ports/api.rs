//! Port API operations

use crate::config::api;
use crate::directlink::client::{require, segment, DirectLinkV1};
use crate::error::{DirectLinkError, Result};

use super::models::{Port, PortCollection};
use super::options::{GetPortOptions, ListPortsOptions};

impl DirectLinkV1 {
    /// List provider ports, one page at a time
    ///
    /// Use [`super::PortsPager`] to walk every page.
    pub async fn list_ports(&self, options: &ListPortsOptions) -> Result<PortCollection> {
        let mut query = Vec::new();
        if let Some(start) = &options.start {
            query.push(("start", start.clone()));
        }
        if let Some(limit) = options.limit {
            if limit == 0 || limit > api::MAX_PAGE_LIMIT {
                return Err(DirectLinkError::Validation(format!(
                    "limit must be between 1 and {}, got {}",
                    api::MAX_PAGE_LIMIT,
                    limit
                )));
            }
            query.push(("limit", limit.to_string()));
        }
        if let Some(location_name) = &options.location_name {
            query.push(("location_name", location_name.clone()));
        }

        let url = self.url(&format!("/{}", api::PORTS), &query)?;
        self.get_json(&url, &options.headers).await
    }

    /// Get a single provider port
    pub async fn get_port(&self, options: &GetPortOptions) -> Result<Port> {
        require("id", &options.id)?;
        let url = self.url(&format!("/{}/{}", api::PORTS, segment(&options.id)), &[])?;
        self.get_json(&url, &options.headers).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_ports_with_filters() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ports"))
            .and(query_param("version", "2024-05-21"))
            .and(query_param("limit", "10"))
            .and(query_param("location_name", "fra02"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "first": {"href": "https://directlink.cloud.ibm.com/v1/ports?limit=10"},
                "limit": 10,
                "total_count": 1,
                "ports": [{
                    "id": "01122b9b-820f-4c44-8a31-77f1f0806765",
                    "direct_link_count": 1,
                    "label": "XCR-FRK-CS-SEC-01",
                    "location_display_name": "Frankfurt 2",
                    "location_name": "fra02",
                    "provider_name": "provider_1",
                    "supported_link_speeds": [1000]
                }]
            })))
            .mount(&mock_server)
            .await;

        let client = DirectLinkV1::test_client(&mock_server.uri());
        let options = ListPortsOptions::new()
            .with_limit(10)
            .with_location_name("fra02");
        let page = client.list_ports(&options).await.unwrap();

        assert_eq!(page.ports.len(), 1);
        assert_eq!(page.ports[0].provider_name.as_deref(), Some("provider_1"));
        assert_eq!(page.next_start().unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_ports_rejects_bad_limit() {
        let client = DirectLinkV1::test_client("http://127.0.0.1:9");

        for limit in [0, 101] {
            let err = client
                .list_ports(&ListPortsOptions::new().with_limit(limit))
                .await
                .unwrap_err();
            assert!(matches!(err, DirectLinkError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn test_get_port() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ports/port-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "port-1",
                "label": "XCR-FRK-CS-SEC-01"
            })))
            .mount(&mock_server)
            .await;

        let client = DirectLinkV1::test_client(&mock_server.uri());
        let port = client.get_port(&GetPortOptions::new("port-1")).await.unwrap();
        assert_eq!(port.id, "port-1");
    }

    #[tokio::test]
    async fn test_get_port_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ports/nope"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = DirectLinkV1::test_client(&mock_server.uri());
        let err = client.get_port(&GetPortOptions::new("nope")).await.unwrap_err();
        assert!(matches!(err, DirectLinkError::Api { status: 404, .. }));
    }
}
