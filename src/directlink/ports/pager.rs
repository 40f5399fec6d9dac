//! Cursor pager over `GET /ports`

use log::debug;

use crate::directlink::client::DirectLinkV1;
use crate::error::{DirectLinkError, Result};

use super::models::Port;
use super::options::ListPortsOptions;

/// Walks every page of the ports listing by following `next.start`
///
/// The pager owns a copy of the options; `start` is managed internally.
pub struct PortsPager<'a> {
    client: &'a DirectLinkV1,
    options: ListPortsOptions,
    has_next: bool,
    page_start: Option<String>,
    pages_fetched: usize,
}

impl<'a> PortsPager<'a> {
    /// Fails with `Validation` when `options.start` is already set
    pub fn new(client: &'a DirectLinkV1, options: ListPortsOptions) -> Result<Self> {
        if options.start.is_some() {
            return Err(DirectLinkError::Validation(
                "the options must not set 'start' when used with a pager".to_string(),
            ));
        }
        Ok(Self {
            client,
            options,
            has_next: true,
            page_start: None,
            pages_fetched: 0,
        })
    }

    /// True until a page without a `next` link has been read
    pub fn has_next(&self) -> bool {
        self.has_next
    }

    /// Fetch the next page of ports
    pub async fn get_next(&mut self) -> Result<Vec<Port>> {
        if !self.has_next {
            return Err(DirectLinkError::Validation(
                "no more results available".to_string(),
            ));
        }

        let mut options = self.options.clone();
        options.start = self.page_start.clone();
        let page = self.client.list_ports(&options).await?;

        let next = page.next_start()?;
        if next.is_some() && next == self.page_start {
            return Err(DirectLinkError::Json(format!(
                "pagination cursor '{}' did not advance",
                next.unwrap_or_default()
            )));
        }

        self.pages_fetched += 1;
        debug!(
            "Fetched ports page {} ({} items, more: {})",
            self.pages_fetched,
            page.ports.len(),
            next.is_some()
        );

        self.has_next = next.is_some();
        self.page_start = next;
        Ok(page.ports)
    }

    /// Fetch all remaining pages
    pub async fn get_all(&mut self) -> Result<Vec<Port>> {
        let mut all = Vec::new();
        while self.has_next() {
            all.extend(self.get_next().await?);
        }
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn port(id: &str) -> serde_json::Value {
        serde_json::json!({"id": id, "label": format!("label-{}", id)})
    }

    async fn mount_two_pages(mock_server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/ports"))
            .and(query_param("start", "cursor-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "first": {"href": format!("{}/ports?limit=2", mock_server.uri())},
                "limit": 2,
                "total_count": 3,
                "ports": [port("p3")]
            })))
            .with_priority(1)
            .expect(1)
            .mount(mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/ports"))
            .and(query_param("limit", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "first": {"href": format!("{}/ports?limit=2", mock_server.uri())},
                "limit": 2,
                "next": {"href": format!("{}/ports?start=cursor-2&limit=2", mock_server.uri())},
                "total_count": 3,
                "ports": [port("p1"), port("p2")]
            })))
            .expect(1)
            .mount(mock_server)
            .await;
    }

    #[tokio::test]
    async fn test_pager_get_next() {
        let mock_server = MockServer::start().await;
        mount_two_pages(&mock_server).await;

        let client = DirectLinkV1::test_client(&mock_server.uri());
        let mut pager = PortsPager::new(&client, ListPortsOptions::new().with_limit(2)).unwrap();

        assert!(pager.has_next());
        let first = pager.get_next().await.unwrap();
        assert_eq!(first.len(), 2);
        assert!(pager.has_next());

        let second = pager.get_next().await.unwrap();
        assert_eq!(second[0].id, "p3");
        assert!(!pager.has_next());

        let err = pager.get_next().await.unwrap_err();
        assert!(matches!(err, DirectLinkError::Validation(_)));
    }

    #[tokio::test]
    async fn test_pager_get_all() {
        let mock_server = MockServer::start().await;
        mount_two_pages(&mock_server).await;

        let client = DirectLinkV1::test_client(&mock_server.uri());
        let mut pager = PortsPager::new(&client, ListPortsOptions::new().with_limit(2)).unwrap();
        let ports = pager.get_all().await.unwrap();

        let ids: Vec<&str> = ports.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }

    #[tokio::test]
    async fn test_pager_rejects_start() {
        let client = DirectLinkV1::test_client("http://127.0.0.1:9");
        let result = PortsPager::new(&client, ListPortsOptions::new().with_start("abc"));
        assert!(matches!(result, Err(DirectLinkError::Validation(_))));
    }

    #[tokio::test]
    async fn test_pager_stops_on_repeated_cursor() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ports"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "next": {"href": "/v1/ports?start=same"},
                "ports": [port("p1")]
            })))
            .mount(&mock_server)
            .await;

        let client = DirectLinkV1::test_client(&mock_server.uri());
        let mut pager = PortsPager::new(&client, ListPortsOptions::new()).unwrap();
        pager.get_next().await.unwrap();
        let err = pager.get_all().await.unwrap_err();
        assert!(err.to_string().contains("did not advance"));
    }

    #[tokio::test]
    async fn test_pager_propagates_errors() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ports"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let client = DirectLinkV1::test_client(&mock_server.uri());
        let mut pager = PortsPager::new(&client, ListPortsOptions::new()).unwrap();
        let err = pager.get_all().await.unwrap_err();
        assert_eq!(err.status(), Some(403));
        assert!(pager.has_next());
    }
}
