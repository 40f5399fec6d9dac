//! AS prepend API operations

use reqwest::header::{CONTENT_TYPE, IF_MATCH};
use reqwest::Method;

use crate::config::api;
use crate::directlink::client::{parse_json_with_etag, require, DirectLinkV1};
use crate::error::{DirectLinkError, Result};

use super::models::{AsPrependCollection, MAX_LENGTH, MIN_LENGTH};
use super::options::*;

impl DirectLinkV1 {
    /// List AS prepends, capturing the collection ETag
    pub async fn list_gateway_as_prepends(
        &self,
        options: &ListGatewayAsPrependsOptions,
    ) -> Result<AsPrependCollection> {
        let url = self.gateway_child_url(&options.gateway_id, api::AS_PREPENDS, None)?;
        let response = self.send(self.request(Method::GET, &url, &options.headers)?).await?;
        let (mut collection, etag): (AsPrependCollection, _) =
            parse_json_with_etag(response).await?;
        collection.etag = etag;
        Ok(collection)
    }

    /// Replace all AS prepends; requires the current ETag
    pub async fn replace_gateway_as_prepends(
        &self,
        options: &ReplaceGatewayAsPrependsOptions,
    ) -> Result<AsPrependCollection> {
        require("if_match", &options.if_match)?;
        for prepend in &options.as_prepends {
            require("policy", &prepend.policy)?;
            if !(MIN_LENGTH..=MAX_LENGTH).contains(&prepend.length) {
                return Err(DirectLinkError::Validation(format!(
                    "AS prepend length must be between {} and {}, got {}",
                    MIN_LENGTH, MAX_LENGTH, prepend.length
                )));
            }
        }
        let url = self.gateway_child_url(&options.gateway_id, api::AS_PREPENDS, None)?;
        let body = serde_json::json!({ "as_prepends": options.as_prepends });

        let builder = self
            .request(Method::PUT, &url, &options.headers)?
            .header(IF_MATCH, options.if_match.as_str())
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(&body)?);
        let response = self.send(builder).await?;
        let (mut collection, etag): (AsPrependCollection, _) =
            parse_json_with_etag(response).await?;
        collection.etag = etag;
        Ok(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directlink::as_prepends::models::{as_prepend_policy, AsPrependTemplate};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_gateway_as_prepends() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/gateways/gw-1/as_prepends"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("ETag", "W/\"prepends-1\"")
                    .set_body_json(serde_json::json!({
                        "as_prepends": [{
                            "id": "ap-1",
                            "length": 4,
                            "policy": "import",
                            "specific_prefixes": ["192.168.3.0/24"],
                            "created_at": "2020-11-02T20:40:29.622Z"
                        }]
                    })),
            )
            .mount(&mock_server)
            .await;

        let client = DirectLinkV1::test_client(&mock_server.uri());
        let collection = client
            .list_gateway_as_prepends(&ListGatewayAsPrependsOptions::new("gw-1"))
            .await
            .unwrap();

        assert_eq!(collection.as_prepends.len(), 1);
        assert_eq!(collection.etag.as_deref(), Some("W/\"prepends-1\""));
    }

    #[tokio::test]
    async fn test_replace_gateway_as_prepends() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/gateways/gw-1/as_prepends"))
            .and(header("If-Match", "W/\"prepends-1\""))
            .and(body_json(serde_json::json!({
                "as_prepends": [{"length": 5, "policy": "export"}]
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .insert_header("ETag", "W/\"prepends-2\"")
                    .set_body_json(serde_json::json!({
                        "as_prepends": [{"id": "ap-2", "length": 5, "policy": "export"}]
                    })),
            )
            .mount(&mock_server)
            .await;

        let client = DirectLinkV1::test_client(&mock_server.uri());
        let options = ReplaceGatewayAsPrependsOptions::new(
            "gw-1",
            "W/\"prepends-1\"",
            vec![AsPrependTemplate::new(5, as_prepend_policy::EXPORT)],
        );
        let collection = client.replace_gateway_as_prepends(&options).await.unwrap();

        assert_eq!(collection.as_prepends[0].id, "ap-2");
        assert_eq!(collection.etag.as_deref(), Some("W/\"prepends-2\""));
    }

    #[tokio::test]
    async fn test_replace_rejects_bad_length() {
        let client = DirectLinkV1::test_client("http://127.0.0.1:9");
        let options = ReplaceGatewayAsPrependsOptions::new(
            "gw-1",
            "etag",
            vec![AsPrependTemplate::new(11, as_prepend_policy::IMPORT)],
        );
        let err = client.replace_gateway_as_prepends(&options).await.unwrap_err();
        assert!(matches!(err, DirectLinkError::Validation(_)));
    }

    #[tokio::test]
    async fn test_replace_requires_if_match() {
        let client = DirectLinkV1::test_client("http://127.0.0.1:9");
        let options = ReplaceGatewayAsPrependsOptions::new("gw-1", " ", vec![]);
        let err = client.replace_gateway_as_prepends(&options).await.unwrap_err();
        assert!(err.to_string().contains("if_match must not be empty"));
    }
}
