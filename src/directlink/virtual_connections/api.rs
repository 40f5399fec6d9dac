//! Virtual connection API operations

use reqwest::Method;

use crate::config::api;
use crate::directlink::client::{require, DirectLinkV1};
use crate::error::Result;

use super::models::{GatewayVirtualConnection, GatewayVirtualConnectionCollection};
use super::options::*;

impl DirectLinkV1 {
    /// List virtual connections of a gateway
    pub async fn list_gateway_virtual_connections(
        &self,
        options: &ListGatewayVirtualConnectionsOptions,
    ) -> Result<GatewayVirtualConnectionCollection> {
        let url = self.gateway_child_url(&options.gateway_id, api::VIRTUAL_CONNECTIONS, None)?;
        self.get_json(&url, &options.headers).await
    }

    /// Connect a gateway to a classic, VPC or transit network
    pub async fn create_gateway_virtual_connection(
        &self,
        options: &CreateGatewayVirtualConnectionOptions,
    ) -> Result<GatewayVirtualConnection> {
        require("name", &options.template.name)?;
        require("type", &options.template.connection_type)?;
        let url = self.gateway_child_url(&options.gateway_id, api::VIRTUAL_CONNECTIONS, None)?;
        self.send_json(Method::POST, &url, &options.headers, &options.template)
            .await
    }

    pub async fn delete_gateway_virtual_connection(
        &self,
        options: &DeleteGatewayVirtualConnectionOptions,
    ) -> Result<()> {
        let url = self.gateway_child_url(
            &options.gateway_id,
            api::VIRTUAL_CONNECTIONS,
            Some(&options.id),
        )?;
        self.delete(&url, &options.headers).await
    }

    pub async fn get_gateway_virtual_connection(
        &self,
        options: &GetGatewayVirtualConnectionOptions,
    ) -> Result<GatewayVirtualConnection> {
        let url = self.gateway_child_url(
            &options.gateway_id,
            api::VIRTUAL_CONNECTIONS,
            Some(&options.id),
        )?;
        self.get_json(&url, &options.headers).await
    }

    /// Rename, or attach/reject as the network owner
    pub async fn update_gateway_virtual_connection(
        &self,
        options: &UpdateGatewayVirtualConnectionOptions,
    ) -> Result<GatewayVirtualConnection> {
        let url = self.gateway_child_url(
            &options.gateway_id,
            api::VIRTUAL_CONNECTIONS,
            Some(&options.id),
        )?;
        self.patch_json(&url, &options.headers, &options.patch).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directlink::virtual_connections::models::{
        virtual_connection_type, GatewayVirtualConnectionPatchTemplate,
    };
    use crate::error::DirectLinkError;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn vc_json(id: &str, name: &str, status: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": name,
            "type": "vpc",
            "created_at": "2020-03-31T12:08:20.000Z",
            "network_id": "crn:v1:bluemix:public:is:us-east:a/28e4d90ac7504be69447111122223333::vpc:aaa81ac8",
            "status": status
        })
    }

    #[tokio::test]
    async fn test_list_gateway_virtual_connections() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/gateways/gw-1/virtual_connections"))
            .and(query_param("version", "2024-05-21"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "virtual_connections": [vc_json("vc-1", "newVC", "attached")]
            })))
            .mount(&mock_server)
            .await;

        let client = DirectLinkV1::test_client(&mock_server.uri());
        let collection = client
            .list_gateway_virtual_connections(&ListGatewayVirtualConnectionsOptions::new("gw-1"))
            .await
            .unwrap();

        assert_eq!(collection.virtual_connections.len(), 1);
        assert_eq!(collection.virtual_connections[0].status(), "attached");
    }

    #[tokio::test]
    async fn test_create_gateway_virtual_connection() {
        let mock_server = MockServer::start().await;
        let network = "crn:v1:bluemix:public:is:us-east:a/28e4d90ac7504be69447111122223333::vpc:aaa81ac8";

        Mock::given(method("POST"))
            .and(path("/gateways/gw-1/virtual_connections"))
            .and(body_json(serde_json::json!({
                "name": "newVC",
                "type": "vpc",
                "network_id": network
            })))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(vc_json("vc-1", "newVC", "pending")),
            )
            .mount(&mock_server)
            .await;

        let client = DirectLinkV1::test_client(&mock_server.uri());
        let options = CreateGatewayVirtualConnectionOptions::new(
            "gw-1",
            "newVC",
            virtual_connection_type::VPC,
        )
        .with_network_id(network);
        let vc = client
            .create_gateway_virtual_connection(&options)
            .await
            .unwrap();

        assert_eq!(vc.id, "vc-1");
        assert_eq!(vc.connection_type, "vpc");
    }

    #[tokio::test]
    async fn test_create_gateway_virtual_connection_requires_gateway() {
        let client = DirectLinkV1::test_client("http://127.0.0.1:9");
        let options = CreateGatewayVirtualConnectionOptions::new("", "vc", "classic");
        let err = client
            .create_gateway_virtual_connection(&options)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("gateway_id must not be empty"));
    }

    #[tokio::test]
    async fn test_get_gateway_virtual_connection() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/gateways/gw-1/virtual_connections/vc-1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(vc_json("vc-1", "newVC", "attached")),
            )
            .mount(&mock_server)
            .await;

        let client = DirectLinkV1::test_client(&mock_server.uri());
        let vc = client
            .get_gateway_virtual_connection(&GetGatewayVirtualConnectionOptions::new("gw-1", "vc-1"))
            .await
            .unwrap();
        assert_eq!(vc.name, "newVC");
    }

    #[tokio::test]
    async fn test_update_gateway_virtual_connection() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/gateways/gw-1/virtual_connections/vc-1"))
            .and(header("Content-Type", "application/merge-patch+json"))
            .and(body_json(serde_json::json!({"name": "renamed"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(vc_json("vc-1", "renamed", "attached")),
            )
            .mount(&mock_server)
            .await;

        let client = DirectLinkV1::test_client(&mock_server.uri());
        let patch = GatewayVirtualConnectionPatchTemplate {
            name: Some("renamed".to_string()),
            ..Default::default()
        };
        let vc = client
            .update_gateway_virtual_connection(&UpdateGatewayVirtualConnectionOptions::new(
                "gw-1", "vc-1", patch,
            ))
            .await
            .unwrap();
        assert_eq!(vc.name, "renamed");
    }

    #[tokio::test]
    async fn test_delete_gateway_virtual_connection() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/gateways/gw-1/virtual_connections/vc-1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = DirectLinkV1::test_client(&mock_server.uri());
        client
            .delete_gateway_virtual_connection(&DeleteGatewayVirtualConnectionOptions::new(
                "gw-1", "vc-1",
            ))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_gateway_virtual_connection_empty_id() {
        let client = DirectLinkV1::test_client("http://127.0.0.1:9");
        let err = client
            .delete_gateway_virtual_connection(&DeleteGatewayVirtualConnectionOptions::new(
                "gw-1", "",
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, DirectLinkError::Validation(_)));
    }
}
