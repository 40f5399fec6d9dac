//! Export and import route filter API operations
//!
//! Both kinds share one implementation; the named methods pick the kind.

use log::debug;
use reqwest::header::{CONTENT_TYPE, IF_MATCH};
use reqwest::Method;

use crate::directlink::client::{parse_json_with_etag, require, DirectLinkV1};
use crate::error::Result;

use super::models::{RouteFilter, RouteFilterCollection, RouteFilterKind};
use super::options::*;

impl DirectLinkV1 {
    /// List filters of `kind`, capturing the collection ETag
    pub async fn list_gateway_route_filters(
        &self,
        kind: RouteFilterKind,
        options: &ListGatewayRouteFiltersOptions,
    ) -> Result<RouteFilterCollection> {
        let url = self.gateway_child_url(&options.gateway_id, kind.collection(), None)?;
        let response = self.send(self.request(Method::GET, &url, &options.headers)?).await?;
        let (mut collection, etag): (RouteFilterCollection, _) =
            parse_json_with_etag(response).await?;
        collection.etag = etag;
        Ok(collection)
    }

    /// Add one filter of `kind`
    pub async fn create_gateway_route_filter(
        &self,
        kind: RouteFilterKind,
        options: &CreateGatewayRouteFilterOptions,
    ) -> Result<RouteFilter> {
        require("action", &options.template.action)?;
        require("prefix", &options.template.prefix)?;
        let url = self.gateway_child_url(&options.gateway_id, kind.collection(), None)?;
        self.send_json(Method::POST, &url, &options.headers, &options.template)
            .await
    }

    /// Replace every filter of `kind`; requires the current ETag
    pub async fn replace_gateway_route_filters(
        &self,
        kind: RouteFilterKind,
        options: &ReplaceGatewayRouteFiltersOptions,
    ) -> Result<RouteFilterCollection> {
        require("if_match", &options.if_match)?;
        for template in &options.route_filters {
            require("action", &template.action)?;
            require("prefix", &template.prefix)?;
        }
        let url = self.gateway_child_url(&options.gateway_id, kind.collection(), None)?;

        let mut body = serde_json::Map::new();
        body.insert(
            kind.collection().to_string(),
            serde_json::to_value(&options.route_filters)?,
        );
        debug!(
            "Replacing {} {} route filters on gateway {}",
            options.route_filters.len(),
            kind.label(),
            options.gateway_id
        );

        let builder = self
            .request(Method::PUT, &url, &options.headers)?
            .header(IF_MATCH, options.if_match.as_str())
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(&body)?);
        let response = self.send(builder).await?;
        let (mut collection, etag): (RouteFilterCollection, _) =
            parse_json_with_etag(response).await?;
        collection.etag = etag;
        Ok(collection)
    }

    pub async fn delete_gateway_route_filter(
        &self,
        kind: RouteFilterKind,
        options: &DeleteGatewayRouteFilterOptions,
    ) -> Result<()> {
        let url =
            self.gateway_child_url(&options.gateway_id, kind.collection(), Some(&options.id))?;
        self.delete(&url, &options.headers).await
    }

    pub async fn get_gateway_route_filter(
        &self,
        kind: RouteFilterKind,
        options: &GetGatewayRouteFilterOptions,
    ) -> Result<RouteFilter> {
        let url =
            self.gateway_child_url(&options.gateway_id, kind.collection(), Some(&options.id))?;
        self.get_json(&url, &options.headers).await
    }

    pub async fn update_gateway_route_filter(
        &self,
        kind: RouteFilterKind,
        options: &UpdateGatewayRouteFilterOptions,
    ) -> Result<RouteFilter> {
        let url =
            self.gateway_child_url(&options.gateway_id, kind.collection(), Some(&options.id))?;
        self.patch_json(&url, &options.headers, &options.patch).await
    }

    pub async fn list_gateway_export_route_filters(
        &self,
        options: &ListGatewayRouteFiltersOptions,
    ) -> Result<RouteFilterCollection> {
        self.list_gateway_route_filters(RouteFilterKind::Export, options)
            .await
    }

    pub async fn create_gateway_export_route_filter(
        &self,
        options: &CreateGatewayRouteFilterOptions,
    ) -> Result<RouteFilter> {
        self.create_gateway_route_filter(RouteFilterKind::Export, options)
            .await
    }

    pub async fn replace_gateway_export_route_filters(
        &self,
        options: &ReplaceGatewayRouteFiltersOptions,
    ) -> Result<RouteFilterCollection> {
        self.replace_gateway_route_filters(RouteFilterKind::Export, options)
            .await
    }

    pub async fn delete_gateway_export_route_filter(
        &self,
        options: &DeleteGatewayRouteFilterOptions,
    ) -> Result<()> {
        self.delete_gateway_route_filter(RouteFilterKind::Export, options)
            .await
    }

    pub async fn get_gateway_export_route_filter(
        &self,
        options: &GetGatewayRouteFilterOptions,
    ) -> Result<RouteFilter> {
        self.get_gateway_route_filter(RouteFilterKind::Export, options)
            .await
    }

    pub async fn update_gateway_export_route_filter(
        &self,
        options: &UpdateGatewayRouteFilterOptions,
    ) -> Result<RouteFilter> {
        self.update_gateway_route_filter(RouteFilterKind::Export, options)
            .await
    }

    pub async fn list_gateway_import_route_filters(
        &self,
        options: &ListGatewayRouteFiltersOptions,
    ) -> Result<RouteFilterCollection> {
        self.list_gateway_route_filters(RouteFilterKind::Import, options)
            .await
    }

    pub async fn create_gateway_import_route_filter(
        &self,
        options: &CreateGatewayRouteFilterOptions,
    ) -> Result<RouteFilter> {
        self.create_gateway_route_filter(RouteFilterKind::Import, options)
            .await
    }

    pub async fn replace_gateway_import_route_filters(
        &self,
        options: &ReplaceGatewayRouteFiltersOptions,
    ) -> Result<RouteFilterCollection> {
        self.replace_gateway_route_filters(RouteFilterKind::Import, options)
            .await
    }

    pub async fn delete_gateway_import_route_filter(
        &self,
        options: &DeleteGatewayRouteFilterOptions,
    ) -> Result<()> {
        self.delete_gateway_route_filter(RouteFilterKind::Import, options)
            .await
    }

    pub async fn get_gateway_import_route_filter(
        &self,
        options: &GetGatewayRouteFilterOptions,
    ) -> Result<RouteFilter> {
        self.get_gateway_route_filter(RouteFilterKind::Import, options)
            .await
    }

    pub async fn update_gateway_import_route_filter(
        &self,
        options: &UpdateGatewayRouteFilterOptions,
    ) -> Result<RouteFilter> {
        self.update_gateway_route_filter(RouteFilterKind::Import, options)
            .await
    }
}
