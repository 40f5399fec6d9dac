//! Route report API operations

use reqwest::Method;

use crate::config::api;
use crate::directlink::client::{parse_json, DirectLinkV1};
use crate::error::Result;

use super::models::{RouteReport, RouteReportCollection};
use super::options::*;

impl DirectLinkV1 {
    pub async fn list_gateway_route_reports(
        &self,
        options: &ListGatewayRouteReportsOptions,
    ) -> Result<RouteReportCollection> {
        let url = self.gateway_child_url(&options.gateway_id, api::ROUTE_REPORTS, None)?;
        self.get_json(&url, &options.headers).await
    }

    /// Request a new report; it starts out `pending`
    pub async fn create_gateway_route_report(
        &self,
        options: &CreateGatewayRouteReportOptions,
    ) -> Result<RouteReport> {
        let url = self.gateway_child_url(&options.gateway_id, api::ROUTE_REPORTS, None)?;
        let response = self
            .send(self.request(Method::POST, &url, &options.headers)?)
            .await?;
        parse_json(response).await
    }

    pub async fn delete_gateway_route_report(
        &self,
        options: &DeleteGatewayRouteReportOptions,
    ) -> Result<()> {
        let url = self.gateway_child_url(
            &options.gateway_id,
            api::ROUTE_REPORTS,
            Some(&options.id),
        )?;
        self.delete(&url, &options.headers).await
    }

    pub async fn get_gateway_route_report(
        &self,
        options: &GetGatewayRouteReportOptions,
    ) -> Result<RouteReport> {
        let url = self.gateway_child_url(
            &options.gateway_id,
            api::ROUTE_REPORTS,
            Some(&options.id),
        )?;
        self.get_json(&url, &options.headers).await
    }
}
