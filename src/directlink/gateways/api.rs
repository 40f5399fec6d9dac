//! Gateway API operations

use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::config::api;
use crate::directlink::client::{require, segment, DirectLinkV1};
use crate::error::{DirectLinkError, Result};

use super::models::{
    Gateway, GatewayCollection, GatewayStatisticCollection, GatewayStatusCollection,
};
use super::options::*;

impl DirectLinkV1 {
    /// List all gateways in the account
    pub async fn list_gateways(&self, options: &ListGatewaysOptions) -> Result<GatewayCollection> {
        let url = self.url(&format!("/{}", api::GATEWAYS), &[])?;
        self.get_json(&url, &options.headers).await
    }

    /// Create a dedicated or connect gateway
    pub async fn create_gateway(&self, options: &CreateGatewayOptions) -> Result<Gateway> {
        let missing = options.gateway_template.missing_fields();
        if !missing.is_empty() {
            return Err(DirectLinkError::Validation(format!(
                "gateway template is missing required fields: {}",
                missing.join(", ")
            )));
        }

        let mut query = Vec::new();
        if let Some(check_only) = options.check_only {
            query.push(("check_only", check_only.to_string()));
        }
        let url = self.url(&format!("/{}", api::GATEWAYS), &query)?;
        self.send_json(Method::POST, &url, &options.headers, &options.gateway_template)
            .await
    }

    /// Delete a gateway
    pub async fn delete_gateway(&self, options: &DeleteGatewayOptions) -> Result<()> {
        let url = self.gateway_url(&options.id, "")?;
        self.delete(&url, &options.headers).await
    }

    /// Get a single gateway
    pub async fn get_gateway(&self, options: &GetGatewayOptions) -> Result<Gateway> {
        let url = self.gateway_url(&options.id, "")?;
        self.get_json(&url, &options.headers).await
    }

    /// Update gateway attributes with a merge patch
    pub async fn update_gateway(&self, options: &UpdateGatewayOptions) -> Result<Gateway> {
        let url = self.gateway_url(&options.id, "")?;
        self.patch_json(&url, &options.headers, &options.gateway_patch_template)
            .await
    }

    /// Approve or reject a pending change on a connect gateway
    pub async fn create_gateway_action(
        &self,
        options: &CreateGatewayActionOptions,
    ) -> Result<Gateway> {
        require("action", &options.action.action)?;
        let url = self.gateway_url(&options.id, "/actions")?;
        self.send_json(Method::POST, &url, &options.headers, &options.action)
            .await
    }

    /// Download the completion notice PDF
    pub async fn list_gateway_completion_notice(
        &self,
        options: &ListGatewayCompletionNoticeOptions,
    ) -> Result<Vec<u8>> {
        let url = self.gateway_url(&options.id, "/completion_notice")?;
        self.get_pdf(&url, &options.headers).await
    }

    /// Upload the completion notice for a dedicated gateway
    pub async fn create_gateway_completion_notice(
        &self,
        options: &CreateGatewayCompletionNoticeOptions,
    ) -> Result<()> {
        let url = self.gateway_url(&options.id, "/completion_notice")?;

        let mut form = Form::new();
        if let Some(upload) = &options.upload {
            let content_type = options
                .upload_content_type
                .as_deref()
                .unwrap_or("application/pdf");
            let part = Part::bytes(upload.clone())
                .file_name("completion_notice.pdf")
                .mime_str(content_type)?;
            form = form.part("upload", part);
        }

        let builder = self
            .request(Method::PUT, &url, &options.headers)?
            .multipart(form);
        self.send(builder).await?;
        Ok(())
    }

    /// Download the letter of authorization PDF
    pub async fn list_gateway_letter_of_authorization(
        &self,
        options: &ListGatewayLetterOfAuthorizationOptions,
    ) -> Result<Vec<u8>> {
        let url = self.gateway_url(&options.id, "/letter_of_authorization")?;
        self.get_pdf(&url, &options.headers).await
    }

    /// Get MACsec or BFD statistics
    pub async fn get_gateway_statistics(
        &self,
        options: &GetGatewayStatisticsOptions,
    ) -> Result<GatewayStatisticCollection> {
        require("id", &options.id)?;
        require("type", &options.statistic_type)?;
        let url = self.url(
            &format!("/{}/{}/statistics", api::GATEWAYS, segment(&options.id)),
            &[("type", options.statistic_type.clone())],
        )?;
        self.get_json(&url, &options.headers).await
    }

    /// Get BGP, link and operational status
    pub async fn get_gateway_status(
        &self,
        options: &GetGatewayStatusOptions,
    ) -> Result<GatewayStatusCollection> {
        require("id", &options.id)?;
        let mut query = Vec::new();
        if let Some(status_type) = &options.status_type {
            query.push(("type", status_type.clone()));
        }
        let url = self.url(
            &format!("/{}/{}/status", api::GATEWAYS, segment(&options.id)),
            &query,
        )?;
        self.get_json(&url, &options.headers).await
    }

    /// Save the completion notice to `output_path`
    ///
    /// # Returns
    /// Number of bytes written
    pub async fn download_gateway_completion_notice_to(
        &self,
        options: &ListGatewayCompletionNoticeOptions,
        output_path: &Path,
    ) -> Result<u64> {
        let bytes = self.list_gateway_completion_notice(options).await?;
        write_file(output_path, &bytes).await
    }

    /// Save the letter of authorization to `output_path`
    ///
    /// # Returns
    /// Number of bytes written
    pub async fn download_gateway_letter_of_authorization_to(
        &self,
        options: &ListGatewayLetterOfAuthorizationOptions,
        output_path: &Path,
    ) -> Result<u64> {
        let bytes = self.list_gateway_letter_of_authorization(options).await?;
        write_file(output_path, &bytes).await
    }

    /// `/gateways/{id}<suffix>` with a required, encoded id
    fn gateway_url(&self, id: &str, suffix: &str) -> Result<String> {
        require("id", id)?;
        self.url(
            &format!("/{}/{}{}", api::GATEWAYS, segment(id), suffix),
            &[],
        )
    }

    async fn get_pdf(&self, url: &str, headers: &HashMap<String, String>) -> Result<Vec<u8>> {
        let builder = self.request_accepting(Method::GET, url, headers, "application/pdf")?;
        let response = self.send(builder).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

async fn write_file(output_path: &Path, bytes: &[u8]) -> Result<u64> {
    let mut file = File::create(output_path)
        .await
        .map_err(|e| DirectLinkError::Io {
            message: format!("Failed to create file '{}': {}", output_path.display(), e),
        })?;

    file.write_all(bytes)
        .await
        .map_err(|e| DirectLinkError::Io {
            message: format!("Failed to write to '{}': {}", output_path.display(), e),
        })?;

    file.flush().await.map_err(|e| DirectLinkError::Io {
        message: format!("Failed to flush file '{}': {}", output_path.display(), e),
    })?;

    debug!("Wrote {} bytes to {}", bytes.len(), output_path.display());
    Ok(bytes.len() as u64)
}
