//! Direct Link service client

use log::debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, ETAG};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{api, defaults, external};
use crate::error::{DirectLinkError, Result};
use crate::sdk::{AsPatch, Authenticator, BaseService, ServiceProperties};

/// Construction options for [`DirectLinkV1`]
#[derive(Debug, Clone)]
pub struct DirectLinkV1Options {
    /// Service name used to look up external configuration
    pub service_name: String,
    /// Base URL; defaults to the public endpoint
    pub url: Option<String>,
    /// API version date (required)
    pub version: String,
    /// Credentials; loaded from external configuration when `None`
    pub authenticator: Option<Arc<dyn Authenticator>>,
}

impl DirectLinkV1Options {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            service_name: external::DEFAULT_SERVICE_NAME.to_string(),
            url: None,
            version: version.into(),
            authenticator: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = service_name.into();
        self
    }
}

impl Default for DirectLinkV1Options {
    fn default() -> Self {
        Self::new(defaults::API_VERSION)
    }
}

/// Client for the IBM Cloud Direct Link API
#[derive(Debug, Clone)]
pub struct DirectLinkV1 {
    service: BaseService,
    version: String,
}

impl DirectLinkV1 {
    /// Create a client from explicit options
    ///
    /// Fails when `version` is empty or no authenticator was given.
    pub fn new(options: DirectLinkV1Options) -> Result<Self> {
        let authenticator = options.authenticator.ok_or_else(|| {
            DirectLinkError::Config("an authenticator is required".to_string())
        })?;
        Self::build(
            options.url.as_deref().unwrap_or(api::DEFAULT_SERVICE_URL),
            options.version,
            authenticator,
        )
    }

    /// Create a client, filling gaps from `<SERVICE_NAME>_*` properties
    ///
    /// Explicit options win over external ones.
    pub fn new_using_external_config(options: DirectLinkV1Options) -> Result<Self> {
        let props = ServiceProperties::load(&options.service_name)?;
        Self::from_properties(options, &props)
    }

    pub(crate) fn from_properties(
        options: DirectLinkV1Options,
        props: &ServiceProperties,
    ) -> Result<Self> {
        let authenticator = match options.authenticator {
            Some(auth) => auth,
            None => props.authenticator()?,
        };
        let url = options
            .url
            .or_else(|| props.url().map(str::to_string))
            .unwrap_or_else(|| api::DEFAULT_SERVICE_URL.to_string());

        let mut client = Self::build(&url, options.version, authenticator)?;
        if props.disable_ssl() {
            client.service.disable_ssl_verification();
        }
        if let Some(policy) = props.retry_policy()? {
            client
                .service
                .enable_retries(policy.max_retries, policy.max_interval);
        }
        Ok(client)
    }

    fn build(url: &str, version: String, authenticator: Arc<dyn Authenticator>) -> Result<Self> {
        if version.trim().is_empty() {
            return Err(DirectLinkError::Config("version is required".to_string()));
        }
        let service = BaseService::new(url, authenticator)?;
        Ok(Self { service, version })
    }

    /// Create a client against a mock server (tests only)
    #[cfg(test)]
    pub fn test_client(base_url: &str) -> Self {
        Self::build(
            base_url,
            "2024-05-21".to_string(),
            Arc::new(crate::sdk::NoAuthAuthenticator),
        )
        .unwrap()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn set_version(&mut self, version: impl Into<String>) -> Result<()> {
        let version = version.into();
        if version.trim().is_empty() {
            return Err(DirectLinkError::Config("version is required".to_string()));
        }
        self.version = version;
        Ok(())
    }

    pub fn set_service_url(&mut self, url: &str) -> Result<()> {
        self.service.set_service_url(url)
    }

    pub fn service_url(&self) -> &str {
        self.service.service_url()
    }

    pub fn enable_retries(&mut self, max_retries: u32, max_interval: Duration) {
        self.service.enable_retries(max_retries, max_interval);
    }

    pub fn disable_retries(&mut self) {
        self.service.disable_retries();
    }

    pub fn set_default_headers(&mut self, headers: HeaderMap) {
        self.service.set_default_headers(headers);
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.service.set_timeout(timeout);
    }

    pub fn disable_ssl_verification(&mut self) {
        self.service.disable_ssl_verification();
    }

    /// Underlying HTTP core
    pub fn service(&self) -> &BaseService {
        &self.service
    }

    /// Build `<service_url><path>?version=...&<query>`; `path` segments must be pre-encoded
    pub(crate) fn url(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        let mut url = format!(
            "{}?{}={}",
            path,
            api::VERSION_PARAM,
            urlencoding::encode(&self.version)
        );
        for (key, value) in query {
            url.push_str(&format!("&{}={}", key, urlencoding::encode(value)));
        }
        self.service.build_url(&url)
    }

    /// `/gateways/{gateway_id}/<collection>[/{id}]` with required, encoded ids
    pub(crate) fn gateway_child_url(
        &self,
        gateway_id: &str,
        collection: &str,
        id: Option<&str>,
    ) -> Result<String> {
        require("gateway_id", gateway_id)?;
        let mut path = format!("/{}/{}/{}", api::GATEWAYS, segment(gateway_id), collection);
        if let Some(id) = id {
            require("id", id)?;
            path.push('/');
            path.push_str(&segment(id));
        }
        self.url(&path, &[])
    }

    /// Start a request with the standard headers plus per-call headers
    pub(crate) fn request(
        &self,
        method: Method,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<RequestBuilder> {
        self.request_accepting(method, url, headers, "application/json")
    }

    /// Like [`Self::request`] with an explicit `Accept` type
    pub(crate) fn request_accepting(
        &self,
        method: Method,
        url: &str,
        headers: &HashMap<String, String>,
        accept: &str,
    ) -> Result<RequestBuilder> {
        debug!("{} {}", method, url);
        let mut builder = self.service.request(method, url).header(ACCEPT, accept);
        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                DirectLinkError::Validation(format!("invalid header name '{}'", name))
            })?;
            let value = HeaderValue::from_str(value).map_err(|_| {
                DirectLinkError::Validation(format!("invalid value for header '{}'", name))
            })?;
            builder = builder.header(name, value);
        }
        Ok(builder)
    }

    /// GET a JSON document
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<T> {
        let response = self.send(self.request(Method::GET, url, headers)?).await?;
        parse_json(response).await
    }

    /// Send a JSON body and parse the JSON reply
    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        url: &str,
        headers: &HashMap<String, String>,
        body: &B,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self
            .request(method, url, headers)?
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(body)?);
        let response = self.send(builder).await?;
        parse_json(response).await
    }

    /// PATCH a merge-patch document built from `template`
    pub(crate) async fn patch_json<P, T>(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        template: &P,
    ) -> Result<T>
    where
        P: AsPatch,
        T: DeserializeOwned,
    {
        let patch = template.as_patch()?;
        let builder = self
            .request(Method::PATCH, url, headers)?
            .header(CONTENT_TYPE, api::MERGE_PATCH_CONTENT_TYPE)
            .body(serde_json::to_vec(&patch)?);
        let response = self.send(builder).await?;
        parse_json(response).await
    }

    /// DELETE, discarding the (empty) body
    pub(crate) async fn delete(&self, url: &str, headers: &HashMap<String, String>) -> Result<()> {
        self.send(self.request(Method::DELETE, url, headers)?)
            .await?;
        Ok(())
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        self.service.send(builder).await
    }
}

/// Parse a JSON body into `T`
pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status().as_u16();
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| {
        DirectLinkError::Json(format!(
            "could not parse response (status {}): {}",
            status, e
        ))
    })
}

/// Parse a JSON body and return it with the response `ETag`
pub(crate) async fn parse_json_with_etag<T: DeserializeOwned>(
    response: Response,
) -> Result<(T, Option<String>)> {
    let etag = response
        .headers()
        .get(ETAG)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = parse_json(response).await?;
    Ok((body, etag))
}

/// Percent-encode one path segment
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Fail with `Validation` when a required string is empty
pub(crate) fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DirectLinkError::Validation(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(())
}
