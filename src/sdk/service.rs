//! Shared HTTP core: service URL, authentication, retries and error mapping

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, RETRY_AFTER};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;

use crate::config::defaults;
use crate::error::{DirectLinkError, Result};
use crate::sdk::authenticator::{has_bad_first_or_last_char, Authenticator};

/// Bounded retry policy for transient failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Upper bound on a single wait
    pub max_interval: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, max_interval: Duration) -> Self {
        let max_retries = if max_retries == 0 {
            defaults::MAX_RETRIES
        } else {
            max_retries
        };
        let max_interval = if max_interval.is_zero() {
            Duration::from_secs(defaults::RETRY_INTERVAL_SECS)
        } else {
            max_interval
        };
        Self {
            max_retries,
            max_interval,
        }
    }

    /// Wait before retry `attempt` (1-based): server hint if any, else doubling from 1s
    pub fn wait_time(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        let backoff = retry_after.unwrap_or_else(|| {
            let exp = attempt.saturating_sub(1).min(16);
            Duration::from_secs(1u64 << exp)
        });
        backoff.min(self.max_interval)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(0, Duration::ZERO)
    }
}

/// Error body returned by IBM Cloud APIs
#[derive(Deserialize, Debug, Default)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorItem>,
    trace: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ErrorItem {
    message: Option<String>,
}

/// HTTP core shared by every operation
#[derive(Debug, Clone)]
pub struct BaseService {
    client: Client,
    service_url: String,
    authenticator: Arc<dyn Authenticator>,
    default_headers: HeaderMap,
    retry_policy: Option<RetryPolicy>,
    timeout: Duration,
    ssl_verification_disabled: bool,
}

impl BaseService {
    /// Create a service after validating the URL and the authenticator
    pub fn new(service_url: &str, authenticator: Arc<dyn Authenticator>) -> Result<Self> {
        authenticator.validate()?;
        let timeout = Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS);
        let mut service = Self {
            client: build_client(timeout, false),
            service_url: String::new(),
            authenticator,
            default_headers: HeaderMap::new(),
            retry_policy: None,
            timeout,
            ssl_verification_disabled: false,
        };
        service.set_service_url(service_url)?;
        Ok(service)
    }

    /// Replace the base URL; trailing slashes are dropped
    pub fn set_service_url(&mut self, url: &str) -> Result<()> {
        if has_bad_first_or_last_char(url) {
            return Err(DirectLinkError::Config(format!(
                "the service URL '{}' must not start or end with '{{', '}}' or '\"'",
                url
            )));
        }
        self.service_url = url.trim_end_matches('/').to_string();
        Ok(())
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    pub fn authenticator(&self) -> &Arc<dyn Authenticator> {
        &self.authenticator
    }

    /// Turn on retries for 429, 5xx gateway errors and transport timeouts
    pub fn enable_retries(&mut self, max_retries: u32, max_interval: Duration) {
        self.retry_policy = Some(RetryPolicy::new(max_retries, max_interval));
    }

    pub fn disable_retries(&mut self) {
        self.retry_policy = None;
    }

    pub fn retry_policy(&self) -> Option<&RetryPolicy> {
        self.retry_policy.as_ref()
    }

    /// Headers added to every request (per-call headers win)
    pub fn set_default_headers(&mut self, headers: HeaderMap) {
        self.default_headers = headers;
    }

    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Overall per-request timeout
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
        self.client = build_client(self.timeout, self.ssl_verification_disabled);
    }

    pub fn disable_ssl_verification(&mut self) {
        self.ssl_verification_disabled = true;
        self.client = build_client(self.timeout, true);
    }

    pub fn is_ssl_verification_disabled(&self) -> bool {
        self.ssl_verification_disabled
    }

    /// Join the service URL with a path that already carries its query string
    pub fn build_url(&self, path_and_query: &str) -> Result<String> {
        if self.service_url.is_empty() {
            return Err(DirectLinkError::Config("service URL is empty".to_string()));
        }
        Ok(format!("{}{}", self.service_url, path_and_query))
    }

    /// Start a request with the default headers applied
    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .headers(self.default_headers.clone())
    }

    /// Authenticate and send, retrying transient failures when enabled
    ///
    /// Non-success responses are turned into `DirectLinkError::Api`.
    /// Bodies that cannot be cloned (multipart streams) are sent once.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let builder = self.authenticator.authenticate(builder)?;
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            let (policy, current) = match (self.retry_policy.as_ref(), builder.try_clone()) {
                (Some(policy), Some(current)) if attempt <= policy.max_retries => {
                    (policy, current)
                }
                _ => {
                    let response = builder.send().await?;
                    return check_response(response).await;
                }
            };

            match current.send().await {
                Ok(response) if is_retryable_status(response.status()) => {
                    let wait = policy.wait_time(attempt, retry_after(response.headers()));
                    warn!(
                        "{} returned {}, retrying in {:?} (attempt {}/{})",
                        response.url(),
                        response.status(),
                        wait,
                        attempt,
                        policy.max_retries
                    );
                    tokio::time::sleep(wait).await;
                }
                Ok(response) => return check_response(response).await,
                Err(e) if e.is_timeout() || e.is_connect() => {
                    let wait = policy.wait_time(attempt, None);
                    warn!(
                        "Request failed ({}), retrying in {:?} (attempt {}/{})",
                        e, wait, attempt, policy.max_retries
                    );
                    tokio::time::sleep(wait).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Build the configured client, falling back to reqwest defaults on failure
fn build_client(timeout: Duration, accept_invalid_certs: bool) -> Client {
    try_build_client(timeout, accept_invalid_certs).unwrap_or_else(|e| {
        warn!(
            "Could not build HTTP client ({}); timeout, user agent and SSL settings are not applied",
            e
        );
        Client::new()
    })
}

fn try_build_client(timeout: Duration, accept_invalid_certs: bool) -> reqwest::Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        reqwest::header::USER_AGENT,
        HeaderValue::from_static(crate::config::api::USER_AGENT),
    );

    Client::builder()
        .default_headers(headers)
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .connect_timeout(Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS))
        .timeout(timeout)
        .danger_accept_invalid_certs(accept_invalid_certs)
        .build()
}

fn is_retryable_status(status: StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 502 | 503 | 504)
}

fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

/// Pass 2xx through; map anything else to an `Api` error
async fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    debug!("{} returned {}", response.url(), status);
    let body = response.text().await.unwrap_or_default();
    Err(api_error(status, &body))
}

pub(crate) fn api_error(status: StatusCode, body: &str) -> DirectLinkError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .errors
        .into_iter()
        .find_map(|e| e.message)
        .or(parsed.message)
        .or(parsed.error)
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected response")
                    .to_string()
            } else {
                body.trim().to_string()
            }
        });

    DirectLinkError::Api {
        status: status.as_u16(),
        message,
        trace: parsed.trace,
    }
}
