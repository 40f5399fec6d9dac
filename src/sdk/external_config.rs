//! Service properties from the environment or an `ibm-credentials.env` file
//!
//! Keys are `<SERVICE_NAME>_<PROPERTY>`, e.g. `DIRECTLINK_URL`. The first
//! credentials file found is read, then each key set in the environment
//! overrides the file's value.

use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::config::external;
use crate::error::{DirectLinkError, Result};
use crate::sdk::authenticator::{
    Authenticator, BasicAuthenticator, BearerTokenAuthenticator, NoAuthAuthenticator,
    AUTHTYPE_BASIC, AUTHTYPE_BEARER_TOKEN, AUTHTYPE_NOAUTH,
};
use crate::sdk::service::RetryPolicy;

/// Properties configured for one service
#[derive(Debug, Default, Clone)]
pub struct ServiceProperties {
    service_name: String,
    values: HashMap<String, String>,
}

impl ServiceProperties {
    /// Load properties for `service_name` from the process environment or credentials file
    pub fn load(service_name: &str) -> Result<Self> {
        let file = credentials_file_path();
        Self::from_sources(service_name, |key| std::env::var(key).ok(), file.as_deref())
    }

    /// Load from an explicit environment lookup and optional credentials file
    pub fn from_sources<F>(
        service_name: &str,
        env_lookup: F,
        credentials_file: Option<&Path>,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = env_prefix(service_name);
        let mut values = match credentials_file {
            Some(path) => {
                debug!("Reading service properties from {}", path.display());
                read_credentials_file(path, &prefix)?
            }
            None => HashMap::new(),
        };

        for suffix in ALL_PROPERTIES {
            if let Some(value) = env_lookup(&format!("{}{}", prefix, suffix)) {
                debug!("{}{} set in environment", prefix, suffix);
                values.insert(suffix.to_string(), value);
            }
        }

        Ok(Self {
            service_name: service_name.to_string(),
            values,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw property by suffix (e.g. "URL")
    pub fn get(&self, suffix: &str) -> Option<&str> {
        self.values
            .get(suffix)
            .map(|v| v.as_str())
            .filter(|v| !v.is_empty())
    }

    pub fn url(&self) -> Option<&str> {
        self.get(external::PROP_URL)
    }

    pub fn disable_ssl(&self) -> bool {
        self.get(external::PROP_DISABLE_SSL)
            .map(parse_bool)
            .unwrap_or(false)
    }

    /// Retry policy when `ENABLE_RETRIES` is true
    pub fn retry_policy(&self) -> Result<Option<RetryPolicy>> {
        let enabled = self
            .get(external::PROP_ENABLE_RETRIES)
            .map(parse_bool)
            .unwrap_or(false);
        if !enabled {
            return Ok(None);
        }

        let max_retries = match self.get(external::PROP_MAX_RETRIES) {
            Some(v) => v.parse::<u32>().map_err(|_| {
                DirectLinkError::Config(format!(
                    "{}{} must be a non-negative integer, got '{}'",
                    env_prefix(&self.service_name),
                    external::PROP_MAX_RETRIES,
                    v
                ))
            })?,
            None => 0,
        };
        let interval = match self.get(external::PROP_RETRY_INTERVAL) {
            Some(v) => v.parse::<u64>().map_err(|_| {
                DirectLinkError::Config(format!(
                    "{}{} must be a number of seconds, got '{}'",
                    env_prefix(&self.service_name),
                    external::PROP_RETRY_INTERVAL,
                    v
                ))
            })?,
            None => 0,
        };

        Ok(Some(RetryPolicy::new(
            max_retries,
            Duration::from_secs(interval),
        )))
    }

    /// Build the authenticator named by `AUTH_TYPE`
    ///
    /// Without an explicit type, a bearer token implies `bearertoken`.
    pub fn authenticator(&self) -> Result<Arc<dyn Authenticator>> {
        let auth_type = self
            .get(external::PROP_AUTH_TYPE)
            .map(|t| t.to_ascii_lowercase())
            .or_else(|| {
                self.get(external::PROP_BEARER_TOKEN)
                    .map(|_| AUTHTYPE_BEARER_TOKEN.to_string())
            })
            .ok_or_else(|| {
                DirectLinkError::Config(format!(
                    "no authentication configured for service '{}' (set {}{})",
                    self.service_name,
                    env_prefix(&self.service_name),
                    external::PROP_AUTH_TYPE
                ))
            })?;

        let authenticator: Arc<dyn Authenticator> = match auth_type.as_str() {
            AUTHTYPE_NOAUTH => Arc::new(NoAuthAuthenticator),
            AUTHTYPE_BEARER_TOKEN => Arc::new(BearerTokenAuthenticator::new(
                self.get(external::PROP_BEARER_TOKEN).unwrap_or_default(),
            )),
            AUTHTYPE_BASIC => Arc::new(BasicAuthenticator::new(
                self.get(external::PROP_USERNAME).unwrap_or_default(),
                self.get(external::PROP_PASSWORD).unwrap_or_default(),
            )),
            other => {
                return Err(DirectLinkError::Config(format!(
                    "unsupported authentication type '{}'",
                    other
                )))
            }
        };
        authenticator.validate()?;
        Ok(authenticator)
    }
}

const ALL_PROPERTIES: [&str; 9] = [
    external::PROP_URL,
    external::PROP_AUTH_TYPE,
    external::PROP_BEARER_TOKEN,
    external::PROP_USERNAME,
    external::PROP_PASSWORD,
    external::PROP_DISABLE_SSL,
    external::PROP_ENABLE_RETRIES,
    external::PROP_MAX_RETRIES,
    external::PROP_RETRY_INTERVAL,
];

/// `direct-link` -> `DIRECT_LINK_`
fn env_prefix(service_name: &str) -> String {
    format!("{}_", service_name.to_ascii_uppercase().replace('-', "_"))
}

fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}

/// Locate the credentials file: explicit env var, then working dir, then home
fn credentials_file_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(external::CREDENTIALS_FILE_ENV) {
        return Some(PathBuf::from(path));
    }

    let candidates = [
        std::env::current_dir().ok(),
        dirs::home_dir(),
    ];
    candidates
        .into_iter()
        .flatten()
        .map(|dir| dir.join(external::CREDENTIALS_FILE_NAME))
        .find(|p| p.is_file())
}

/// Parse `KEY=VALUE` lines, keeping the keys that belong to `prefix`
fn read_credentials_file(path: &Path, prefix: &str) -> Result<HashMap<String, String>> {
    let content = fs::read_to_string(path).map_err(|e| {
        DirectLinkError::Credentials(format!(
            "Could not read credentials file {}: {}",
            path.display(),
            e
        ))
    })?;

    let mut values = HashMap::new();
    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (key, value) = line.split_once('=').ok_or_else(|| {
            DirectLinkError::Credentials(format!(
                "Could not parse credentials file {} (line {}): expected KEY=VALUE",
                path.display(),
                lineno + 1
            ))
        })?;
        if let Some(suffix) = key.trim().strip_prefix(prefix) {
            let value = value.trim().trim_matches('"');
            values.insert(suffix.to_string(), value.to_string());
        }
    }
    Ok(values)
}
