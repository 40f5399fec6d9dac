//! AS prepend data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// AS prepend `policy` values
pub mod as_prepend_policy {
    pub const IMPORT: &str = "import";
    pub const EXPORT: &str = "export";
}

/// Allowed prepend lengths
pub const MIN_LENGTH: u32 = 3;
pub const MAX_LENGTH: u32 = 10;

/// Repeats the gateway ASN on matching routes to make them less preferred
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AsPrepend {
    pub id: String,
    pub length: u32,
    pub policy: String,
    pub prefix: Option<String>,
    pub specific_prefixes: Option<Vec<String>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl AsPrepend {
    /// Prefixes the prepend applies to; empty means all
    pub fn prefixes(&self) -> Vec<String> {
        match (&self.specific_prefixes, &self.prefix) {
            (Some(list), _) if !list.is_empty() => list.clone(),
            (_, Some(prefix)) => vec![prefix.clone()],
            _ => Vec::new(),
        }
    }
}

/// All AS prepends of a gateway with the ETag used to replace them
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AsPrependCollection {
    #[serde(default)]
    pub as_prepends: Vec<AsPrepend>,
    #[serde(skip)]
    pub etag: Option<String>,
}

/// A new AS prepend, for replace and gateway create
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AsPrependTemplate {
    pub length: u32,
    pub policy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_prefixes: Option<Vec<String>>,
}

impl AsPrependTemplate {
    pub fn new(length: u32, policy: impl Into<String>) -> Self {
        Self {
            length,
            policy: policy.into(),
            prefix: None,
            specific_prefixes: None,
        }
    }

    pub fn with_specific_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.specific_prefixes = Some(prefixes);
        self
    }
}
