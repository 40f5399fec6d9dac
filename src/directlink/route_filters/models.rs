//! Route filter data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::api;
use crate::sdk::AsPatch;

/// Route filter `action` values
pub mod route_filter_action {
    pub const PERMIT: &str = "permit";
    pub const DENY: &str = "deny";
}

/// Which side of the BGP session a filter applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteFilterKind {
    /// Routes advertised by IBM to the customer
    Export,
    /// Routes learned from the customer
    Import,
}

impl RouteFilterKind {
    /// Collection path segment and JSON key
    pub fn collection(&self) -> &'static str {
        match self {
            RouteFilterKind::Export => api::EXPORT_ROUTE_FILTERS,
            RouteFilterKind::Import => api::IMPORT_ROUTE_FILTERS,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RouteFilterKind::Export => "export",
            RouteFilterKind::Import => "import",
        }
    }
}

/// A permit/deny rule on a BGP prefix
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RouteFilter {
    pub id: String,
    pub action: String,
    /// ID of the filter this one is evaluated before; last when unset
    pub before: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub ge: Option<u32>,
    pub le: Option<u32>,
    pub prefix: String,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Ordered filters of one kind, with the ETag used to replace them
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RouteFilterCollection {
    #[serde(alias = "export_route_filters", alias = "import_route_filters")]
    pub route_filters: Vec<RouteFilter>,
    #[serde(skip)]
    pub etag: Option<String>,
}

/// A new filter, for create and replace
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RouteFilterTemplate {
    pub action: String,
    pub prefix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ge: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub le: Option<u32>,
}

impl RouteFilterTemplate {
    pub fn new(action: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            prefix: prefix.into(),
            before: None,
            ge: None,
            le: None,
        }
    }

    pub fn with_before(mut self, before: impl Into<String>) -> Self {
        self.before = Some(before.into());
        self
    }

    pub fn with_range(mut self, ge: Option<u32>, le: Option<u32>) -> Self {
        self.ge = ge;
        self.le = le;
        self
    }
}

/// Sparse route filter update
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct UpdateRouteFilterTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ge: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub le: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl AsPatch for UpdateRouteFilterTemplate {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_accepts_both_keys() {
        let export: RouteFilterCollection = serde_json::from_value(serde_json::json!({
            "export_route_filters": [{"id": "rf-1", "action": "permit", "prefix": "10.0.0.0/16"}]
        }))
        .unwrap();
        assert_eq!(export.route_filters[0].id, "rf-1");
        assert!(export.etag.is_none());

        let import: RouteFilterCollection = serde_json::from_value(serde_json::json!({
            "import_route_filters": [{"id": "rf-2", "action": "deny", "prefix": "0.0.0.0/0", "le": 32}]
        }))
        .unwrap();
        assert_eq!(import.route_filters[0].le, Some(32));
    }

    #[test]
    fn test_template_serialization() {
        let template = RouteFilterTemplate::new(route_filter_action::PERMIT, "192.168.100.0/24")
            .with_range(Some(25), Some(30));
        assert_eq!(
            serde_json::to_value(&template).unwrap(),
            serde_json::json!({
                "action": "permit",
                "prefix": "192.168.100.0/24",
                "ge": 25,
                "le": 30
            })
        );
    }

    #[test]
    fn test_kind_collection_names() {
        assert_eq!(RouteFilterKind::Export.collection(), "export_route_filters");
        assert_eq!(RouteFilterKind::Import.collection(), "import_route_filters");
    }
}
