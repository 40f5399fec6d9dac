//! Per-call options for port operations

use std::collections::HashMap;

/// Options for `list_ports`
#[derive(Debug, Clone, Default)]
pub struct ListPortsOptions {
    /// Page cursor from a previous `next` link
    pub start: Option<String>,
    /// Page size, 1..=100
    pub limit: Option<u32>,
    pub location_name: Option<String>,
    pub headers: HashMap<String, String>,
}

impl ListPortsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_location_name(mut self, location_name: impl Into<String>) -> Self {
        self.location_name = Some(location_name.into());
        self
    }
}

/// Options for `get_port`
#[derive(Debug, Clone)]
pub struct GetPortOptions {
    pub id: String,
    pub headers: HashMap<String, String>,
}

impl GetPortOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            headers: HashMap::new(),
        }
    }
}

impl_custom_headers!(ListPortsOptions, GetPortOptions);
