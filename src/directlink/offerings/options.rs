//! Per-call options for offering lookups

use std::collections::HashMap;

/// Options for `list_offering_type_locations`
#[derive(Debug, Clone)]
pub struct ListOfferingTypeLocationsOptions {
    /// `dedicated` or `connect`
    pub offering_type: String,
    pub headers: HashMap<String, String>,
}

impl ListOfferingTypeLocationsOptions {
    pub fn new(offering_type: impl Into<String>) -> Self {
        Self {
            offering_type: offering_type.into(),
            headers: HashMap::new(),
        }
    }
}

/// Options for `list_offering_type_location_cross_connect_routers`
#[derive(Debug, Clone)]
pub struct ListOfferingTypeLocationCrossConnectRoutersOptions {
    pub offering_type: String,
    pub location_name: String,
    pub headers: HashMap<String, String>,
}

impl ListOfferingTypeLocationCrossConnectRoutersOptions {
    pub fn new(offering_type: impl Into<String>, location_name: impl Into<String>) -> Self {
        Self {
            offering_type: offering_type.into(),
            location_name: location_name.into(),
            headers: HashMap::new(),
        }
    }
}

/// Options for `list_offering_type_speeds`
#[derive(Debug, Clone)]
pub struct ListOfferingTypeSpeedsOptions {
    pub offering_type: String,
    pub headers: HashMap<String, String>,
}

impl ListOfferingTypeSpeedsOptions {
    pub fn new(offering_type: impl Into<String>) -> Self {
        Self {
            offering_type: offering_type.into(),
            headers: HashMap::new(),
        }
    }
}

impl_custom_headers!(
    ListOfferingTypeLocationsOptions,
    ListOfferingTypeLocationCrossConnectRoutersOptions,
    ListOfferingTypeSpeedsOptions,
);
