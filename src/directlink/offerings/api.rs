//! Offering API operations

use crate::config::api;
use crate::directlink::client::{require, segment, DirectLinkV1};
use crate::error::Result;

use super::models::{
    LocationCollection, LocationCrossConnectRouterCollection, OfferingSpeedCollection,
};
use super::options::*;

impl DirectLinkV1 {
    /// List locations where an offering type can be ordered
    pub async fn list_offering_type_locations(
        &self,
        options: &ListOfferingTypeLocationsOptions,
    ) -> Result<LocationCollection> {
        require("offering_type", &options.offering_type)?;
        let url = self.url(
            &format!(
                "/{}/{}/locations",
                api::OFFERING_TYPES,
                segment(&options.offering_type)
            ),
            &[],
        )?;
        self.get_json(&url, &options.headers).await
    }

    /// List cross connect routers at a location
    pub async fn list_offering_type_location_cross_connect_routers(
        &self,
        options: &ListOfferingTypeLocationCrossConnectRoutersOptions,
    ) -> Result<LocationCrossConnectRouterCollection> {
        require("offering_type", &options.offering_type)?;
        require("location_name", &options.location_name)?;
        let url = self.url(
            &format!(
                "/{}/{}/locations/{}/cross_connect_routers",
                api::OFFERING_TYPES,
                segment(&options.offering_type),
                segment(&options.location_name)
            ),
            &[],
        )?;
        self.get_json(&url, &options.headers).await
    }

    /// List available link speeds for an offering type
    pub async fn list_offering_type_speeds(
        &self,
        options: &ListOfferingTypeSpeedsOptions,
    ) -> Result<OfferingSpeedCollection> {
        require("offering_type", &options.offering_type)?;
        let url = self.url(
            &format!(
                "/{}/{}/speeds",
                api::OFFERING_TYPES,
                segment(&options.offering_type)
            ),
            &[],
        )?;
        self.get_json(&url, &options.headers).await
    }
}
