//! IBM Cloud Direct Link API client
//!
//! [`DirectLinkV1`] is extended per resource in the submodules; each one
//! carries its models, per-call options and operations.

/// Adds `with_header`/`with_headers` to option structs with a `headers` map
macro_rules! impl_custom_headers {
    ($($options:ty),+ $(,)?) => {
        $(
            impl $options {
                /// Add a header sent with this call only
                pub fn with_header(
                    mut self,
                    name: impl Into<String>,
                    value: impl Into<String>,
                ) -> Self {
                    self.headers.insert(name.into(), value.into());
                    self
                }

                /// Replace the per-call headers
                pub fn with_headers(
                    mut self,
                    headers: ::std::collections::HashMap<String, String>,
                ) -> Self {
                    self.headers = headers;
                    self
                }
            }
        )+
    };
}

pub mod as_prepends;
mod client;
pub mod commands;
pub mod gateways;
pub mod offerings;
pub mod ports;
pub mod route_filters;
pub mod route_reports;
pub mod traits;
pub mod virtual_connections;

pub use as_prepends::{AsPrepend, AsPrependCollection, AsPrependTemplate};
pub use client::{DirectLinkV1, DirectLinkV1Options};
pub use commands::CommandResult;
pub use gateways::{Gateway, GatewayCollection, GatewayTemplate, GatewayTemplateCommon};
pub use offerings::{LocationOutput, LocationCrossConnectRouter, OfferingSpeed};
pub use ports::{Port, PortCollection, PortsPager};
pub use route_filters::{RouteFilter, RouteFilterCollection, RouteFilterKind};
pub use route_reports::{RouteReport, RouteReportCollection};
pub use traits::{find_resource, DirectLinkResource};
pub use virtual_connections::{GatewayVirtualConnection, GatewayVirtualConnectionCollection};
