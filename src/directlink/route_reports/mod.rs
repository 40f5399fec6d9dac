//! On-demand route reports for a gateway

mod api;
pub mod commands;
pub mod models;
pub mod options;

pub use models::{
    route_report_status, RouteReport, RouteReportAdvertisedRoute, RouteReportCollection,
    RouteReportConnection, RouteReportConnectionRoute, RouteReportOnPremRoute,
    RouteReportOverlappingRoute, RouteReportOverlappingRouteGroup, RouteReportRoute,
};
pub use options::*;
pub use commands::{
    run_create_route_report_command, run_delete_route_report_command, run_route_report_command,
};
