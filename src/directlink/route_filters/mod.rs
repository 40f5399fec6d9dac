//! Export and import route filters on a gateway's BGP session

mod api;
pub mod commands;
pub mod models;
pub mod options;

pub use models::{
    route_filter_action, RouteFilter, RouteFilterCollection, RouteFilterKind,
    RouteFilterTemplate, UpdateRouteFilterTemplate,
};
pub use options::*;
pub use commands::{run_delete_route_filter_command, run_route_filter_command};
