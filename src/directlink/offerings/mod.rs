//! Offerings: where and at which speeds gateways can be ordered

mod api;
pub mod commands;
pub mod models;
pub mod options;

pub use models::{
    offering_type, LocationCollection, LocationCrossConnectRouter,
    LocationCrossConnectRouterCollection, LocationOutput, OfferingSpeed, OfferingSpeedCollection,
};
pub use options::*;
pub use commands::{run_location_command, run_router_command, run_speed_command};
