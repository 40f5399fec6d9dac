//! Provider ports for connect gateways

mod api;
pub mod commands;
pub mod models;
pub mod options;
mod pager;

pub use models::{Port, PortCollection};
pub use options::{GetPortOptions, ListPortsOptions};
pub use pager::PortsPager;
pub use commands::run_port_command;
