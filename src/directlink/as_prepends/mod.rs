//! AS path prepending on a gateway's BGP session

mod api;
pub mod commands;
pub mod models;
pub mod options;

pub use models::{
    as_prepend_policy, AsPrepend, AsPrependCollection, AsPrependTemplate, MAX_LENGTH, MIN_LENGTH,
};
pub use options::*;
pub use commands::run_as_prepend_command;
