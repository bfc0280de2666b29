//! Policy sets - CRUD and policy/project/workspace membership

mod api;
mod commands;
mod models;

pub use commands::run_policy_set_command;
pub use models::{
    Policy, PolicyAttributes, PolicySet, PolicySetAttributes, PolicySetCreateOptions,
    PolicySetUpdateOptions,
};
