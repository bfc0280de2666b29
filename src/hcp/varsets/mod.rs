//! Variable sets - reusable groups of variables

mod api;
mod commands;
mod models;

pub use commands::run_varset_command;
pub use models::{
    VariableSet, VariableSetAttributes, VariableSetCreateOptions, VariableSetUpdateOptions,
};
