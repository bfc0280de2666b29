//! Workspace and variable-set variables

mod api;
mod commands;
mod models;
mod record;

pub use commands::{
    create_variable, delete_variable, list_variables, read_variable, run_variable_command,
    update_variable, VariableOwner,
};
pub use models::{
    Variable, VariableAttributes, VariableCategory, VariableCreateOptions, VariableUpdateOptions,
};
pub use record::{render_value, VariableRecord};
