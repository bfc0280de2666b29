//! Projects - group workspaces within an organization

mod api;
mod commands;
mod models;

pub use commands::run_project_command;
pub use models::{Project, ProjectAttributes, ProjectCreateOptions, ProjectUpdateOptions};
