//! Workspaces

mod api;
mod commands;
mod models;

pub use commands::run_workspace_command;
pub use models::{
    Workspace, WorkspaceAttributes, WorkspaceCreateOptions, WorkspaceRelationships,
    WorkspaceUpdateOptions,
};
