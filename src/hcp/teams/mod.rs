//! Teams - organization user groups

mod api;
mod commands;
mod models;

pub use commands::run_team_command;
pub use models::{Team, TeamAttributes, TeamCreateOptions, TeamUpdateOptions};
