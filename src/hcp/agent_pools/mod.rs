//! Agent pools - CRUD and workspace assignment

mod api;
mod commands;
mod models;

pub use commands::run_agent_pool_command;
pub use models::{AgentPool, AgentPoolAttributes, AgentPoolCreateOptions, AgentPoolUpdateOptions};
