//! Agent tokens - credentials agents use to join a pool

mod api;
mod commands;
mod models;

pub use commands::run_agent_token_command;
pub use models::{AgentToken, AgentTokenAttributes, AgentTokenCreateOptions};
