//! Agent token command definitions and arguments

use clap::{Args, Subcommand};

use super::common::{OutputFormat, PoolTarget};

/// Actions for the 'agent-token' command
#[derive(Subcommand, Debug)]
pub enum AgentTokenAction {
    /// Create a token in an agent pool (the secret is shown once)
    Create(AgentTokenCreateArgs),

    /// Show one agent token
    Read(AgentTokenReadArgs),

    /// List tokens of an agent pool
    #[command(visible_alias = "ls")]
    List(AgentTokenListArgs),

    /// Delete an agent token
    Delete(AgentTokenDeleteArgs),
}

/// Arguments for 'agent-token create'
#[derive(Args, Debug)]
pub struct AgentTokenCreateArgs {
    #[command(flatten)]
    pub pool: PoolTarget,

    /// Token description
    #[arg(long)]
    pub description: Option<String>,
}

/// Arguments for 'agent-token read'
#[derive(Args, Debug)]
pub struct AgentTokenReadArgs {
    /// Agent token ID (at-xxx)
    #[arg(long)]
    pub id: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'agent-token list'
#[derive(Args, Debug)]
pub struct AgentTokenListArgs {
    #[command(flatten)]
    pub pool: PoolTarget,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'agent-token delete'
#[derive(Args, Debug)]
pub struct AgentTokenDeleteArgs {
    /// Agent token ID (at-xxx)
    #[arg(long)]
    pub id: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
