//! Agent pool command definitions and arguments

use clap::{Args, Subcommand};

use super::common::{
    DeleteArgs, ListArgs, PoolTarget, ProjectTarget, ReadArgs, TargetArgs,
};

/// Actions for the 'agent-pool' command
#[derive(Subcommand, Debug)]
pub enum AgentPoolAction {
    /// Create an agent pool
    Create(AgentPoolCreateArgs),

    /// Show one agent pool
    Read(ReadArgs),

    /// List agent pools in the organization
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Rename an agent pool or change its scope
    Update(AgentPoolUpdateArgs),

    /// Delete an agent pool
    Delete(DeleteArgs),

    /// Allow the pool for every workspace in a project
    AssignToProject(PoolProjectArgs),

    /// Revoke the pool from every workspace in a project
    RemoveFromProject(PoolProjectArgs),

    /// Allow the pool for specific workspaces
    AssignWorkspaces(PoolWorkspacesArgs),

    /// Revoke the pool from specific workspaces
    RemoveWorkspaces(PoolWorkspacesArgs),
}

/// Arguments for 'agent-pool create'
#[derive(Args, Debug)]
pub struct AgentPoolCreateArgs {
    /// Name of the new agent pool
    #[arg(long)]
    pub name: String,

    /// Whether every workspace in the organization may use the pool
    #[arg(long)]
    pub organization_scoped: Option<bool>,
}

/// Arguments for 'agent-pool update'
#[derive(Args, Debug)]
pub struct AgentPoolUpdateArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// New name for the agent pool
    #[arg(long)]
    pub new_name: Option<String>,

    /// Whether every workspace in the organization may use the pool
    #[arg(long)]
    pub organization_scoped: Option<bool>,
}

/// Arguments for 'agent-pool assign-to-project' / 'remove-from-project'
#[derive(Args, Debug)]
pub struct PoolProjectArgs {
    #[command(flatten)]
    pub pool: PoolTarget,

    #[command(flatten)]
    pub project: ProjectTarget,

    /// Skip confirmation prompt (removal only)
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'agent-pool assign-workspaces' / 'remove-workspaces'
#[derive(Args, Debug)]
pub struct PoolWorkspacesArgs {
    #[command(flatten)]
    pub pool: PoolTarget,

    /// Workspace ID (repeatable)
    #[arg(long = "workspace-id", value_name = "WORKSPACE_ID")]
    pub workspace_ids: Vec<String>,

    /// Skip confirmation prompt (removal only)
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
