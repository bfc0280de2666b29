//! Workspace command definitions and arguments

use clap::{Args, Subcommand};

use super::common::{DeleteArgs, OutputFormat, ProjectTarget, ReadArgs, TargetArgs};

/// Actions for the 'workspace' command
#[derive(Subcommand, Debug)]
pub enum WorkspaceAction {
    /// Create a workspace
    Create(WorkspaceCreateArgs),

    /// Show one workspace
    Read(ReadArgs),

    /// List workspaces in the organization or one project
    #[command(visible_alias = "ls")]
    List(WorkspaceListArgs),

    /// Rename a workspace or change its description
    Update(WorkspaceUpdateArgs),

    /// Delete a workspace
    Delete(DeleteArgs),
}

/// Arguments for 'workspace create'
#[derive(Args, Debug)]
pub struct WorkspaceCreateArgs {
    /// Name of the new workspace
    #[arg(long)]
    pub name: String,

    /// Project for the workspace; the default project when omitted
    #[command(flatten)]
    pub project: ProjectTarget,

    /// Description
    #[arg(long)]
    pub description: Option<String>,
}

/// Arguments for 'workspace list'
#[derive(Args, Debug)]
pub struct WorkspaceListArgs {
    /// Only workspaces of this project
    #[command(flatten)]
    pub project: ProjectTarget,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'workspace update'
#[derive(Args, Debug)]
pub struct WorkspaceUpdateArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// New name
    #[arg(long)]
    pub new_name: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,
}
