//! Project command definitions and arguments

use clap::{Args, Subcommand};

use super::common::{DeleteArgs, ListArgs, ReadArgs, TargetArgs};

/// Actions for the 'project' command
#[derive(Subcommand, Debug)]
pub enum ProjectAction {
    /// Create a project
    Create(ProjectCreateArgs),

    /// Show one project
    Read(ReadArgs),

    /// List projects in the organization
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Rename a project or change its description
    Update(ProjectUpdateArgs),

    /// Delete a project (it must contain no workspaces)
    Delete(DeleteArgs),
}

/// Arguments for 'project create'
#[derive(Args, Debug)]
pub struct ProjectCreateArgs {
    /// Name of the new project
    #[arg(long)]
    pub name: String,

    /// Description
    #[arg(long)]
    pub description: Option<String>,
}

/// Arguments for 'project update'
#[derive(Args, Debug)]
pub struct ProjectUpdateArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// New name
    #[arg(long)]
    pub new_name: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,
}
