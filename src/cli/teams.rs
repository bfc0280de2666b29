//! Team command definitions and arguments

use clap::{Args, Subcommand, ValueEnum};

use super::common::{DeleteArgs, ListArgs, ReadArgs, TargetArgs};

/// Actions for the 'team' command
#[derive(Subcommand, Debug)]
pub enum TeamAction {
    /// Create a team
    Create(TeamCreateArgs),

    /// Show one team
    Read(ReadArgs),

    /// List teams in the organization
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Rename a team or change its visibility
    Update(TeamUpdateArgs),

    /// Delete a team
    Delete(DeleteArgs),
}

/// Team visibility options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TeamVisibility {
    /// Visible only to members and owners
    Secret,
    /// Visible to every member of the organization
    Organization,
}

impl std::fmt::Display for TeamVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamVisibility::Secret => write!(f, "secret"),
            TeamVisibility::Organization => write!(f, "organization"),
        }
    }
}

/// Arguments for 'team create'
#[derive(Args, Debug)]
pub struct TeamCreateArgs {
    /// Name of the new team
    #[arg(long)]
    pub name: String,

    /// Team visibility
    #[arg(long, value_enum)]
    pub visibility: Option<TeamVisibility>,
}

/// Arguments for 'team update'
#[derive(Args, Debug)]
pub struct TeamUpdateArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// New name
    #[arg(long)]
    pub new_name: Option<String>,

    /// Team visibility
    #[arg(long, value_enum)]
    pub visibility: Option<TeamVisibility>,
}
