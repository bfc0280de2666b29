//! Policy set command definitions and arguments

use clap::{Args, Subcommand};

use super::common::{DeleteArgs, ListArgs, PolicySetTarget, ReadArgs, TargetArgs};

/// Actions for the 'policy-set' command
#[derive(Subcommand, Debug)]
pub enum PolicySetAction {
    /// Create a policy set
    Create(PolicySetCreateArgs),

    /// Show one policy set
    Read(ReadArgs),

    /// List policy sets in the organization
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Change a policy set's name, description or scope
    Update(PolicySetUpdateArgs),

    /// Delete a policy set
    Delete(DeleteArgs),

    /// List policies in the organization (to find policy IDs)
    ListPolicies(ListArgs),

    /// Add policies to a policy set
    AddPolicies(PolicySetPoliciesArgs),

    /// Remove policies from a policy set
    RemovePolicies(PolicySetPoliciesArgs),

    /// Attach a policy set to workspaces
    AddWorkspaces(PolicySetWorkspacesArgs),

    /// Detach a policy set from workspaces
    RemoveWorkspaces(PolicySetWorkspacesArgs),

    /// Attach a policy set to projects
    AddProjects(PolicySetProjectsArgs),

    /// Detach a policy set from projects
    RemoveProjects(PolicySetProjectsArgs),
}

/// Arguments for 'policy-set create'
#[derive(Args, Debug)]
pub struct PolicySetCreateArgs {
    /// Name of the new policy set
    #[arg(long)]
    pub name: String,

    /// Description
    #[arg(long)]
    pub description: Option<String>,

    /// Apply the policy set to every workspace in the organization
    #[arg(long, default_value_t = false)]
    pub global: bool,
}

/// Arguments for 'policy-set update'
#[derive(Args, Debug)]
pub struct PolicySetUpdateArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// New name
    #[arg(long)]
    pub new_name: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// Apply the policy set to every workspace in the organization
    #[arg(long)]
    pub global: Option<bool>,
}

/// Arguments for 'policy-set add-policies' / 'remove-policies'
#[derive(Args, Debug)]
pub struct PolicySetPoliciesArgs {
    #[command(flatten)]
    pub policy_set: PolicySetTarget,

    /// Policy ID (repeatable)
    #[arg(long = "policy-id", value_name = "POLICY_ID")]
    pub policy_ids: Vec<String>,

    /// Skip confirmation prompt (removal only)
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'policy-set add-workspaces' / 'remove-workspaces'
#[derive(Args, Debug)]
pub struct PolicySetWorkspacesArgs {
    #[command(flatten)]
    pub policy_set: PolicySetTarget,

    /// Workspace ID (repeatable)
    #[arg(long = "workspace-id", value_name = "WORKSPACE_ID")]
    pub workspace_ids: Vec<String>,

    /// Skip confirmation prompt (removal only)
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'policy-set add-projects' / 'remove-projects'
#[derive(Args, Debug)]
pub struct PolicySetProjectsArgs {
    #[command(flatten)]
    pub policy_set: PolicySetTarget,

    /// Project ID (repeatable)
    #[arg(long = "project-id", value_name = "PROJECT_ID")]
    pub project_ids: Vec<String>,

    /// Skip confirmation prompt (removal only)
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
