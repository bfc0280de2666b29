//! Variable command definitions and arguments
//!
//! The value fields are shared by workspace variables and the `var-*`
//! actions of variable sets.

use clap::{Args, Subcommand, ValueEnum};

use super::common::{OutputFormat, VariableTarget, WorkspaceTarget};

/// Actions for the 'variable' command (workspace variables)
#[derive(Subcommand, Debug)]
pub enum VariableAction {
    /// Create a workspace variable
    Create(WorkspaceVariableCreateArgs),

    /// Show one workspace variable
    Read(WorkspaceVariableReadArgs),

    /// List variables of a workspace
    #[command(visible_alias = "ls")]
    List(WorkspaceVariableListArgs),

    /// Update a workspace variable
    Update(WorkspaceVariableUpdateArgs),

    /// Delete a workspace variable
    Delete(WorkspaceVariableDeleteArgs),
}

/// Variable category options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum CategoryArg {
    /// Terraform input variable (default)
    #[default]
    Terraform,
    /// Environment variable
    Env,
}

/// Fields for a new variable
#[derive(Args, Debug)]
pub struct VariableFields {
    /// Variable key
    #[arg(long)]
    pub key: String,

    /// Variable value
    #[arg(long, default_value = "")]
    pub value: String,

    /// Description
    #[arg(long)]
    pub description: Option<String>,

    /// Variable category
    #[arg(long, value_enum, default_value_t = CategoryArg::Terraform)]
    pub category: CategoryArg,

    /// Mark the variable as sensitive (write-only)
    #[arg(long, default_value_t = false)]
    pub sensitive: bool,

    /// Parse the value as HCL
    #[arg(long, default_value_t = false)]
    pub hcl: bool,
}

/// Fields that can change on an existing variable
#[derive(Args, Debug)]
pub struct VariableChanges {
    /// New key
    #[arg(long)]
    pub new_key: Option<String>,

    /// New value
    #[arg(long)]
    pub value: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// Mark the variable as sensitive (cannot be undone)
    #[arg(long)]
    pub sensitive: Option<bool>,

    /// Parse the value as HCL
    #[arg(long)]
    pub hcl: Option<bool>,
}

/// Arguments for 'variable create'
#[derive(Args, Debug)]
pub struct WorkspaceVariableCreateArgs {
    #[command(flatten)]
    pub workspace: WorkspaceTarget,

    #[command(flatten)]
    pub fields: VariableFields,
}

/// Arguments for 'variable read'
#[derive(Args, Debug)]
pub struct WorkspaceVariableReadArgs {
    #[command(flatten)]
    pub workspace: WorkspaceTarget,

    #[command(flatten)]
    pub variable: VariableTarget,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'variable list'
#[derive(Args, Debug)]
pub struct WorkspaceVariableListArgs {
    #[command(flatten)]
    pub workspace: WorkspaceTarget,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'variable update'
#[derive(Args, Debug)]
pub struct WorkspaceVariableUpdateArgs {
    #[command(flatten)]
    pub workspace: WorkspaceTarget,

    #[command(flatten)]
    pub variable: VariableTarget,

    #[command(flatten)]
    pub changes: VariableChanges,
}

/// Arguments for 'variable delete'
#[derive(Args, Debug)]
pub struct WorkspaceVariableDeleteArgs {
    #[command(flatten)]
    pub workspace: WorkspaceTarget,

    #[command(flatten)]
    pub variable: VariableTarget,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
