//! Variable set command definitions and arguments

use clap::{Args, Subcommand};

use super::common::{
    DeleteArgs, ListArgs, OutputFormat, ReadArgs, TargetArgs, VariableTarget, VarsetTarget,
};
use super::variables::{VariableChanges, VariableFields};

/// Actions for the 'varset' command
#[derive(Subcommand, Debug)]
pub enum VarsetAction {
    /// Create a variable set
    Create(VarsetCreateArgs),

    /// Show one variable set
    Read(ReadArgs),

    /// List variable sets in the organization
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Change a variable set's name, description or scope
    Update(VarsetUpdateArgs),

    /// Delete a variable set
    Delete(DeleteArgs),

    /// Create a variable in a variable set
    VarCreate(VarsetVariableCreateArgs),

    /// Show one variable of a variable set
    VarRead(VarsetVariableReadArgs),

    /// List variables of a variable set
    VarList(VarsetVariableListArgs),

    /// Update a variable in a variable set
    VarUpdate(VarsetVariableUpdateArgs),

    /// Delete a variable from a variable set
    VarDelete(VarsetVariableDeleteArgs),
}

/// Arguments for 'varset create'
#[derive(Args, Debug)]
pub struct VarsetCreateArgs {
    /// Name of the new variable set
    #[arg(long)]
    pub name: String,

    /// Description
    #[arg(long)]
    pub description: Option<String>,

    /// Apply the variable set to every workspace in the organization
    #[arg(long, default_value_t = false)]
    pub global: bool,
}

/// Arguments for 'varset update'
#[derive(Args, Debug)]
pub struct VarsetUpdateArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// New name
    #[arg(long)]
    pub new_name: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// Apply the variable set to every workspace in the organization
    #[arg(long)]
    pub global: Option<bool>,
}

/// Arguments for 'varset var-create'
#[derive(Args, Debug)]
pub struct VarsetVariableCreateArgs {
    #[command(flatten)]
    pub varset: VarsetTarget,

    #[command(flatten)]
    pub fields: VariableFields,
}

/// Arguments for 'varset var-read'
#[derive(Args, Debug)]
pub struct VarsetVariableReadArgs {
    #[command(flatten)]
    pub varset: VarsetTarget,

    #[command(flatten)]
    pub variable: VariableTarget,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'varset var-list'
#[derive(Args, Debug)]
pub struct VarsetVariableListArgs {
    #[command(flatten)]
    pub varset: VarsetTarget,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'varset var-update'
#[derive(Args, Debug)]
pub struct VarsetVariableUpdateArgs {
    #[command(flatten)]
    pub varset: VarsetTarget,

    #[command(flatten)]
    pub variable: VariableTarget,

    #[command(flatten)]
    pub changes: VariableChanges,
}

/// Arguments for 'varset var-delete'
#[derive(Args, Debug)]
pub struct VarsetVariableDeleteArgs {
    #[command(flatten)]
    pub varset: VarsetTarget,

    #[command(flatten)]
    pub variable: VariableTarget,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
