//! Common CLI types shared across commands

use clap::{Args, ValueEnum};

use crate::error::{Result, TfeError};
use crate::hcp::Identifier;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table (default)
    Table,
    /// Comma-separated values
    Csv,
    /// JSON array
    Json,
    /// YAML format
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// `--name` / `--id` pair identifying the resource a command acts on
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Resource name (exact, case-sensitive)
    #[arg(long)]
    pub name: Option<String>,

    /// Resource ID (takes precedence over --name)
    #[arg(long)]
    pub id: Option<String>,
}

impl TargetArgs {
    pub fn identifier(&self) -> Result<Identifier> {
        Identifier::from_args(self.name.as_deref(), self.id.as_deref())
    }
}

/// Agent pool selected with `--pool-name` / `--pool-id`
#[derive(Args, Debug, Clone, Default)]
pub struct PoolTarget {
    /// Agent pool name
    #[arg(id = "pool_name", long = "pool-name")]
    pub name: Option<String>,

    /// Agent pool ID (apool-xxx, takes precedence over --pool-name)
    #[arg(id = "pool_id", long = "pool-id")]
    pub id: Option<String>,
}

impl PoolTarget {
    pub fn identifier(&self) -> Result<Identifier> {
        Identifier::from_args(self.name.as_deref(), self.id.as_deref()).map_err(|_| {
            TfeError::InputContract("Please provide either --pool-name or --pool-id".to_string())
        })
    }
}

/// Project selected with `--project-name` / `--project-id`
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectTarget {
    /// Project name
    #[arg(id = "project_name", long = "project-name")]
    pub name: Option<String>,

    /// Project ID (prj-xxx, takes precedence over --project-name)
    #[arg(id = "project_id", long = "project-id")]
    pub id: Option<String>,
}

impl ProjectTarget {
    pub fn identifier(&self) -> Result<Identifier> {
        Identifier::from_args(self.name.as_deref(), self.id.as_deref()).map_err(|_| {
            TfeError::InputContract("Please provide either --project-name or --project-id".to_string())
        })
    }

    /// Identifier when either flag was given, `None` when both are absent
    pub fn optional_identifier(&self) -> Option<Identifier> {
        Identifier::from_args(self.name.as_deref(), self.id.as_deref()).ok()
    }
}

/// Policy set selected with `--policy-set-name` / `--policy-set-id`
#[derive(Args, Debug, Clone, Default)]
pub struct PolicySetTarget {
    /// Policy set name
    #[arg(id = "policy_set_name", long = "policy-set-name")]
    pub name: Option<String>,

    /// Policy set ID (polset-xxx, takes precedence over --policy-set-name)
    #[arg(id = "policy_set_id", long = "policy-set-id")]
    pub id: Option<String>,
}

impl PolicySetTarget {
    pub fn identifier(&self) -> Result<Identifier> {
        Identifier::from_args(self.name.as_deref(), self.id.as_deref()).map_err(|_| {
            TfeError::InputContract("Please provide either --policy-set-name or --policy-set-id".to_string())
        })
    }
}

/// Workspace selected with `--workspace-name` / `--workspace-id`
#[derive(Args, Debug, Clone, Default)]
pub struct WorkspaceTarget {
    /// Workspace name
    #[arg(id = "workspace_name", long = "workspace-name")]
    pub name: Option<String>,

    /// Workspace ID (ws-xxx, takes precedence over --workspace-name)
    #[arg(id = "workspace_id", long = "workspace-id")]
    pub id: Option<String>,
}

impl WorkspaceTarget {
    pub fn identifier(&self) -> Result<Identifier> {
        Identifier::from_args(self.name.as_deref(), self.id.as_deref()).map_err(|_| {
            TfeError::InputContract("Please provide either --workspace-name or --workspace-id".to_string())
        })
    }
}

/// Variable set selected with `--varset-name` / `--varset-id`
#[derive(Args, Debug, Clone, Default)]
pub struct VarsetTarget {
    /// Variable set name
    #[arg(id = "varset_name", long = "varset-name")]
    pub name: Option<String>,

    /// Variable set ID (varset-xxx, takes precedence over --varset-name)
    #[arg(id = "varset_id", long = "varset-id")]
    pub id: Option<String>,
}

impl VarsetTarget {
    pub fn identifier(&self) -> Result<Identifier> {
        Identifier::from_args(self.name.as_deref(), self.id.as_deref()).map_err(|_| {
            TfeError::InputContract("Please provide either --varset-name or --varset-id".to_string())
        })
    }
}

/// Variable selected with `--key` / `--id`
#[derive(Args, Debug, Clone, Default)]
pub struct VariableTarget {
    /// Variable key
    #[arg(id = "variable_key", long = "key")]
    pub key: Option<String>,

    /// Variable ID (var-xxx, takes precedence over --key)
    #[arg(id = "variable_id", long = "id")]
    pub id: Option<String>,
}

impl VariableTarget {
    pub fn identifier(&self) -> Result<Identifier> {
        Identifier::from_args(self.key.as_deref(), self.id.as_deref()).map_err(|_| {
            TfeError::InputContract("Please provide either --key or --id".to_string())
        })
    }
}

/// Arguments for 'read' subcommands
#[derive(Args, Debug)]
pub struct ReadArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'list' subcommands
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'delete' subcommands
#[derive(Args, Debug)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Yaml.to_string(), "yaml");
    }

    #[test]
    fn test_target_args_requires_name_or_id() {
        let err = TargetArgs::default().identifier().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputContract);
    }

    #[test]
    fn test_prefixed_target_names_its_flags() {
        let err = PoolTarget::default().identifier().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputContract);
        assert!(err.to_string().contains("--pool-name"));
        assert!(err.to_string().contains("--pool-id"));
    }

    #[test]
    fn test_optional_project_target() {
        assert_eq!(ProjectTarget::default().optional_identifier(), None);
        let target = ProjectTarget {
            name: Some("prj-named".to_string()),
            id: None,
        };
        assert_eq!(
            target.optional_identifier(),
            Some(Identifier::Name("prj-named".to_string()))
        );
    }

    #[test]
    fn test_variable_target_uses_key() {
        let target = VariableTarget {
            key: Some("region".to_string()),
            id: None,
        };
        assert_eq!(
            target.identifier().unwrap(),
            Identifier::Name("region".to_string())
        );
    }

    #[test]
    fn test_target_args_prefers_id() {
        let args = TargetArgs {
            name: Some("prod".to_string()),
            id: Some("ws-1".to_string()),
        };
        assert_eq!(args.identifier().unwrap(), Identifier::Id("ws-1".to_string()));
    }
}
