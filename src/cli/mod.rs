//! CLI argument parsing
//!
//! Commands follow `tfectl <resource> <action> [flags]`.

mod agent_pools;
mod agent_tokens;
mod common;
mod policy_sets;
mod projects;
mod teams;
mod variables;
mod varsets;
mod workspaces;

use clap::{Parser, Subcommand};

use crate::config::{defaults, org};
use crate::error::{Result, TfeError};
use crate::hcp::MatchPolicy;

pub use agent_pools::{
    AgentPoolAction, AgentPoolCreateArgs, AgentPoolUpdateArgs, PoolProjectArgs,
    PoolWorkspacesArgs,
};
pub use agent_tokens::{
    AgentTokenAction, AgentTokenCreateArgs, AgentTokenDeleteArgs, AgentTokenListArgs,
    AgentTokenReadArgs,
};
pub use common::{
    DeleteArgs, ListArgs, OutputFormat, PolicySetTarget, PoolTarget, ProjectTarget, ReadArgs,
    TargetArgs, VariableTarget, VarsetTarget, WorkspaceTarget,
};
pub use policy_sets::{
    PolicySetAction, PolicySetCreateArgs, PolicySetPoliciesArgs, PolicySetProjectsArgs,
    PolicySetUpdateArgs, PolicySetWorkspacesArgs,
};
pub use projects::{ProjectAction, ProjectCreateArgs, ProjectUpdateArgs};
pub use teams::{TeamAction, TeamCreateArgs, TeamUpdateArgs, TeamVisibility};
pub use variables::{
    CategoryArg, VariableAction, VariableChanges, VariableFields, WorkspaceVariableCreateArgs,
    WorkspaceVariableDeleteArgs, WorkspaceVariableListArgs, WorkspaceVariableReadArgs,
    WorkspaceVariableUpdateArgs,
};
pub use varsets::{
    VarsetAction, VarsetCreateArgs, VarsetUpdateArgs, VarsetVariableCreateArgs,
    VarsetVariableDeleteArgs, VarsetVariableListArgs, VarsetVariableReadArgs,
    VarsetVariableUpdateArgs,
};
pub use workspaces::{WorkspaceAction, WorkspaceCreateArgs, WorkspaceListArgs, WorkspaceUpdateArgs};

/// Manage HCP Terraform resources and their relationships
#[derive(Parser, Debug)]
#[command(name = "tfectl")]
#[command(version)]
#[command(
    about = "Manage HCP Terraform agent pools, policy sets, projects, teams, variables and workspaces",
    long_about = None
)]
pub struct Cli {
    /// HCP Terraform / TFE host (e.g. app.terraform.io)
    #[arg(short = 'H', long, global = true)]
    pub host: Option<String>,

    /// API token (overrides env vars and credentials file)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// Organization name
    #[arg(long, global = true, env = org::ENV_VAR)]
    pub org: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(
        short,
        long,
        global = true,
        env = defaults::LOG_LEVEL_ENV_VAR,
        default_value = defaults::LOG_LEVEL
    )]
    pub log_level: String,

    /// Non-interactive mode: no spinners, no prompts
    #[arg(long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Omit the header row in table and CSV output
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,

    /// Fail when a name matches more than one object instead of taking the first
    #[arg(long, global = true, default_value_t = false)]
    pub strict_names: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Resource commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage agent pools and their workspace assignments
    #[command(name = "agent-pool")]
    AgentPool {
        #[command(subcommand)]
        action: AgentPoolAction,
    },

    /// Manage agent tokens of an agent pool
    #[command(name = "agent-token")]
    AgentToken {
        #[command(subcommand)]
        action: AgentTokenAction,
    },

    /// Manage policy sets and their policies, projects and workspaces
    #[command(name = "policy-set")]
    PolicySet {
        #[command(subcommand)]
        action: PolicySetAction,
    },

    /// Manage projects
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Manage teams
    Team {
        #[command(subcommand)]
        action: TeamAction,
    },

    /// Manage workspace variables
    Variable {
        #[command(subcommand)]
        action: VariableAction,
    },

    /// Manage variable sets and their variables
    Varset {
        #[command(subcommand)]
        action: VarsetAction,
    },

    /// Manage workspaces
    Workspace {
        #[command(subcommand)]
        action: WorkspaceAction,
    },
}

impl Cli {
    /// Organization for organization-scoped commands
    pub fn require_org(&self) -> Result<&str> {
        self.org
            .as_deref()
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .ok_or_else(|| {
                TfeError::InputContract(format!(
                    "Organization is required: pass --org or set {}",
                    org::ENV_VAR
                ))
            })
    }

    /// Name resolution policy selected by `--strict-names`
    pub fn match_policy(&self) -> MatchPolicy {
        if self.strict_names {
            MatchPolicy::Unique
        } else {
            MatchPolicy::First
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "tfectl",
            "project",
            "list",
            "--org",
            "acme",
            "--batch",
            "--strict-names",
        ]);
        assert_eq!(cli.org.as_deref(), Some("acme"));
        assert!(cli.batch);
        assert_eq!(cli.match_policy(), MatchPolicy::Unique);
    }

    #[test]
    fn test_default_match_policy_is_first() {
        let cli = Cli::parse_from(["tfectl", "--org", "acme", "team", "list"]);
        assert_eq!(cli.match_policy(), MatchPolicy::First);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
    }

    #[test]
    fn test_require_org_missing() {
        let cli = Cli::parse_from(["tfectl", "--org", "  ", "team", "list"]);
        let err = cli.require_org().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputContract);
        assert!(err.to_string().contains("--org"));
    }

    #[test]
    fn test_agent_pool_assign_to_project_args() {
        let cli = Cli::parse_from([
            "tfectl",
            "agent-pool",
            "assign-to-project",
            "--pool-name",
            "ci-pool",
            "--project-id",
            "prj-123",
        ]);
        match cli.command {
            Command::AgentPool {
                action: AgentPoolAction::AssignToProject(args),
            } => {
                assert_eq!(args.pool.name.as_deref(), Some("ci-pool"));
                assert_eq!(args.project.id.as_deref(), Some("prj-123"));
                assert!(!args.yes);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_variable_read_takes_workspace_and_variable_flags() {
        let cli = Cli::parse_from([
            "tfectl",
            "variable",
            "read",
            "--workspace-name",
            "prod",
            "--key",
            "region",
        ]);
        match cli.command {
            Command::Variable {
                action: VariableAction::Read(args),
            } => {
                assert_eq!(args.workspace.name.as_deref(), Some("prod"));
                assert_eq!(args.variable.key.as_deref(), Some("region"));
                assert_eq!(args.variable.id, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_varset_var_delete_takes_both_ids() {
        let cli = Cli::parse_from([
            "tfectl",
            "varset",
            "var-delete",
            "--varset-id",
            "varset-1",
            "--id",
            "var-9",
            "--yes",
        ]);
        match cli.command {
            Command::Varset {
                action: VarsetAction::VarDelete(args),
            } => {
                assert_eq!(args.varset.id.as_deref(), Some("varset-1"));
                assert_eq!(args.variable.id.as_deref(), Some("var-9"));
                assert!(args.yes);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_workspace_list_project_flags() {
        let cli = Cli::parse_from([
            "tfectl",
            "workspace",
            "list",
            "--project-name",
            "prj-legacy",
        ]);
        match cli.command {
            Command::Workspace {
                action: WorkspaceAction::List(args),
            } => assert_eq!(args.project.name.as_deref(), Some("prj-legacy")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_repeatable_workspace_ids() {
        let cli = Cli::parse_from([
            "tfectl",
            "policy-set",
            "add-workspaces",
            "--policy-set-id",
            "polset-1",
            "--workspace-id",
            "ws-1",
            "--workspace-id",
            "ws-2",
        ]);
        match cli.command {
            Command::PolicySet {
                action: PolicySetAction::AddWorkspaces(args),
            } => assert_eq!(args.workspace_ids, vec!["ws-1", "ws-2"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_variable_create_defaults() {
        let cli = Cli::parse_from([
            "tfectl",
            "variable",
            "create",
            "--workspace-name",
            "prod",
            "--key",
            "region",
        ]);
        match cli.command {
            Command::Variable {
                action: VariableAction::Create(args),
            } => {
                assert_eq!(args.fields.category, CategoryArg::Terraform);
                assert_eq!(args.fields.value, "");
                assert!(!args.fields.sensitive);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
