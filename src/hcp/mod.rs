//! TFE API client module
//!
//! Resource directory, identifier resolution, relationship edits and the
//! per-kind command handlers for HCP Terraform / Terraform Enterprise.

pub mod agent_pools;
pub mod agent_tokens;
mod client;
mod credentials;
pub mod directory;
pub mod helpers;
mod host;
pub mod models;
pub mod policy_sets;
pub mod projects;
pub mod relationships;
mod resolver;
pub mod resource;
pub mod teams;
pub mod traits;
pub mod variables;
pub mod varsets;
pub mod workspaces;

use serde::Deserialize;

use crate::cli::{Cli, Command};
use crate::error::Result;

pub use agent_pools::{run_agent_pool_command, AgentPool};
pub use agent_tokens::{run_agent_token_command, AgentToken};
pub use client::TfeClient;
pub use credentials::TokenResolver;
pub use host::HostResolver;
pub use policy_sets::{run_policy_set_command, Policy, PolicySet};
pub use projects::{run_project_command, Project};
pub use relationships::{EditOperation, EditResult, RelationshipEdit};
pub use resolver::Resolver;
pub use resource::{Identifier, MatchPolicy, ResourceKind, ResourceRef, Scope};
pub use teams::{run_team_command, Team};
pub use traits::{PaginatedResponse, TfeResource};
pub use variables::{render_value, run_variable_command, VariableRecord};
pub use varsets::{run_varset_command, VariableSet};
pub use workspaces::{run_workspace_command, Workspace};

/// Dispatch a parsed command line to its resource handler
pub async fn run_command(client: &TfeClient, cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::AgentPool { action } => run_agent_pool_command(client, cli, action).await,
        Command::AgentToken { action } => run_agent_token_command(client, cli, action).await,
        Command::PolicySet { action } => run_policy_set_command(client, cli, action).await,
        Command::Project { action } => run_project_command(client, cli, action).await,
        Command::Team { action } => run_team_command(client, cli, action).await,
        Command::Variable { action } => run_variable_command(client, cli, action).await,
        Command::Varset { action } => run_varset_command(client, cli, action).await,
        Command::Workspace { action } => run_workspace_command(client, cli, action).await,
    }
}

/// Pagination metadata from TFE API (shared across resources)
#[derive(Deserialize, Debug, Default, Clone)]
pub struct PaginationMeta {
    pub pagination: Option<Pagination>,
}

/// Pagination details
#[derive(Deserialize, Debug, Clone)]
pub struct Pagination {
    #[serde(rename = "current-page")]
    pub current_page: u32,
    #[serde(rename = "total-pages")]
    pub total_pages: u32,
    #[serde(rename = "total-count")]
    pub total_count: u32,
}

impl Pagination {
    /// Page to request after `fetched`, or `None` on the last page
    pub fn page_after(&self, fetched: u32) -> Option<u32> {
        if fetched < self.total_pages {
            Some(fetched + 1)
        } else {
            None
        }
    }
}
