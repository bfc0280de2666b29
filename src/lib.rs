//! tfectl - Manage HCP Terraform / Terraform Enterprise resources
//!
//! A CLI tool to create, read, list, update and delete agent pools, agent
//! tokens, policy sets, projects, teams, variables, variable sets and
//! workspaces, and to edit the relationships between them.
//!
//! # Features
//!
//! - Resolve any object by name or id within its scope
//! - Lazy, page-by-page enumeration of every collection
//! - Bulk relationship edits, including "every workspace of a project"
//! - Sensitive variable values are never displayed
//! - Multiple output formats (table, CSV, JSON, YAML)
//!
//! # Example
//!
//! ```bash
//! # List agent pools
//! tfectl --org my-org agent-pool list
//!
//! # Let an agent pool run every workspace of a project
//! tfectl --org my-org agent-pool assign-to-project --pool-name ci --project-name infra
//!
//! # Add workspaces to a policy set
//! tfectl --org my-org policy-set add-workspaces --policy-set-name baseline \
//!     --workspace-id ws-abc --workspace-id ws-def
//!
//! # Show workspace variables as JSON
//! tfectl --org my-org variable list --workspace-name prod -o json
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod hcp;
pub mod output;
pub mod ui;

pub use cli::{Cli, Command, OutputFormat};
pub use error::{ErrorKind, Result, TfeError};
pub use hcp::{
    run_command, HostResolver, Identifier, MatchPolicy, ResourceKind, ResourceRef, Resolver,
    Scope, TfeClient, TfeResource, TokenResolver,
};
