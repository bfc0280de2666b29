//! Helper functions shared by command handlers

use indicatif::ProgressBar;

use crate::cli::Cli;
use crate::error::Result;
use crate::hcp::resource::{Identifier, ResourceKind, ResourceRef, Scope};
use crate::hcp::{Resolver, TfeClient};
use crate::ui::finish_spinner;

/// Organization scope from `--org` / `TFE_ORGANIZATION`
pub fn org_scope(cli: &Cli) -> Result<Scope> {
    Ok(Scope::Organization(cli.require_org()?.to_string()))
}

/// Resolve a name or id within a scope using the policy selected on the CLI
pub async fn resolve_in(
    client: &TfeClient,
    cli: &Cli,
    scope: &Scope,
    kind: ResourceKind,
    input: &Identifier,
) -> Result<ResourceRef> {
    Resolver::new(client, cli.match_policy())
        .resolve(scope, kind, input)
        .await
}

/// Resolve a name or id among the organization's objects of one kind
pub async fn resolve_in_org(
    client: &TfeClient,
    cli: &Cli,
    kind: ResourceKind,
    input: &Identifier,
) -> Result<ResourceRef> {
    let scope = org_scope(cli)?;
    resolve_in(client, cli, &scope, kind, input).await
}

/// Clear the spinner whether or not the wrapped step succeeded
pub fn finish_with<T>(spinner: Option<ProgressBar>, result: Result<T>) -> Result<T> {
    finish_spinner(spinner);
    result
}
