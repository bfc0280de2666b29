//! Variable command handlers
//!
//! Workspace variables and variable-set variables share these handlers; a
//! [`VariableOwner`] decides which collection they act on.

use crate::cli::{
    CategoryArg, Cli, OutputFormat, VariableAction, VariableChanges, VariableFields,
    VariableTarget,
};
use crate::error::{Result, TfeError};
use crate::hcp::helpers::{finish_with, resolve_in, resolve_in_org};
use crate::hcp::resource::{Identifier, ResourceKind, Scope};
use crate::hcp::TfeClient;
use crate::output::{output_record, output_records};
use crate::ui::{confirm_action, create_spinner, set_spinner_message};

use super::models::{VariableCategory, VariableCreateOptions, VariableUpdateOptions};

impl From<CategoryArg> for VariableCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Terraform => VariableCategory::Terraform,
            CategoryArg::Env => VariableCategory::Env,
        }
    }
}

impl From<&VariableFields> for VariableCreateOptions {
    fn from(fields: &VariableFields) -> Self {
        Self {
            key: fields.key.clone(),
            value: fields.value.clone(),
            description: fields.description.clone(),
            category: fields.category.into(),
            hcl: fields.hcl,
            sensitive: fields.sensitive,
        }
    }
}

impl From<&VariableChanges> for VariableUpdateOptions {
    fn from(changes: &VariableChanges) -> Self {
        Self {
            key: changes.new_key.clone(),
            value: changes.value.clone(),
            description: changes.description.clone(),
            hcl: changes.hcl,
            sensitive: changes.sensitive,
        }
    }
}

/// The workspace or variable set whose variables are being managed
pub struct VariableOwner {
    kind: ResourceKind,
    input: Identifier,
}

impl VariableOwner {
    pub fn workspace(input: Identifier) -> Self {
        Self {
            kind: ResourceKind::Workspace,
            input,
        }
    }

    pub fn variable_set(input: Identifier) -> Self {
        Self {
            kind: ResourceKind::VariableSet,
            input,
        }
    }

    async fn scope(&self, client: &TfeClient, cli: &Cli) -> Result<Scope> {
        let found = resolve_in_org(client, cli, self.kind, &self.input).await?;
        Ok(match self.kind {
            ResourceKind::VariableSet => Scope::VariableSet(found),
            _ => Scope::Workspace(found),
        })
    }
}

/// Run a 'variable' action (workspace variables)
pub async fn run_variable_command(
    client: &TfeClient,
    cli: &Cli,
    action: &VariableAction,
) -> Result<()> {
    match action {
        VariableAction::Create(args) => {
            let owner = VariableOwner::workspace(args.workspace.identifier()?);
            create_variable(client, cli, &owner, &args.fields).await
        }
        VariableAction::Read(args) => {
            let owner = VariableOwner::workspace(args.workspace.identifier()?);
            read_variable(client, cli, &owner, &args.variable, args.output).await
        }
        VariableAction::List(args) => {
            let owner = VariableOwner::workspace(args.workspace.identifier()?);
            list_variables(client, cli, &owner, args.output).await
        }
        VariableAction::Update(args) => {
            let owner = VariableOwner::workspace(args.workspace.identifier()?);
            update_variable(client, cli, &owner, &args.variable, &args.changes).await
        }
        VariableAction::Delete(args) => {
            let owner = VariableOwner::workspace(args.workspace.identifier()?);
            delete_variable(client, cli, &owner, &args.variable, args.yes).await
        }
    }
}

pub async fn create_variable(
    client: &TfeClient,
    cli: &Cli,
    owner: &VariableOwner,
    fields: &VariableFields,
) -> Result<()> {
    if fields.key.trim().is_empty() {
        return Err(TfeError::InputContract(
            "Variable key must not be empty".to_string(),
        ));
    }
    let options = VariableCreateOptions::from(fields);

    let spinner = create_spinner(&format!("Creating variable '{}'...", fields.key), cli.batch);
    let result: Result<_> = async {
        let scope = owner.scope(client, cli).await?;
        let created = client.create_variable(&scope, &options).await?;
        Ok((scope, created))
    }
    .await;
    let (scope, var) = finish_with(spinner, result)?;

    println!("✓ Created variable '{}' ({}) in {}", var.key, var.id, scope);
    Ok(())
}

pub async fn read_variable(
    client: &TfeClient,
    cli: &Cli,
    owner: &VariableOwner,
    target: &VariableTarget,
    output: OutputFormat,
) -> Result<()> {
    let input = target.identifier()?;

    let spinner = create_spinner(&format!("Fetching variable '{}'...", input), cli.batch);
    let result: Result<_> = async {
        let scope = owner.scope(client, cli).await?;
        set_spinner_message(&spinner, &format!("Fetching variable '{}' in {}...", input, scope));
        let var = resolve_in(client, cli, &scope, ResourceKind::Variable, &input).await?;
        client.get_variable(&scope, &var).await
    }
    .await;
    let record = finish_with(spinner, result)?;

    output_record(&record, output, cli.no_header);
    Ok(())
}

pub async fn list_variables(
    client: &TfeClient,
    cli: &Cli,
    owner: &VariableOwner,
    output: OutputFormat,
) -> Result<()> {
    let spinner = create_spinner(&format!("Fetching variables of '{}'...", owner.input), cli.batch);
    let result: Result<_> = async {
        let scope = owner.scope(client, cli).await?;
        let records = client.list_variables(&scope).await?;
        Ok((scope, records))
    }
    .await;
    let (scope, records) = finish_with(spinner, result)?;

    if records.is_empty() {
        eprintln!("No variables found in {}", scope);
        return Ok(());
    }

    output_records(&records, output, cli.no_header);
    Ok(())
}

pub async fn update_variable(
    client: &TfeClient,
    cli: &Cli,
    owner: &VariableOwner,
    target: &VariableTarget,
    changes: &VariableChanges,
) -> Result<()> {
    let input = target.identifier()?;
    let options = VariableUpdateOptions::from(changes);
    if options.is_empty() {
        return Err(TfeError::InputContract(
            "Nothing to update: pass --new-key, --value, --description, --sensitive or --hcl"
                .to_string(),
        ));
    }

    let spinner = create_spinner(&format!("Updating variable '{}'...", input), cli.batch);
    let result: Result<_> = async {
        let scope = owner.scope(client, cli).await?;
        set_spinner_message(&spinner, &format!("Updating variable '{}' in {}...", input, scope));
        let var = resolve_in(client, cli, &scope, ResourceKind::Variable, &input).await?;
        let updated = client.update_variable(&scope, &var.id, &options).await?;
        Ok((scope, updated))
    }
    .await;
    let (scope, var) = finish_with(spinner, result)?;

    println!("✓ Updated variable '{}' ({}) in {}", var.key, var.id, scope);
    Ok(())
}

pub async fn delete_variable(
    client: &TfeClient,
    cli: &Cli,
    owner: &VariableOwner,
    target: &VariableTarget,
    yes: bool,
) -> Result<()> {
    let input = target.identifier()?;

    let spinner = create_spinner(&format!("Resolving variable '{}'...", input), cli.batch);
    let result: Result<_> = async {
        let scope = owner.scope(client, cli).await?;
        let var = resolve_in(client, cli, &scope, ResourceKind::Variable, &input).await?;
        Ok((scope, var))
    }
    .await;
    let (scope, var) = finish_with(spinner, result)?;

    if !confirm_action(&format!("Delete variable {} from {}?", var, scope), yes, cli.batch)? {
        println!("Cancelled");
        return Ok(());
    }

    let spinner = create_spinner(&format!("Deleting variable {}...", var), cli.batch);
    finish_with(spinner, client.delete_variable(&scope, &var.id).await)?;

    println!("✓ Deleted variable {} from {}", var, scope);
    Ok(())
}
