//! Workspace command handlers

use crate::cli::{
    Cli, DeleteArgs, ProjectTarget, ReadArgs, WorkspaceAction, WorkspaceCreateArgs,
    WorkspaceListArgs, WorkspaceUpdateArgs,
};
use crate::error::{Result, TfeError};
use crate::hcp::helpers::{finish_with, resolve_in_org};
use crate::hcp::resource::{ResourceKind, ResourceRef};
use crate::hcp::{TfeClient, TfeResource};
use crate::output::{output_record, output_records};
use crate::ui::{confirm_action, create_spinner};

use super::models::{WorkspaceCreateOptions, WorkspaceUpdateOptions};

/// Run a 'workspace' action
pub async fn run_workspace_command(
    client: &TfeClient,
    cli: &Cli,
    action: &WorkspaceAction,
) -> Result<()> {
    match action {
        WorkspaceAction::Create(args) => create_workspace(client, cli, args).await,
        WorkspaceAction::Read(args) => read_workspace(client, cli, args).await,
        WorkspaceAction::List(args) => list_workspaces(client, cli, args).await,
        WorkspaceAction::Update(args) => update_workspace(client, cli, args).await,
        WorkspaceAction::Delete(args) => delete_workspace(client, cli, args).await,
    }
}

/// Resolve the optional `--project-name` / `--project-id` pair
async fn resolve_project(
    client: &TfeClient,
    cli: &Cli,
    project: &ProjectTarget,
) -> Result<Option<ResourceRef>> {
    match project.optional_identifier() {
        Some(input) => {
            let found = resolve_in_org(client, cli, ResourceKind::Project, &input).await?;
            Ok(Some(found))
        }
        None => Ok(None),
    }
}

async fn create_workspace(client: &TfeClient, cli: &Cli, args: &WorkspaceCreateArgs) -> Result<()> {
    let org = cli.require_org()?;
    let options = WorkspaceCreateOptions {
        name: args.name.clone(),
        description: args.description.clone(),
    };

    let spinner = create_spinner(&format!("Creating workspace '{}'...", args.name), cli.batch);
    let result: Result<_> = async {
        let project = resolve_project(client, cli, &args.project).await?;
        client
            .create_workspace(org, &options, project.as_ref())
            .await
    }
    .await;
    let ws = finish_with(spinner, result)?;

    println!("✓ Created workspace '{}' ({})", ws.name(), ws.id);
    Ok(())
}

async fn read_workspace(client: &TfeClient, cli: &Cli, args: &ReadArgs) -> Result<()> {
    let input = args.target.identifier()?;

    let spinner = create_spinner(&format!("Fetching workspace '{}'...", input), cli.batch);
    let result: Result<_> = async {
        let found = resolve_in_org(client, cli, ResourceKind::Workspace, &input).await?;
        client.get_workspace(&found.id).await
    }
    .await;
    let ws = finish_with(spinner, result)?;

    output_record(&ws, args.output, cli.no_header);
    Ok(())
}

async fn list_workspaces(client: &TfeClient, cli: &Cli, args: &WorkspaceListArgs) -> Result<()> {
    let org = cli.require_org()?;

    let spinner = create_spinner(&format!("Fetching workspaces for '{}'...", org), cli.batch);
    let result: Result<_> = async {
        let project = resolve_project(client, cli, &args.project).await?;
        let workspaces = client.list_workspaces(org, project.as_ref()).await?;
        Ok((project, workspaces))
    }
    .await;
    let (project, workspaces) = finish_with(spinner, result)?;

    if workspaces.is_empty() {
        match project {
            Some(project) => eprintln!("No workspaces found in project {}", project),
            None => eprintln!("No workspaces found in organization '{}'", org),
        }
        return Ok(());
    }

    output_records(&workspaces, args.output, cli.no_header);
    Ok(())
}

async fn update_workspace(client: &TfeClient, cli: &Cli, args: &WorkspaceUpdateArgs) -> Result<()> {
    let input = args.target.identifier()?;
    let options = WorkspaceUpdateOptions {
        name: args.new_name.clone(),
        description: args.description.clone(),
    };
    if options.is_empty() {
        return Err(TfeError::InputContract(
            "Nothing to update: pass --new-name or --description".to_string(),
        ));
    }

    let spinner = create_spinner(&format!("Updating workspace '{}'...", input), cli.batch);
    let result: Result<_> = async {
        let found = resolve_in_org(client, cli, ResourceKind::Workspace, &input).await?;
        client.update_workspace(&found.id, &options).await
    }
    .await;
    let ws = finish_with(spinner, result)?;

    println!("✓ Updated workspace '{}' ({})", ws.name(), ws.id);
    Ok(())
}

async fn delete_workspace(client: &TfeClient, cli: &Cli, args: &DeleteArgs) -> Result<()> {
    let input = args.target.identifier()?;

    let spinner = create_spinner(&format!("Resolving workspace '{}'...", input), cli.batch);
    let ws = finish_with(
        spinner,
        resolve_in_org(client, cli, ResourceKind::Workspace, &input).await,
    )?;

    if !confirm_action(&format!("Delete workspace {}?", ws), args.yes, cli.batch)? {
        println!("Cancelled");
        return Ok(());
    }

    let spinner = create_spinner(&format!("Deleting workspace {}...", ws), cli.batch);
    finish_with(spinner, client.delete_workspace(&ws.id).await)?;

    println!("✓ Deleted workspace {}", ws);
    Ok(())
}
