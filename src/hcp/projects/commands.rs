//! Project command handlers

use crate::cli::{Cli, DeleteArgs, ListArgs, ProjectAction, ProjectCreateArgs, ProjectUpdateArgs, ReadArgs};
use crate::error::{Result, TfeError};
use crate::hcp::helpers::{finish_with, resolve_in_org};
use crate::hcp::resource::ResourceKind;
use crate::hcp::{TfeClient, TfeResource};
use crate::output::{output_record, output_records};
use crate::ui::{confirm_action, create_spinner};

use super::models::{ProjectCreateOptions, ProjectUpdateOptions};

/// Run a 'project' action
pub async fn run_project_command(
    client: &TfeClient,
    cli: &Cli,
    action: &ProjectAction,
) -> Result<()> {
    match action {
        ProjectAction::Create(args) => create_project(client, cli, args).await,
        ProjectAction::Read(args) => read_project(client, cli, args).await,
        ProjectAction::List(args) => list_projects(client, cli, args).await,
        ProjectAction::Update(args) => update_project(client, cli, args).await,
        ProjectAction::Delete(args) => delete_project(client, cli, args).await,
    }
}

async fn create_project(client: &TfeClient, cli: &Cli, args: &ProjectCreateArgs) -> Result<()> {
    let org = cli.require_org()?;
    let options = ProjectCreateOptions {
        name: args.name.clone(),
        description: args.description.clone(),
    };

    let spinner = create_spinner(&format!("Creating project '{}'...", args.name), cli.batch);
    let project = finish_with(spinner, client.create_project(org, &options).await)?;

    println!("✓ Created project '{}' ({})", project.name(), project.id);
    Ok(())
}

async fn read_project(client: &TfeClient, cli: &Cli, args: &ReadArgs) -> Result<()> {
    let input = args.target.identifier()?;

    let spinner = create_spinner(&format!("Fetching project '{}'...", input), cli.batch);
    let result: Result<_> = async {
        let found = resolve_in_org(client, cli, ResourceKind::Project, &input).await?;
        client.get_project(&found.id).await
    }
    .await;
    let project = finish_with(spinner, result)?;

    output_record(&project, args.output, cli.no_header);
    Ok(())
}

async fn list_projects(client: &TfeClient, cli: &Cli, args: &ListArgs) -> Result<()> {
    let org = cli.require_org()?;

    let spinner = create_spinner(&format!("Fetching projects for '{}'...", org), cli.batch);
    let projects = finish_with(spinner, client.list_projects(org).await)?;

    if projects.is_empty() {
        eprintln!("No projects found in organization '{}'", org);
        return Ok(());
    }

    output_records(&projects, args.output, cli.no_header);
    Ok(())
}

async fn update_project(client: &TfeClient, cli: &Cli, args: &ProjectUpdateArgs) -> Result<()> {
    let input = args.target.identifier()?;
    let options = ProjectUpdateOptions {
        name: args.new_name.clone(),
        description: args.description.clone(),
    };
    if options.is_empty() {
        return Err(TfeError::InputContract(
            "Nothing to update: pass --new-name or --description".to_string(),
        ));
    }

    let spinner = create_spinner(&format!("Updating project '{}'...", input), cli.batch);
    let result: Result<_> = async {
        let found = resolve_in_org(client, cli, ResourceKind::Project, &input).await?;
        client.update_project(&found.id, &options).await
    }
    .await;
    let project = finish_with(spinner, result)?;

    println!("✓ Updated project '{}' ({})", project.name(), project.id);
    Ok(())
}

async fn delete_project(client: &TfeClient, cli: &Cli, args: &DeleteArgs) -> Result<()> {
    let input = args.target.identifier()?;

    let spinner = create_spinner(&format!("Resolving project '{}'...", input), cli.batch);
    let project = finish_with(
        spinner,
        resolve_in_org(client, cli, ResourceKind::Project, &input).await,
    )?;

    if !confirm_action(&format!("Delete project {}?", project), args.yes, cli.batch)? {
        println!("Cancelled");
        return Ok(());
    }

    let spinner = create_spinner(&format!("Deleting project {}...", project), cli.batch);
    finish_with(spinner, client.delete_project(&project.id).await)?;

    println!("✓ Deleted project {}", project);
    Ok(())
}
