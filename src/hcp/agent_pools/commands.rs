//! Agent pool command handlers

use log::debug;

use crate::cli::{
    AgentPoolAction, AgentPoolCreateArgs, AgentPoolUpdateArgs, Cli, DeleteArgs, ListArgs,
    PoolProjectArgs, PoolWorkspacesArgs, ReadArgs,
};
use crate::error::{Result, TfeError};
use crate::hcp::helpers::{finish_with, resolve_in_org};
use crate::hcp::relationships::{child_id_set, EditOperation, RelationshipEdit};
use crate::hcp::resource::{ResourceKind, ResourceRef};
use crate::hcp::{TfeClient, TfeResource};
use crate::output::{output_record, output_records};
use crate::ui::{confirm_action, create_spinner};

use super::models::{AgentPoolCreateOptions, AgentPoolUpdateOptions};

/// Run an 'agent-pool' action
pub async fn run_agent_pool_command(
    client: &TfeClient,
    cli: &Cli,
    action: &AgentPoolAction,
) -> Result<()> {
    match action {
        AgentPoolAction::Create(args) => create_pool(client, cli, args).await,
        AgentPoolAction::Read(args) => read_pool(client, cli, args).await,
        AgentPoolAction::List(args) => list_pools(client, cli, args).await,
        AgentPoolAction::Update(args) => update_pool(client, cli, args).await,
        AgentPoolAction::Delete(args) => delete_pool(client, cli, args).await,
        AgentPoolAction::AssignToProject(args) => {
            edit_project(client, cli, args, EditOperation::Add).await
        }
        AgentPoolAction::RemoveFromProject(args) => {
            edit_project(client, cli, args, EditOperation::Remove).await
        }
        AgentPoolAction::AssignWorkspaces(args) => {
            edit_workspaces(client, cli, args, EditOperation::Add).await
        }
        AgentPoolAction::RemoveWorkspaces(args) => {
            edit_workspaces(client, cli, args, EditOperation::Remove).await
        }
    }
}

async fn create_pool(client: &TfeClient, cli: &Cli, args: &AgentPoolCreateArgs) -> Result<()> {
    let org = cli.require_org()?;
    let options = AgentPoolCreateOptions {
        name: args.name.clone(),
        organization_scoped: args.organization_scoped,
    };

    let spinner = create_spinner(&format!("Creating agent pool '{}'...", args.name), cli.batch);
    let pool = finish_with(spinner, client.create_agent_pool(org, &options).await)?;

    println!("✓ Created agent pool '{}' ({})", pool.name(), pool.id);
    Ok(())
}

async fn read_pool(client: &TfeClient, cli: &Cli, args: &ReadArgs) -> Result<()> {
    let input = args.target.identifier()?;

    let spinner = create_spinner(&format!("Fetching agent pool '{}'...", input), cli.batch);
    let result: Result<_> = async {
        let found = resolve_in_org(client, cli, ResourceKind::AgentPool, &input).await?;
        client.get_agent_pool(&found.id).await
    }
    .await;
    let pool = finish_with(spinner, result)?;

    output_record(&pool, args.output, cli.no_header);
    Ok(())
}

async fn list_pools(client: &TfeClient, cli: &Cli, args: &ListArgs) -> Result<()> {
    let org = cli.require_org()?;

    let spinner = create_spinner(&format!("Fetching agent pools for '{}'...", org), cli.batch);
    let pools = finish_with(spinner, client.list_agent_pools(org).await)?;
    debug!("Found {} agent pool(s) in '{}'", pools.len(), org);

    if pools.is_empty() {
        eprintln!("No agent pools found in organization '{}'", org);
        return Ok(());
    }

    output_records(&pools, args.output, cli.no_header);
    Ok(())
}

async fn update_pool(client: &TfeClient, cli: &Cli, args: &AgentPoolUpdateArgs) -> Result<()> {
    let input = args.target.identifier()?;
    let options = AgentPoolUpdateOptions {
        name: args.new_name.clone(),
        organization_scoped: args.organization_scoped,
    };
    if options.is_empty() {
        return Err(TfeError::InputContract(
            "Nothing to update: pass --new-name or --organization-scoped".to_string(),
        ));
    }

    let spinner = create_spinner(&format!("Updating agent pool '{}'...", input), cli.batch);
    let result: Result<_> = async {
        let found = resolve_in_org(client, cli, ResourceKind::AgentPool, &input).await?;
        client.update_agent_pool(&found.id, &options).await
    }
    .await;
    let pool = finish_with(spinner, result)?;

    println!("✓ Updated agent pool '{}' ({})", pool.name(), pool.id);
    Ok(())
}

async fn delete_pool(client: &TfeClient, cli: &Cli, args: &DeleteArgs) -> Result<()> {
    let input = args.target.identifier()?;

    let spinner = create_spinner(&format!("Resolving agent pool '{}'...", input), cli.batch);
    let pool = finish_with(
        spinner,
        resolve_in_org(client, cli, ResourceKind::AgentPool, &input).await,
    )?;

    if !confirm_action(&format!("Delete agent pool {}?", pool), args.yes, cli.batch)? {
        println!("Cancelled");
        return Ok(());
    }

    let spinner = create_spinner(&format!("Deleting agent pool {}...", pool), cli.batch);
    finish_with(spinner, client.delete_agent_pool(&pool.id).await)?;

    println!("✓ Deleted agent pool {}", pool);
    Ok(())
}

/// Assign or revoke the pool for every workspace currently in a project
async fn edit_project(
    client: &TfeClient,
    cli: &Cli,
    args: &PoolProjectArgs,
    operation: EditOperation,
) -> Result<()> {
    let pool_input = args.pool.identifier()?;
    let project_input = args.project.identifier()?;
    let org = cli.require_org()?;

    let spinner = create_spinner(
        &format!("Resolving agent pool '{}' and project '{}'...", pool_input, project_input),
        cli.batch,
    );
    let resolved: Result<(ResourceRef, ResourceRef)> = async {
        let pool = resolve_in_org(client, cli, ResourceKind::AgentPool, &pool_input).await?;
        let project = resolve_in_org(client, cli, ResourceKind::Project, &project_input).await?;
        Ok((pool, project))
    }
    .await;
    let (pool, project) = finish_with(spinner, resolved)?;

    if operation == EditOperation::Remove
        && !confirm_action(
            &format!(
                "Remove agent pool {} from every workspace in project {}?",
                pool, project
            ),
            args.yes,
            cli.batch,
        )?
    {
        println!("Cancelled");
        return Ok(());
    }

    let spinner = create_spinner(
        &format!("Collecting workspaces of project {}...", project),
        cli.batch,
    );
    let result = finish_with(
        spinner,
        client
            .apply_derived_edit(&pool, operation, org, &project)
            .await,
    )?;

    match operation {
        EditOperation::Add => println!(
            "✓ Assigned agent pool '{}' to {} workspace(s) in project '{}'",
            pool.label(),
            result.affected,
            project.label()
        ),
        EditOperation::Remove => println!(
            "✓ Removed agent pool '{}' from {} workspace(s) in project '{}'",
            pool.label(),
            result.affected,
            project.label()
        ),
    }
    Ok(())
}

/// Assign or revoke the pool for an explicit list of workspaces
async fn edit_workspaces(
    client: &TfeClient,
    cli: &Cli,
    args: &PoolWorkspacesArgs,
    operation: EditOperation,
) -> Result<()> {
    let workspace_ids = child_id_set(ResourceKind::Workspace, &args.workspace_ids)?;
    let pool_input = args.pool.identifier()?;

    let spinner = create_spinner(&format!("Resolving agent pool '{}'...", pool_input), cli.batch);
    let pool = finish_with(
        spinner,
        resolve_in_org(client, cli, ResourceKind::AgentPool, &pool_input).await,
    )?;
    let edit = RelationshipEdit::new(pool, ResourceKind::Workspace, operation, workspace_ids)?;

    if operation == EditOperation::Remove
        && !confirm_action(
            &format!(
                "Remove agent pool {} from {} workspace(s)?",
                edit.parent(),
                edit.child_ids().len()
            ),
            args.yes,
            cli.batch,
        )?
    {
        println!("Cancelled");
        return Ok(());
    }

    let spinner = create_spinner("Submitting workspace assignment...", cli.batch);
    let result = finish_with(spinner, client.apply_edit(&edit).await)?;

    match operation {
        EditOperation::Add => println!(
            "✓ Assigned agent pool '{}' to {} workspace(s)",
            result.parent.label(),
            result.affected
        ),
        EditOperation::Remove => println!(
            "✓ Removed agent pool '{}' from {} workspace(s)",
            result.parent.label(),
            result.affected
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Command;
    use crate::error::ErrorKind;
    use clap::Parser;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn run(client: &TfeClient, argv: &[&str]) -> Result<()> {
        let cli = Cli::parse_from(argv);
        let Command::AgentPool { action } = &cli.command else {
            panic!("expected an agent-pool command");
        };
        run_agent_pool_command(client, &cli, action).await
    }

    fn list_body(items: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "data": items,
            "meta": {"pagination": {"current-page": 1, "total-pages": 1, "total-count": 1}}
        })
    }

    #[tokio::test]
    async fn test_assign_to_project_unknown_pool_stops_before_any_edit() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/acme/agent-pools"))
            .respond_with(ResponseTemplate::new(200).set_body_json(list_body(
                serde_json::json!([
                    {"id": "apool-1", "type": "agent-pools", "attributes": {"name": "other-pool"}}
                ]),
            )))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/organizations/acme/projects"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/organizations/acme/workspaces"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&mock_server)
            .await;

        let err = run(
            &client,
            &[
                "tfectl",
                "--batch",
                "--org",
                "acme",
                "agent-pool",
                "assign-to-project",
                "--pool-name",
                "ci-pool",
                "--project-name",
                "infra",
            ],
        )
        .await
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        let msg = err.to_string();
        assert!(msg.contains("ci-pool"));
        assert!(msg.contains("acme"));
    }

    #[tokio::test]
    async fn test_assign_to_project_submits_project_workspaces() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/acme/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(list_body(
                serde_json::json!([
                    {"id": "prj-1", "type": "projects", "attributes": {"name": "infra"}}
                ]),
            )))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/organizations/acme/workspaces"))
            .and(query_param("filter[project][id]", "prj-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(list_body(
                serde_json::json!([
                    {"id": "ws-2", "type": "workspaces", "attributes": {"name": "b"}},
                    {"id": "ws-1", "type": "workspaces", "attributes": {"name": "a"}}
                ]),
            )))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path("/agent-pools/apool-7/relationships/allowed-workspaces"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        run(
            &client,
            &[
                "tfectl",
                "--batch",
                "--org",
                "acme",
                "agent-pool",
                "assign-to-project",
                "--pool-id",
                "apool-7",
                "--project-name",
                "infra",
            ],
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_assign_workspaces_without_ids_makes_no_requests() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        let err = run(
            &client,
            &[
                "tfectl",
                "--org",
                "acme",
                "agent-pool",
                "assign-workspaces",
                "--pool-name",
                "ci-pool",
            ],
        )
        .await
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InputContract);
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_workspaces_in_batch_mode_proceeds_without_prompt() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/agent-pools/apool-1/relationships/allowed-workspaces"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        run(
            &client,
            &[
                "tfectl",
                "--batch",
                "--org",
                "acme",
                "agent-pool",
                "remove-workspaces",
                "--pool-id",
                "apool-1",
                "--workspace-id",
                "ws-1",
            ],
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_update_without_changes_is_input_contract() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        let err = run(
            &client,
            &["tfectl", "--org", "acme", "agent-pool", "update", "--id", "apool-1"],
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputContract);
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }
}
