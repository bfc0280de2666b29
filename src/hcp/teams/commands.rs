//! Team command handlers

use crate::cli::{Cli, DeleteArgs, ListArgs, ReadArgs, TeamAction, TeamCreateArgs, TeamUpdateArgs};
use crate::error::{Result, TfeError};
use crate::hcp::helpers::{finish_with, resolve_in_org};
use crate::hcp::resource::ResourceKind;
use crate::hcp::{TfeClient, TfeResource};
use crate::output::{output_record, output_records};
use crate::ui::{confirm_action, create_spinner};

use super::models::{TeamCreateOptions, TeamUpdateOptions};

/// Run a 'team' action
pub async fn run_team_command(client: &TfeClient, cli: &Cli, action: &TeamAction) -> Result<()> {
    match action {
        TeamAction::Create(args) => create_team(client, cli, args).await,
        TeamAction::Read(args) => read_team(client, cli, args).await,
        TeamAction::List(args) => list_teams(client, cli, args).await,
        TeamAction::Update(args) => update_team(client, cli, args).await,
        TeamAction::Delete(args) => delete_team(client, cli, args).await,
    }
}

async fn create_team(client: &TfeClient, cli: &Cli, args: &TeamCreateArgs) -> Result<()> {
    let org = cli.require_org()?;
    let options = TeamCreateOptions {
        name: args.name.clone(),
        visibility: args.visibility.map(|v| v.to_string()),
    };

    let spinner = create_spinner(&format!("Creating team '{}'...", args.name), cli.batch);
    let team = finish_with(spinner, client.create_team(org, &options).await)?;

    println!("✓ Created team '{}' ({})", team.name(), team.id);
    Ok(())
}

async fn read_team(client: &TfeClient, cli: &Cli, args: &ReadArgs) -> Result<()> {
    let input = args.target.identifier()?;

    let spinner = create_spinner(&format!("Fetching team '{}'...", input), cli.batch);
    let result: Result<_> = async {
        let found = resolve_in_org(client, cli, ResourceKind::Team, &input).await?;
        client.get_team(&found.id).await
    }
    .await;
    let team = finish_with(spinner, result)?;

    output_record(&team, args.output, cli.no_header);
    Ok(())
}

async fn list_teams(client: &TfeClient, cli: &Cli, args: &ListArgs) -> Result<()> {
    let org = cli.require_org()?;

    let spinner = create_spinner(&format!("Fetching teams for '{}'...", org), cli.batch);
    let teams = finish_with(spinner, client.list_teams(org).await)?;

    if teams.is_empty() {
        eprintln!("No teams found in organization '{}'", org);
        return Ok(());
    }

    output_records(&teams, args.output, cli.no_header);
    Ok(())
}

async fn update_team(client: &TfeClient, cli: &Cli, args: &TeamUpdateArgs) -> Result<()> {
    let input = args.target.identifier()?;
    let options = TeamUpdateOptions {
        name: args.new_name.clone(),
        visibility: args.visibility.map(|v| v.to_string()),
    };
    if options.is_empty() {
        return Err(TfeError::InputContract(
            "Nothing to update: pass --new-name or --visibility".to_string(),
        ));
    }

    let spinner = create_spinner(&format!("Updating team '{}'...", input), cli.batch);
    let result: Result<_> = async {
        let found = resolve_in_org(client, cli, ResourceKind::Team, &input).await?;
        client.update_team(&found.id, &options).await
    }
    .await;
    let team = finish_with(spinner, result)?;

    println!("✓ Updated team '{}' ({})", team.name(), team.id);
    Ok(())
}

async fn delete_team(client: &TfeClient, cli: &Cli, args: &DeleteArgs) -> Result<()> {
    let input = args.target.identifier()?;

    let spinner = create_spinner(&format!("Resolving team '{}'...", input), cli.batch);
    let team = finish_with(
        spinner,
        resolve_in_org(client, cli, ResourceKind::Team, &input).await,
    )?;

    if !confirm_action(&format!("Delete team {}?", team), args.yes, cli.batch)? {
        println!("Cancelled");
        return Ok(());
    }

    let spinner = create_spinner(&format!("Deleting team {}...", team), cli.batch);
    finish_with(spinner, client.delete_team(&team.id).await)?;

    println!("✓ Deleted team {}", team);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Command;
    use crate::error::ErrorKind;
    use clap::Parser;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn run(client: &TfeClient, argv: &[&str]) -> Result<()> {
        let cli = Cli::parse_from(argv);
        let Command::Team { action } = &cli.command else {
            panic!("expected a team command");
        };
        run_team_command(client, &cli, action).await
    }

    fn teams_body() -> serde_json::Value {
        serde_json::json!({
            "data": [
                {"id": "team-1", "type": "teams", "attributes": {"name": "devs"}},
                {"id": "team-2", "type": "teams", "attributes": {"name": "devs"}}
            ]
        })
    }

    #[tokio::test]
    async fn test_delete_in_batch_mode_proceeds_without_prompt() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/acme/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(teams_body()))
            .mount(&mock_server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/teams/team-1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        run(
            &client,
            &["tfectl", "--batch", "--org", "acme", "team", "delete", "--name", "devs"],
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_duplicate_name_deletes_first_by_default() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/acme/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(teams_body()))
            .mount(&mock_server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/teams/team-1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        run(
            &client,
            &["tfectl", "--batch", "--org", "acme", "team", "delete", "--name", "devs", "-y"],
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_update_without_changes_is_rejected() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        let err = run(
            &client,
            &["tfectl", "--org", "acme", "team", "update", "--id", "team-1"],
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputContract);
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }
}
