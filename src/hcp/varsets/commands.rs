//! Variable set command handlers

use crate::cli::{Cli, DeleteArgs, ListArgs, ReadArgs, VarsetAction, VarsetCreateArgs, VarsetUpdateArgs};
use crate::error::{Result, TfeError};
use crate::hcp::helpers::{finish_with, resolve_in_org};
use crate::hcp::resource::ResourceKind;
use crate::hcp::variables::{
    create_variable, delete_variable, list_variables, read_variable, update_variable,
    VariableOwner,
};
use crate::hcp::{TfeClient, TfeResource};
use crate::output::{output_record, output_records};
use crate::ui::{confirm_action, create_spinner};

use super::models::{VariableSetCreateOptions, VariableSetUpdateOptions};

/// Run a 'varset' action
pub async fn run_varset_command(client: &TfeClient, cli: &Cli, action: &VarsetAction) -> Result<()> {
    match action {
        VarsetAction::Create(args) => create_varset(client, cli, args).await,
        VarsetAction::Read(args) => read_varset(client, cli, args).await,
        VarsetAction::List(args) => list_varsets(client, cli, args).await,
        VarsetAction::Update(args) => update_varset(client, cli, args).await,
        VarsetAction::Delete(args) => delete_varset(client, cli, args).await,
        VarsetAction::VarCreate(args) => {
            let owner = VariableOwner::variable_set(args.varset.identifier()?);
            create_variable(client, cli, &owner, &args.fields).await
        }
        VarsetAction::VarRead(args) => {
            let owner = VariableOwner::variable_set(args.varset.identifier()?);
            read_variable(client, cli, &owner, &args.variable, args.output).await
        }
        VarsetAction::VarList(args) => {
            let owner = VariableOwner::variable_set(args.varset.identifier()?);
            list_variables(client, cli, &owner, args.output).await
        }
        VarsetAction::VarUpdate(args) => {
            let owner = VariableOwner::variable_set(args.varset.identifier()?);
            update_variable(client, cli, &owner, &args.variable, &args.changes).await
        }
        VarsetAction::VarDelete(args) => {
            let owner = VariableOwner::variable_set(args.varset.identifier()?);
            delete_variable(client, cli, &owner, &args.variable, args.yes).await
        }
    }
}

async fn create_varset(client: &TfeClient, cli: &Cli, args: &VarsetCreateArgs) -> Result<()> {
    let org = cli.require_org()?;
    let options = VariableSetCreateOptions {
        name: args.name.clone(),
        description: args.description.clone(),
        global: args.global,
    };

    let spinner = create_spinner(&format!("Creating variable set '{}'...", args.name), cli.batch);
    let set = finish_with(spinner, client.create_varset(org, &options).await)?;

    println!("✓ Created variable set '{}' ({})", set.name(), set.id);
    Ok(())
}

async fn read_varset(client: &TfeClient, cli: &Cli, args: &ReadArgs) -> Result<()> {
    let input = args.target.identifier()?;

    let spinner = create_spinner(&format!("Fetching variable set '{}'...", input), cli.batch);
    let result: Result<_> = async {
        let found = resolve_in_org(client, cli, ResourceKind::VariableSet, &input).await?;
        client.get_varset(&found.id).await
    }
    .await;
    let set = finish_with(spinner, result)?;

    output_record(&set, args.output, cli.no_header);
    Ok(())
}

async fn list_varsets(client: &TfeClient, cli: &Cli, args: &ListArgs) -> Result<()> {
    let org = cli.require_org()?;

    let spinner = create_spinner(&format!("Fetching variable sets for '{}'...", org), cli.batch);
    let sets = finish_with(spinner, client.list_varsets(org).await)?;

    if sets.is_empty() {
        eprintln!("No variable sets found in organization '{}'", org);
        return Ok(());
    }

    output_records(&sets, args.output, cli.no_header);
    Ok(())
}

async fn update_varset(client: &TfeClient, cli: &Cli, args: &VarsetUpdateArgs) -> Result<()> {
    let input = args.target.identifier()?;
    let options = VariableSetUpdateOptions {
        name: args.new_name.clone(),
        description: args.description.clone(),
        global: args.global,
    };
    if options.is_empty() {
        return Err(TfeError::InputContract(
            "Nothing to update: pass --new-name, --description or --global".to_string(),
        ));
    }

    let spinner = create_spinner(&format!("Updating variable set '{}'...", input), cli.batch);
    let result: Result<_> = async {
        let found = resolve_in_org(client, cli, ResourceKind::VariableSet, &input).await?;
        client.update_varset(&found.id, &options).await
    }
    .await;
    let set = finish_with(spinner, result)?;

    println!("✓ Updated variable set '{}' ({})", set.name(), set.id);
    Ok(())
}

async fn delete_varset(client: &TfeClient, cli: &Cli, args: &DeleteArgs) -> Result<()> {
    let input = args.target.identifier()?;

    let spinner = create_spinner(&format!("Resolving variable set '{}'...", input), cli.batch);
    let set = finish_with(
        spinner,
        resolve_in_org(client, cli, ResourceKind::VariableSet, &input).await,
    )?;

    if !confirm_action(&format!("Delete variable set {}?", set), args.yes, cli.batch)? {
        println!("Cancelled");
        return Ok(());
    }

    let spinner = create_spinner(&format!("Deleting variable set {}...", set), cli.batch);
    finish_with(spinner, client.delete_varset(&set.id).await)?;

    println!("✓ Deleted variable set {}", set);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Command;
    use crate::error::ErrorKind;
    use clap::Parser;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn run(client: &TfeClient, argv: &[&str]) -> Result<()> {
        let cli = Cli::parse_from(argv);
        let Command::Varset { action } = &cli.command else {
            panic!("expected a varset command");
        };
        run_varset_command(client, &cli, action).await
    }

    #[tokio::test]
    async fn test_var_list_resolves_varset_by_name() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/acme/varsets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": "varset-1", "type": "varsets", "attributes": {"name": "aws"}}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/varsets/varset-1/relationships/vars"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": "var-1", "type": "vars", "attributes": {
                    "key": "AWS_SECRET_ACCESS_KEY", "value": null, "category": "env", "sensitive": true
                }}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        run(
            &client,
            &[
                "tfectl", "--batch", "--org", "acme", "varset", "var-list", "--varset-name", "aws",
                "-o", "json",
            ],
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_var_create_in_varset() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/varsets/varset-1/relationships/vars"))
            .and(body_json(json!({
                "data": {"type": "vars", "attributes": {
                    "key": "region", "value": "eu-west-1", "category": "terraform",
                    "hcl": false, "sensitive": false
                }}
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "data": {"id": "var-4", "type": "vars", "attributes": {
                    "key": "region", "value": "eu-west-1", "category": "terraform"
                }}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        run(
            &client,
            &[
                "tfectl", "--batch", "--org", "acme", "varset", "var-create", "--varset-id",
                "varset-1", "--key", "region", "--value", "eu-west-1",
            ],
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
            &["tfectl", "--org", "acme", "varset", "update", "--name", "aws"],
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputContract);
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }
}
