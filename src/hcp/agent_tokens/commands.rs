//! Agent token command handlers

use crate::cli::{
    AgentTokenAction, AgentTokenCreateArgs, AgentTokenDeleteArgs, AgentTokenListArgs,
    AgentTokenReadArgs, Cli,
};
use crate::error::{Result, TfeError};
use crate::hcp::helpers::{finish_with, resolve_in_org};
use crate::hcp::resource::ResourceKind;
use crate::hcp::TfeClient;
use crate::output::{output_record, output_records};
use crate::ui::{confirm_action, create_spinner};

use super::models::AgentTokenCreateOptions;

/// Run an 'agent-token' action
pub async fn run_agent_token_command(
    client: &TfeClient,
    cli: &Cli,
    action: &AgentTokenAction,
) -> Result<()> {
    match action {
        AgentTokenAction::Create(args) => create_token(client, cli, args).await,
        AgentTokenAction::Read(args) => read_token(client, cli, args).await,
        AgentTokenAction::List(args) => list_tokens(client, cli, args).await,
        AgentTokenAction::Delete(args) => delete_token(client, cli, args).await,
    }
}

async fn create_token(client: &TfeClient, cli: &Cli, args: &AgentTokenCreateArgs) -> Result<()> {
    let pool_input = args.pool.identifier()?;
    let options = AgentTokenCreateOptions {
        description: args.description.clone().filter(|d| !d.trim().is_empty()),
    };

    let spinner = create_spinner(
        &format!("Creating token in agent pool '{}'...", pool_input),
        cli.batch,
    );
    let result: Result<_> = async {
        let pool = resolve_in_org(client, cli, ResourceKind::AgentPool, &pool_input).await?;
        let token = client.create_agent_token(&pool, &options).await?;
        Ok((pool, token))
    }
    .await;
    let (pool, token) = finish_with(spinner, result)?;

    println!("✓ Created agent token {} in agent pool {}", token.id, pool);
    match token.secret() {
        Some(secret) => {
            println!("Token: {}", secret);
            eprintln!("⚠ Save this token now; it cannot be shown again");
        }
        None => {
            return Err(TfeError::Api {
                status: 201,
                message: format!("Agent token {} was created but no secret was returned", token.id),
            })
        }
    }
    Ok(())
}

async fn read_token(client: &TfeClient, cli: &Cli, args: &AgentTokenReadArgs) -> Result<()> {
    let id = require_token_id(&args.id)?;

    let spinner = create_spinner(&format!("Fetching agent token '{}'...", id), cli.batch);
    let token = finish_with(spinner, client.get_agent_token(id).await)?;

    output_record(&token, args.output, cli.no_header);
    Ok(())
}

async fn list_tokens(client: &TfeClient, cli: &Cli, args: &AgentTokenListArgs) -> Result<()> {
    let pool_input = args.pool.identifier()?;

    let spinner = create_spinner(
        &format!("Fetching tokens of agent pool '{}'...", pool_input),
        cli.batch,
    );
    let result: Result<_> = async {
        let pool = resolve_in_org(client, cli, ResourceKind::AgentPool, &pool_input).await?;
        let tokens = client.list_agent_tokens(&pool).await?;
        Ok((pool, tokens))
    }
    .await;
    let (pool, tokens) = finish_with(spinner, result)?;

    if tokens.is_empty() {
        eprintln!("No agent tokens found in agent pool {}", pool);
        return Ok(());
    }

    output_records(&tokens, args.output, cli.no_header);
    Ok(())
}

async fn delete_token(client: &TfeClient, cli: &Cli, args: &AgentTokenDeleteArgs) -> Result<()> {
    let id = require_token_id(&args.id)?;

    if !confirm_action(&format!("Delete agent token '{}'?", id), args.yes, cli.batch)? {
        println!("Cancelled");
        return Ok(());
    }

    let spinner = create_spinner(&format!("Deleting agent token '{}'...", id), cli.batch);
    finish_with(spinner, client.delete_agent_token(id).await)?;

    println!("✓ Deleted agent token '{}'", id);
    Ok(())
}

fn require_token_id(id: &str) -> Result<&str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(TfeError::InputContract(
            "Please provide an agent token --id".to_string(),
        ));
    }
    Ok(id)
}
