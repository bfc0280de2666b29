//! Policy set command handlers

use log::debug;

use crate::cli::{
    Cli, DeleteArgs, ListArgs, PolicySetAction, PolicySetCreateArgs, PolicySetTarget,
    PolicySetUpdateArgs, ReadArgs,
};
use crate::error::{Result, TfeError};
use crate::hcp::helpers::{finish_with, resolve_in_org};
use crate::hcp::relationships::{child_id_set, EditOperation, RelationshipEdit};
use crate::hcp::resource::ResourceKind;
use crate::hcp::{TfeClient, TfeResource};
use crate::output::{output_record, output_records};
use crate::ui::{confirm_action, create_spinner};

use super::models::{PolicySetCreateOptions, PolicySetUpdateOptions};

/// Run a 'policy-set' action
pub async fn run_policy_set_command(
    client: &TfeClient,
    cli: &Cli,
    action: &PolicySetAction,
) -> Result<()> {
    match action {
        PolicySetAction::Create(args) => create_policy_set(client, cli, args).await,
        PolicySetAction::Read(args) => read_policy_set(client, cli, args).await,
        PolicySetAction::List(args) => list_policy_sets(client, cli, args).await,
        PolicySetAction::Update(args) => update_policy_set(client, cli, args).await,
        PolicySetAction::Delete(args) => delete_policy_set(client, cli, args).await,
        PolicySetAction::ListPolicies(args) => list_policies(client, cli, args).await,
        PolicySetAction::AddPolicies(args) => {
            let edit = ChildEdit::new(ResourceKind::Policy, EditOperation::Add);
            edit.run(client, cli, &args.policy_set, &args.policy_ids, args.yes)
                .await
        }
        PolicySetAction::RemovePolicies(args) => {
            let edit = ChildEdit::new(ResourceKind::Policy, EditOperation::Remove);
            edit.run(client, cli, &args.policy_set, &args.policy_ids, args.yes)
                .await
        }
        PolicySetAction::AddWorkspaces(args) => {
            let edit = ChildEdit::new(ResourceKind::Workspace, EditOperation::Add);
            edit.run(client, cli, &args.policy_set, &args.workspace_ids, args.yes)
                .await
        }
        PolicySetAction::RemoveWorkspaces(args) => {
            let edit = ChildEdit::new(ResourceKind::Workspace, EditOperation::Remove);
            edit.run(client, cli, &args.policy_set, &args.workspace_ids, args.yes)
                .await
        }
        PolicySetAction::AddProjects(args) => {
            let edit = ChildEdit::new(ResourceKind::Project, EditOperation::Add);
            edit.run(client, cli, &args.policy_set, &args.project_ids, args.yes)
                .await
        }
        PolicySetAction::RemoveProjects(args) => {
            let edit = ChildEdit::new(ResourceKind::Project, EditOperation::Remove);
            edit.run(client, cli, &args.policy_set, &args.project_ids, args.yes)
                .await
        }
    }
}

async fn create_policy_set(
    client: &TfeClient,
    cli: &Cli,
    args: &PolicySetCreateArgs,
) -> Result<()> {
    let org = cli.require_org()?;
    let options = PolicySetCreateOptions {
        name: args.name.clone(),
        description: args.description.clone(),
        global: args.global,
    };

    let spinner = create_spinner(&format!("Creating policy set '{}'...", args.name), cli.batch);
    let set = finish_with(spinner, client.create_policy_set(org, &options).await)?;

    println!("✓ Created policy set '{}' ({})", set.name(), set.id);
    Ok(())
}

async fn read_policy_set(client: &TfeClient, cli: &Cli, args: &ReadArgs) -> Result<()> {
    let input = args.target.identifier()?;

    let spinner = create_spinner(&format!("Fetching policy set '{}'...", input), cli.batch);
    let result: Result<_> = async {
        let found = resolve_in_org(client, cli, ResourceKind::PolicySet, &input).await?;
        client.get_policy_set(&found.id).await
    }
    .await;
    let set = finish_with(spinner, result)?;

    output_record(&set, args.output, cli.no_header);
    Ok(())
}

async fn list_policy_sets(client: &TfeClient, cli: &Cli, args: &ListArgs) -> Result<()> {
    let org = cli.require_org()?;

    let spinner = create_spinner(&format!("Fetching policy sets for '{}'...", org), cli.batch);
    let sets = finish_with(spinner, client.list_policy_sets(org).await)?;

    if sets.is_empty() {
        eprintln!("No policy sets found in organization '{}'", org);
        return Ok(());
    }

    output_records(&sets, args.output, cli.no_header);
    Ok(())
}

async fn list_policies(client: &TfeClient, cli: &Cli, args: &ListArgs) -> Result<()> {
    let org = cli.require_org()?;

    let spinner = create_spinner(&format!("Fetching policies for '{}'...", org), cli.batch);
    let policies = finish_with(spinner, client.list_policies(org).await)?;

    if policies.is_empty() {
        eprintln!("No policies found in organization '{}'", org);
        return Ok(());
    }

    output_records(&policies, args.output, cli.no_header);
    Ok(())
}

async fn update_policy_set(
    client: &TfeClient,
    cli: &Cli,
    args: &PolicySetUpdateArgs,
) -> Result<()> {
    let input = args.target.identifier()?;
    let options = PolicySetUpdateOptions {
        name: args.new_name.clone(),
        description: args.description.clone(),
        global: args.global,
    };
    if options.is_empty() {
        return Err(TfeError::InputContract(
            "Nothing to update: pass --new-name, --description or --global".to_string(),
        ));
    }

    let spinner = create_spinner(&format!("Updating policy set '{}'...", input), cli.batch);
    let result: Result<_> = async {
        let found = resolve_in_org(client, cli, ResourceKind::PolicySet, &input).await?;
        client.update_policy_set(&found.id, &options).await
    }
    .await;
    let set = finish_with(spinner, result)?;

    println!("✓ Updated policy set '{}' ({})", set.name(), set.id);
    Ok(())
}

async fn delete_policy_set(client: &TfeClient, cli: &Cli, args: &DeleteArgs) -> Result<()> {
    let input = args.target.identifier()?;

    let spinner = create_spinner(&format!("Resolving policy set '{}'...", input), cli.batch);
    let set = finish_with(
        spinner,
        resolve_in_org(client, cli, ResourceKind::PolicySet, &input).await,
    )?;

    if !confirm_action(&format!("Delete policy set {}?", set), args.yes, cli.batch)? {
        println!("Cancelled");
        return Ok(());
    }

    let spinner = create_spinner(&format!("Deleting policy set {}...", set), cli.batch);
    finish_with(spinner, client.delete_policy_set(&set.id).await)?;

    println!("✓ Deleted policy set {}", set);
    Ok(())
}

/// One add/remove of policies, projects or workspaces on a policy set
struct ChildEdit {
    child_kind: ResourceKind,
    operation: EditOperation,
}

impl ChildEdit {
    fn new(child_kind: ResourceKind, operation: EditOperation) -> Self {
        Self {
            child_kind,
            operation,
        }
    }

    async fn run(
        &self,
        client: &TfeClient,
        cli: &Cli,
        target: &PolicySetTarget,
        ids: &[String],
        yes: bool,
    ) -> Result<()> {
        let child_ids = child_id_set(self.child_kind, ids)?;
        let input = target.identifier()?;

        let spinner = create_spinner(&format!("Resolving policy set '{}'...", input), cli.batch);
        let set = finish_with(
            spinner,
            resolve_in_org(client, cli, ResourceKind::PolicySet, &input).await,
        )?;
        let edit = RelationshipEdit::new(set, self.child_kind, self.operation, child_ids)?;
        debug!(
            "Policy set {}: {} {:?}",
            edit.parent(),
            self.operation,
            edit.child_ids()
        );

        if self.operation == EditOperation::Remove
            && !confirm_action(
                &format!(
                    "Remove {} {} from policy set {}?",
                    edit.child_ids().len(),
                    self.child_kind.plural(),
                    edit.parent()
                ),
                yes,
                cli.batch,
            )?
        {
            println!("Cancelled");
            return Ok(());
        }

        let spinner = create_spinner(
            &format!("Updating {} of policy set {}...", self.child_kind.plural(), edit.parent()),
            cli.batch,
        );
        let result = finish_with(spinner, client.apply_edit(&edit).await)?;

        let (verb, preposition) = match self.operation {
            EditOperation::Add => ("Added", "to"),
            EditOperation::Remove => ("Removed", "from"),
        };
        println!(
            "✓ {} {} {}(s) {} policy set '{}'",
            verb,
            result.affected,
            self.child_kind,
            preposition,
            result.parent.label()
        );
        Ok(())
    }
}
