//! Relationship editor API operations

use std::collections::BTreeSet;

use futures::stream::TryStreamExt;
use log::debug;
use serde_json::{json, Value};

use crate::error::{Result, TfeError};
use crate::hcp::resource::{ResourceKind, ResourceRef, Scope};
use crate::hcp::TfeClient;

use super::models::{EditOperation, EditResult, RelationshipEdit};

impl TfeClient {
    /// Submit a direct edit as a single mutation
    ///
    /// Uses POST (add) or DELETE (remove) on
    /// `/<parent-type>/:id/relationships/<segment>` with the whole child set.
    pub async fn apply_edit(&self, edit: &RelationshipEdit) -> Result<EditResult> {
        let parent = edit.parent();
        let child_kind = edit.child_kind();
        let url = format!(
            "{}/{}/{}/relationships/{}",
            self.base_url(),
            parent.kind.api_type(),
            parent.id,
            edit.relationship().path_segment()
        );

        let data: Vec<Value> = edit
            .child_ids()
            .iter()
            .map(|id| json!({ "type": child_kind.api_type(), "id": id }))
            .collect();
        let body = json!({ "data": data });

        debug!(
            "Submitting {} of {} {} on {} {} to: {}",
            edit.operation(),
            edit.child_ids().len(),
            child_kind.plural(),
            parent.kind,
            parent.id,
            url
        );

        let request = match edit.operation() {
            EditOperation::Add => self.post(&url),
            EditOperation::Remove => self.delete(&url),
        };
        let response = request.json(&body).send().await?;

        match response.status().as_u16() {
            200 | 204 => {
                debug!(
                    "{} {} {} on {}",
                    edit.operation().past_tense(),
                    edit.child_ids().len(),
                    child_kind.plural(),
                    parent
                );
                Ok(EditResult {
                    parent: parent.clone(),
                    child_kind,
                    operation: edit.operation(),
                    affected: edit.child_ids().len(),
                })
            }
            404 => Err(TfeError::Api {
                status: 404,
                message: format!(
                    "{} {} not found, or one of the {} does not exist",
                    parent.kind.title(),
                    parent,
                    child_kind.plural()
                ),
            }),
            422 => {
                let body = response.text().await.unwrap_or_default();
                Err(TfeError::Api {
                    status: 422,
                    message: format!(
                        "Cannot {} {} on {} {}: {}",
                        edit.operation(),
                        child_kind.plural(),
                        parent.kind,
                        parent,
                        body
                    ),
                })
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(TfeError::Api {
                    status,
                    message: format!(
                        "Failed to {} {} on {} {}: {}",
                        edit.operation(),
                        child_kind.plural(),
                        parent.kind,
                        parent,
                        body
                    ),
                })
            }
        }
    }

    /// Ids of every workspace in a project
    pub async fn project_workspace_ids(
        &self,
        org: &str,
        project: &ResourceRef,
    ) -> Result<BTreeSet<String>> {
        let scope = Scope::Project {
            org: org.to_string(),
            project: project.clone(),
        };
        self.ref_stream(&scope, ResourceKind::Workspace)?
            .map_ok(|ws| ws.id)
            .try_collect()
            .await
    }

    /// Edit a parent's workspace association using every workspace of a project
    ///
    /// The project's workspaces are enumerated first. An empty project fails
    /// with `EmptySet` and nothing is submitted; otherwise the whole set goes
    /// out in one mutation.
    pub async fn apply_derived_edit(
        &self,
        parent: &ResourceRef,
        operation: EditOperation,
        org: &str,
        project: &ResourceRef,
    ) -> Result<EditResult> {
        let workspace_ids = self.project_workspace_ids(org, project).await?;
        debug!(
            "Project {} has {} workspace(s)",
            project,
            workspace_ids.len()
        );

        if workspace_ids.is_empty() {
            return Err(TfeError::EmptySet {
                child_kind: ResourceKind::Workspace,
                source: format!("project {}", project),
            });
        }

        let edit = RelationshipEdit::new(
            parent.clone(),
            ResourceKind::Workspace,
            operation,
            workspace_ids,
        )?;
        self.apply_edit(&edit).await
    }
}
