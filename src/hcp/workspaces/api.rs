//! Workspace API operations

use log::debug;
use serde_json::json;

use crate::error::Result;
use crate::hcp::directory::{collection_path, resource_path};
use crate::hcp::models::{document, document_with_relationships, linkage, update_document};
use crate::hcp::resource::{ResourceKind, ResourceRef, Scope};
use crate::hcp::TfeClient;

use super::models::{Workspace, WorkspaceCreateOptions, WorkspaceUpdateOptions};

impl TfeClient {
    /// List workspaces in an organization, optionally only those of one project
    pub async fn list_workspaces(
        &self,
        org: &str,
        project: Option<&ResourceRef>,
    ) -> Result<Vec<Workspace>> {
        let scope = match project {
            Some(project) => Scope::Project {
                org: org.to_string(),
                project: project.clone(),
            },
            None => Scope::Organization(org.to_string()),
        };
        let workspaces: Vec<Workspace> = self.list_models(&scope).await?;
        debug!("Found {} workspace(s) in {}", workspaces.len(), scope);
        Ok(workspaces)
    }

    /// Get a single workspace by ID
    pub async fn get_workspace(&self, workspace_id: &str) -> Result<Workspace> {
        self.read_by_id(ResourceKind::Workspace, workspace_id).await
    }

    /// Create a workspace, placing it in `project` when given
    pub async fn create_workspace(
        &self,
        org: &str,
        options: &WorkspaceCreateOptions,
        project: Option<&ResourceRef>,
    ) -> Result<Workspace> {
        let scope = Scope::Organization(org.to_string());
        let path = collection_path(&scope, ResourceKind::Workspace)?;
        let body = match project {
            Some(project) => document_with_relationships(
                ResourceKind::Workspace,
                options,
                json!({ "project": linkage(ResourceKind::Project, &project.id) }),
            ),
            None => document(ResourceKind::Workspace, options),
        };
        self.create_resource(&path, &body, &format!("workspace '{}'", options.name))
            .await
    }

    pub async fn update_workspace(
        &self,
        workspace_id: &str,
        options: &WorkspaceUpdateOptions,
    ) -> Result<Workspace> {
        let path = resource_path(ResourceKind::Workspace, workspace_id);
        let body = update_document(ResourceKind::Workspace, workspace_id, options);
        self.update_resource(&path, &body, &format!("workspace '{}'", workspace_id))
            .await
    }

    pub async fn delete_workspace(&self, workspace_id: &str) -> Result<()> {
        let path = resource_path(ResourceKind::Workspace, workspace_id);
        self.delete_resource(&path, &format!("workspace '{}'", workspace_id))
            .await
    }
}
