//! Project API operations

use crate::error::Result;
use crate::hcp::directory::{collection_path, resource_path};
use crate::hcp::models::{document, update_document};
use crate::hcp::resource::{ResourceKind, Scope};
use crate::hcp::TfeClient;

use super::models::{Project, ProjectCreateOptions, ProjectUpdateOptions};

impl TfeClient {
    /// Get all projects in an organization
    pub async fn list_projects(&self, org: &str) -> Result<Vec<Project>> {
        self.list_models(&Scope::Organization(org.to_string()))
            .await
    }

    /// Get a single project by ID
    pub async fn get_project(&self, project_id: &str) -> Result<Project> {
        self.read_by_id(ResourceKind::Project, project_id).await
    }

    /// Create a project
    pub async fn create_project(
        &self,
        org: &str,
        options: &ProjectCreateOptions,
    ) -> Result<Project> {
        let scope = Scope::Organization(org.to_string());
        let path = collection_path(&scope, ResourceKind::Project)?;
        let body = document(ResourceKind::Project, options);
        self.create_resource(&path, &body, &format!("project '{}'", options.name))
            .await
    }

    /// Update a project
    pub async fn update_project(
        &self,
        project_id: &str,
        options: &ProjectUpdateOptions,
    ) -> Result<Project> {
        let path = resource_path(ResourceKind::Project, project_id);
        let body = update_document(ResourceKind::Project, project_id, options);
        self.update_resource(&path, &body, &format!("project '{}'", project_id))
            .await
    }

    /// Delete a project
    pub async fn delete_project(&self, project_id: &str) -> Result<()> {
        let path = resource_path(ResourceKind::Project, project_id);
        self.delete_resource(&path, &format!("project '{}'", project_id))
            .await
    }
}
