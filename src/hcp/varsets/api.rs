//! Variable set API operations

use crate::error::Result;
use crate::hcp::directory::{collection_path, resource_path};
use crate::hcp::models::{document, update_document};
use crate::hcp::resource::{ResourceKind, Scope};
use crate::hcp::TfeClient;

use super::models::{VariableSet, VariableSetCreateOptions, VariableSetUpdateOptions};

impl TfeClient {
    /// Get all variable sets in an organization
    pub async fn list_varsets(&self, org: &str) -> Result<Vec<VariableSet>> {
        self.list_models(&Scope::Organization(org.to_string()))
            .await
    }

    pub async fn get_varset(&self, varset_id: &str) -> Result<VariableSet> {
        self.read_by_id(ResourceKind::VariableSet, varset_id).await
    }

    pub async fn create_varset(
        &self,
        org: &str,
        options: &VariableSetCreateOptions,
    ) -> Result<VariableSet> {
        let scope = Scope::Organization(org.to_string());
        let path = collection_path(&scope, ResourceKind::VariableSet)?;
        let body = document(ResourceKind::VariableSet, options);
        self.create_resource(&path, &body, &format!("variable set '{}'", options.name))
            .await
    }

    pub async fn update_varset(
        &self,
        varset_id: &str,
        options: &VariableSetUpdateOptions,
    ) -> Result<VariableSet> {
        let path = resource_path(ResourceKind::VariableSet, varset_id);
        let body = update_document(ResourceKind::VariableSet, varset_id, options);
        self.update_resource(&path, &body, &format!("variable set '{}'", varset_id))
            .await
    }

    pub async fn delete_varset(&self, varset_id: &str) -> Result<()> {
        let path = resource_path(ResourceKind::VariableSet, varset_id);
        self.delete_resource(&path, &format!("variable set '{}'", varset_id))
            .await
    }
}
