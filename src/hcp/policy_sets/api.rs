//! Policy set API operations
//!
//! Adding and removing policies, projects and workspaces goes through the
//! relationship editor; this module only covers the policy set itself.

use crate::error::Result;
use crate::hcp::directory::{collection_path, resource_path};
use crate::hcp::models::{document, update_document};
use crate::hcp::resource::{ResourceKind, Scope};
use crate::hcp::TfeClient;

use super::models::{Policy, PolicySet, PolicySetCreateOptions, PolicySetUpdateOptions};

impl TfeClient {
    /// List every policy set in an organization
    pub async fn list_policy_sets(&self, org: &str) -> Result<Vec<PolicySet>> {
        self.list_models(&Scope::Organization(org.to_string()))
            .await
    }

    /// List every policy in an organization
    pub async fn list_policies(&self, org: &str) -> Result<Vec<Policy>> {
        self.list_models(&Scope::Organization(org.to_string()))
            .await
    }

    /// Get a single policy set by ID
    pub async fn get_policy_set(&self, policy_set_id: &str) -> Result<PolicySet> {
        self.read_by_id(ResourceKind::PolicySet, policy_set_id)
            .await
    }

    /// Create a policy set
    pub async fn create_policy_set(
        &self,
        org: &str,
        options: &PolicySetCreateOptions,
    ) -> Result<PolicySet> {
        let scope = Scope::Organization(org.to_string());
        let path = collection_path(&scope, ResourceKind::PolicySet)?;
        let body = document(ResourceKind::PolicySet, options);
        self.create_resource(&path, &body, &format!("policy set '{}'", options.name))
            .await
    }

    /// Update a policy set
    pub async fn update_policy_set(
        &self,
        policy_set_id: &str,
        options: &PolicySetUpdateOptions,
    ) -> Result<PolicySet> {
        let path = resource_path(ResourceKind::PolicySet, policy_set_id);
        let body = update_document(ResourceKind::PolicySet, policy_set_id, options);
        self.update_resource(&path, &body, &format!("policy set '{}'", policy_set_id))
            .await
    }

    /// Delete a policy set
    pub async fn delete_policy_set(&self, policy_set_id: &str) -> Result<()> {
        let path = resource_path(ResourceKind::PolicySet, policy_set_id);
        self.delete_resource(&path, &format!("policy set '{}'", policy_set_id))
            .await
    }
}
