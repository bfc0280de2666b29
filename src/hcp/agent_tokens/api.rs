//! Agent token API operations

use crate::error::Result;
use crate::hcp::directory::{collection_path, resource_path};
use crate::hcp::models::document;
use crate::hcp::resource::{ResourceKind, ResourceRef, Scope};
use crate::hcp::TfeClient;

use super::models::{AgentToken, AgentTokenCreateOptions};

impl TfeClient {
    /// List tokens of an agent pool
    pub async fn list_agent_tokens(&self, pool: &ResourceRef) -> Result<Vec<AgentToken>> {
        self.list_models(&Scope::AgentPool(pool.clone())).await
    }

    /// Get a single agent token by ID
    pub async fn get_agent_token(&self, token_id: &str) -> Result<AgentToken> {
        self.read_by_id(ResourceKind::AgentToken, token_id).await
    }

    /// Create a token in an agent pool; the response carries the secret
    pub async fn create_agent_token(
        &self,
        pool: &ResourceRef,
        options: &AgentTokenCreateOptions,
    ) -> Result<AgentToken> {
        let path = collection_path(&Scope::AgentPool(pool.clone()), ResourceKind::AgentToken)?;
        let body = document(ResourceKind::AgentToken, options);
        self.create_resource(&path, &body, &format!("agent token in agent pool {}", pool))
            .await
    }

    /// Delete an agent token
    pub async fn delete_agent_token(&self, token_id: &str) -> Result<()> {
        let path = resource_path(ResourceKind::AgentToken, token_id);
        self.delete_resource(&path, &format!("agent token '{}'", token_id))
            .await
    }
}
