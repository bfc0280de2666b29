//! Agent pool API operations

use crate::error::Result;
use crate::hcp::directory::{collection_path, resource_path};
use crate::hcp::models::{document, update_document};
use crate::hcp::resource::{ResourceKind, Scope};
use crate::hcp::TfeClient;

use super::models::{AgentPool, AgentPoolCreateOptions, AgentPoolUpdateOptions};

impl TfeClient {
    /// List every agent pool in an organization
    pub async fn list_agent_pools(&self, org: &str) -> Result<Vec<AgentPool>> {
        self.list_models(&Scope::Organization(org.to_string()))
            .await
    }

    /// Get a single agent pool by ID
    pub async fn get_agent_pool(&self, pool_id: &str) -> Result<AgentPool> {
        self.read_by_id(ResourceKind::AgentPool, pool_id).await
    }

    /// Create an agent pool
    pub async fn create_agent_pool(
        &self,
        org: &str,
        options: &AgentPoolCreateOptions,
    ) -> Result<AgentPool> {
        let scope = Scope::Organization(org.to_string());
        let path = collection_path(&scope, ResourceKind::AgentPool)?;
        let body = document(ResourceKind::AgentPool, options);
        self.create_resource(&path, &body, &format!("agent pool '{}'", options.name))
            .await
    }

    /// Update an agent pool
    pub async fn update_agent_pool(
        &self,
        pool_id: &str,
        options: &AgentPoolUpdateOptions,
    ) -> Result<AgentPool> {
        let path = resource_path(ResourceKind::AgentPool, pool_id);
        let body = update_document(ResourceKind::AgentPool, pool_id, options);
        self.update_resource(&path, &body, &format!("agent pool '{}'", pool_id))
            .await
    }

    /// Delete an agent pool
    pub async fn delete_agent_pool(&self, pool_id: &str) -> Result<()> {
        let path = resource_path(ResourceKind::AgentPool, pool_id);
        self.delete_resource(&path, &format!("agent pool '{}'", pool_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::hcp::TfeResource;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn pool_json(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "type": "agent-pools",
            "attributes": {"name": name, "organization-scoped": true}
        })
    }

    #[tokio::test]
    async fn test_create_agent_pool() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/organizations/acme/agent-pools"))
            .and(body_json(serde_json::json!({
                "data": {
                    "type": "agent-pools",
                    "attributes": {"name": "ci-pool", "organization-scoped": false}
                }
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({"data": pool_json("apool-1", "ci-pool")})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let options = AgentPoolCreateOptions {
            name: "ci-pool".to_string(),
            organization_scoped: Some(false),
        };
        let pool = client.create_agent_pool("acme", &options).await.unwrap();
        assert_eq!(pool.id, "apool-1");
        assert_eq!(pool.name(), "ci-pool");
    }

    #[tokio::test]
    async fn test_get_agent_pool_missing_is_not_found() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/agent-pools/apool-404"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&mock_server)
            .await;

        let err = client.get_agent_pool("apool-404").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("apool-404"));
    }

    #[tokio::test]
    async fn test_update_agent_pool() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("PATCH"))
            .and(path("/agent-pools/apool-1"))
            .and(body_json(serde_json::json!({
                "data": {"type": "agent-pools", "id": "apool-1", "attributes": {"name": "renamed"}}
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"data": pool_json("apool-1", "renamed")})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let options = AgentPoolUpdateOptions {
            name: Some("renamed".to_string()),
            ..Default::default()
        };
        let pool = client.update_agent_pool("apool-1", &options).await.unwrap();
        assert_eq!(pool.name(), "renamed");
    }

    #[tokio::test]
    async fn test_delete_agent_pool() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/agent-pools/apool-1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        client.delete_agent_pool("apool-1").await.unwrap();
    }
}
