//! Team API operations

use crate::error::Result;
use crate::hcp::directory::{collection_path, resource_path};
use crate::hcp::models::{document, update_document};
use crate::hcp::resource::{ResourceKind, Scope};
use crate::hcp::TfeClient;

use super::models::{Team, TeamCreateOptions, TeamUpdateOptions};

impl TfeClient {
    /// Get all teams in an organization
    pub async fn list_teams(&self, org: &str) -> Result<Vec<Team>> {
        self.list_models(&Scope::Organization(org.to_string()))
            .await
    }

    /// Get a single team by ID
    pub async fn get_team(&self, team_id: &str) -> Result<Team> {
        self.read_by_id(ResourceKind::Team, team_id).await
    }

    pub async fn create_team(&self, org: &str, options: &TeamCreateOptions) -> Result<Team> {
        let scope = Scope::Organization(org.to_string());
        let path = collection_path(&scope, ResourceKind::Team)?;
        let body = document(ResourceKind::Team, options);
        self.create_resource(&path, &body, &format!("team '{}'", options.name))
            .await
    }

    pub async fn update_team(&self, team_id: &str, options: &TeamUpdateOptions) -> Result<Team> {
        let path = resource_path(ResourceKind::Team, team_id);
        let body = update_document(ResourceKind::Team, team_id, options);
        self.update_resource(&path, &body, &format!("team '{}'", team_id))
            .await
    }

    pub async fn delete_team(&self, team_id: &str) -> Result<()> {
        let path = resource_path(ResourceKind::Team, team_id);
        self.delete_resource(&path, &format!("team '{}'", team_id))
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

    fn team_json(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "type": "teams",
            "attributes": {"name": name, "visibility": "organization", "users-count": 1}
        })
    }

    #[tokio::test]
    async fn test_list_teams() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/acme/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [team_json("team-1", "owners"), team_json("team-2", "devs")]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let teams = client.list_teams("acme").await.unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[1].name(), "devs");
    }

    #[tokio::test]
    async fn test_create_team_body() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/organizations/acme/teams"))
            .and(body_json(serde_json::json!({
                "data": {"type": "teams", "attributes": {"name": "devs", "visibility": "secret"}}
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({"data": team_json("team-9", "devs")})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let options = TeamCreateOptions {
            name: "devs".to_string(),
            visibility: Some("secret".to_string()),
        };
        let team = client.create_team("acme", &options).await.unwrap();
        assert_eq!(team.id, "team-9");
    }

    #[tokio::test]
    async fn test_get_team_not_found() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/teams/team-404"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let err = client.get_team("team-404").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
