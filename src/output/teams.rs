//! Team output formatter

use serde::Serialize;

use super::Tabular;
use crate::hcp::teams::Team;
use crate::hcp::TfeResource;

/// Serializable team for structured output (JSON/YAML)
#[derive(Serialize)]
pub struct SerializableTeam {
    id: String,
    name: String,
    visibility: String,
    users_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    sso_team_id: Option<String>,
}

impl Tabular for Team {
    type Record = SerializableTeam;

    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "VISIBILITY", "USERS", "SSO TEAM ID"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name().to_string(),
            self.visibility().to_string(),
            self.users_count().to_string(),
            self.sso_team_id().to_string(),
        ]
    }

    fn record(&self) -> SerializableTeam {
        SerializableTeam {
            id: self.id.clone(),
            name: self.name().to_string(),
            visibility: self.visibility().to_string(),
            users_count: self.users_count(),
            sso_team_id: self.attributes.sso_team_id.clone(),
        }
    }
}
