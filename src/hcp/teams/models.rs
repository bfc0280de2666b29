//! Team data models

use serde::{Deserialize, Serialize};

use crate::hcp::resource::ResourceKind;
use crate::hcp::traits::TfeResource;

/// Team data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Team {
    pub id: String,
    #[serde(rename = "type")]
    pub team_type: Option<String>,
    pub attributes: TeamAttributes,
}

/// Team attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct TeamAttributes {
    pub name: String,
    #[serde(rename = "sso-team-id")]
    pub sso_team_id: Option<String>,
    #[serde(rename = "users-count")]
    pub users_count: Option<u32>,
    pub visibility: Option<String>,
}

impl TfeResource for Team {
    const KIND: ResourceKind = ResourceKind::Team;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.name
    }
}

impl Team {
    pub fn visibility(&self) -> &str {
        self.attributes.visibility.as_deref().unwrap_or("")
    }

    pub fn users_count(&self) -> u32 {
        self.attributes.users_count.unwrap_or(0)
    }

    pub fn sso_team_id(&self) -> &str {
        self.attributes.sso_team_id.as_deref().unwrap_or("")
    }
}

/// Attributes sent when creating a team
#[derive(Serialize, Debug, Clone)]
pub struct TeamCreateOptions {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

/// Attributes sent when updating a team
#[derive(Serialize, Debug, Clone, Default)]
pub struct TeamUpdateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

impl TeamUpdateOptions {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.visibility.is_none()
    }
}
