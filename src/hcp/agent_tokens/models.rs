//! Agent token data models

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hcp::resource::ResourceKind;
use crate::hcp::traits::TfeResource;

/// Agent token data from TFE API
#[derive(Deserialize, Clone)]
pub struct AgentToken {
    pub id: String,
    #[serde(rename = "type")]
    pub token_type: Option<String>,
    pub attributes: AgentTokenAttributes,
}

/// Agent token attributes from TFE API
///
/// `token` is only present in the response to a create request.
#[derive(Deserialize, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct AgentTokenAttributes {
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub last_used_at: Option<String>,
    pub token: Option<String>,
}

impl fmt::Debug for AgentToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentToken")
            .field("id", &self.id)
            .field("description", &self.attributes.description)
            .field("created_at", &self.attributes.created_at)
            .field("last_used_at", &self.attributes.last_used_at)
            .finish_non_exhaustive()
    }
}

impl TfeResource for AgentToken {
    const KIND: ResourceKind = ResourceKind::AgentToken;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        self.description()
    }
}

impl AgentToken {
    pub fn description(&self) -> &str {
        self.attributes.description.as_deref().unwrap_or("")
    }

    pub fn created_at(&self) -> &str {
        self.attributes.created_at.as_deref().unwrap_or("")
    }

    pub fn last_used_at(&self) -> &str {
        self.attributes.last_used_at.as_deref().unwrap_or("")
    }

    /// Secret value, returned once at creation
    pub fn secret(&self) -> Option<&str> {
        self.attributes.token.as_deref()
    }
}

/// Attributes sent when creating an agent token
#[derive(Serialize, Debug, Clone, Default)]
pub struct AgentTokenCreateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
