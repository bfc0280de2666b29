//! Agent pool data models

use serde::{Deserialize, Serialize};

use crate::hcp::models::RelationshipMany;
use crate::hcp::resource::ResourceKind;
use crate::hcp::traits::TfeResource;

/// Agent pool data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct AgentPool {
    pub id: String,
    #[serde(rename = "type")]
    pub pool_type: Option<String>,
    pub attributes: AgentPoolAttributes,
    #[serde(default)]
    pub relationships: Option<AgentPoolRelationships>,
}

/// Agent pool attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct AgentPoolAttributes {
    pub name: String,
    #[serde(default)]
    pub organization_scoped: bool,
    pub agent_count: Option<u32>,
    pub created_at: Option<String>,
}

/// Agent pool relationships from TFE API
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct AgentPoolRelationships {
    #[serde(default)]
    pub allowed_workspaces: RelationshipMany,
}

impl TfeResource for AgentPool {
    const KIND: ResourceKind = ResourceKind::AgentPool;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.name
    }
}

impl AgentPool {
    pub fn agent_count(&self) -> u32 {
        self.attributes.agent_count.unwrap_or(0)
    }

    /// Number of workspaces explicitly allowed to use the pool
    pub fn allowed_workspace_count(&self) -> usize {
        self.relationships
            .as_ref()
            .map(|r| r.allowed_workspaces.len())
            .unwrap_or(0)
    }

    pub fn created_at(&self) -> &str {
        self.attributes.created_at.as_deref().unwrap_or("")
    }
}

/// Attributes sent when creating an agent pool
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct AgentPoolCreateOptions {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_scoped: Option<bool>,
}

/// Attributes sent when updating an agent pool
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct AgentPoolUpdateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_scoped: Option<bool>,
}

impl AgentPoolUpdateOptions {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.organization_scoped.is_none()
    }
}
