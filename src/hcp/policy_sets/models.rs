//! Policy set and policy data models

use serde::{Deserialize, Serialize};

use crate::hcp::resource::ResourceKind;
use crate::hcp::traits::TfeResource;

/// Policy set data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct PolicySet {
    pub id: String,
    #[serde(rename = "type")]
    pub set_type: Option<String>,
    pub attributes: PolicySetAttributes,
}

/// Policy set attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct PolicySetAttributes {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub global: bool,
    pub kind: Option<String>,
    pub policy_count: Option<u32>,
    pub workspace_count: Option<u32>,
    pub project_count: Option<u32>,
    pub created_at: Option<String>,
}

impl TfeResource for PolicySet {
    const KIND: ResourceKind = ResourceKind::PolicySet;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.name
    }
}

impl PolicySet {
    pub fn description(&self) -> &str {
        self.attributes.description.as_deref().unwrap_or("")
    }

    pub fn kind(&self) -> &str {
        self.attributes.kind.as_deref().unwrap_or("")
    }
}

/// Policy data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Policy {
    pub id: String,
    #[serde(rename = "type")]
    pub policy_type: Option<String>,
    pub attributes: PolicyAttributes,
}

/// Policy attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct PolicyAttributes {
    pub name: String,
    pub description: Option<String>,
    pub kind: Option<String>,
    pub enforcement_level: Option<String>,
    pub policy_set_count: Option<u32>,
}

impl TfeResource for Policy {
    const KIND: ResourceKind = ResourceKind::Policy;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.name
    }
}

/// Attributes sent when creating a policy set
#[derive(Serialize, Debug, Clone)]
pub struct PolicySetCreateOptions {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub global: bool,
}

/// Attributes sent when updating a policy set
#[derive(Serialize, Debug, Clone, Default)]
pub struct PolicySetUpdateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<bool>,
}

impl PolicySetUpdateOptions {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.global.is_none()
    }
}
