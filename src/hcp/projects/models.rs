//! Project data models

use serde::{Deserialize, Serialize};

use crate::hcp::resource::ResourceKind;
use crate::hcp::traits::TfeResource;

/// Project data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Project {
    pub id: String,
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    pub attributes: ProjectAttributes,
}

/// Project attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectAttributes {
    pub name: String,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub workspace_count: Option<u32>,
}

impl TfeResource for Project {
    const KIND: ResourceKind = ResourceKind::Project;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.name
    }
}

impl Project {
    /// Get the project description
    pub fn description(&self) -> &str {
        self.attributes.description.as_deref().unwrap_or("")
    }

    pub fn created_at(&self) -> &str {
        self.attributes.created_at.as_deref().unwrap_or("")
    }
}

/// Attributes sent when creating a project
#[derive(Serialize, Debug, Clone)]
pub struct ProjectCreateOptions {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Attributes sent when updating a project
#[derive(Serialize, Debug, Clone, Default)]
pub struct ProjectUpdateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProjectUpdateOptions {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}
