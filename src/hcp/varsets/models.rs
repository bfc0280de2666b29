//! Variable set data models

use serde::{Deserialize, Serialize};

use crate::hcp::resource::ResourceKind;
use crate::hcp::traits::TfeResource;

/// Variable set data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct VariableSet {
    pub id: String,
    #[serde(rename = "type")]
    pub varset_type: Option<String>,
    pub attributes: VariableSetAttributes,
}

/// Variable set attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct VariableSetAttributes {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub global: bool,
    pub var_count: Option<u32>,
    pub workspace_count: Option<u32>,
    pub project_count: Option<u32>,
    pub updated_at: Option<String>,
}

impl TfeResource for VariableSet {
    const KIND: ResourceKind = ResourceKind::VariableSet;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.name
    }
}

impl VariableSet {
    pub fn description(&self) -> &str {
        self.attributes.description.as_deref().unwrap_or("")
    }

    pub fn var_count(&self) -> u32 {
        self.attributes.var_count.unwrap_or(0)
    }

    pub fn workspace_count(&self) -> u32 {
        self.attributes.workspace_count.unwrap_or(0)
    }

    pub fn project_count(&self) -> u32 {
        self.attributes.project_count.unwrap_or(0)
    }
}

/// Attributes sent when creating a variable set
#[derive(Serialize, Debug, Clone)]
pub struct VariableSetCreateOptions {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub global: bool,
}

/// Attributes sent when updating a variable set
#[derive(Serialize, Debug, Clone, Default)]
pub struct VariableSetUpdateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<bool>,
}

impl VariableSetUpdateOptions {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.global.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_varset() {
        let set: VariableSet = serde_json::from_value(serde_json::json!({
            "id": "varset-1",
            "type": "varsets",
            "attributes": {
                "name": "aws-creds",
                "global": true,
                "var-count": 3,
                "workspace-count": 0
            }
        }))
        .unwrap();
        assert_eq!(set.name(), "aws-creds");
        assert!(set.attributes.global);
        assert_eq!(set.var_count(), 3);
        assert_eq!(set.project_count(), 0);
        assert_eq!(set.description(), "");
    }
}
