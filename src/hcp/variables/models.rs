//! Variable data models

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hcp::resource::ResourceKind;
use crate::hcp::traits::TfeResource;

/// Where a variable is injected at run time
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VariableCategory {
    #[default]
    Terraform,
    Env,
}

impl fmt::Display for VariableCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableCategory::Terraform => write!(f, "terraform"),
            VariableCategory::Env => write!(f, "env"),
        }
    }
}

/// Variable data from TFE API (workspace or variable set)
#[derive(Deserialize, Debug, Clone)]
pub struct Variable {
    pub id: String,
    #[serde(rename = "type")]
    pub var_type: Option<String>,
    pub attributes: VariableAttributes,
}

/// Variable attributes from TFE API
///
/// The API returns `null` for the value of sensitive variables.
#[derive(Deserialize, Debug, Clone)]
pub struct VariableAttributes {
    pub key: String,
    pub value: Option<String>,
    #[serde(default)]
    pub sensitive: bool,
    #[serde(default)]
    pub hcl: bool,
    #[serde(default)]
    pub category: VariableCategory,
    pub description: Option<String>,
}

impl TfeResource for Variable {
    const KIND: ResourceKind = ResourceKind::Variable;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.key
    }
}

/// Attributes sent when creating a variable
#[derive(Serialize, Debug, Clone)]
pub struct VariableCreateOptions {
    pub key: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: VariableCategory,
    pub hcl: bool,
    pub sensitive: bool,
}

/// Attributes sent when updating a variable; absent fields are left unchanged
#[derive(Serialize, Debug, Clone, Default)]
pub struct VariableUpdateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hcl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
}

impl VariableUpdateOptions {
    pub fn is_empty(&self) -> bool {
        self.key.is_none()
            && self.value.is_none()
            && self.description.is_none()
            && self.hcl.is_none()
            && self.sensitive.is_none()
    }
}
