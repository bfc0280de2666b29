//! Workspace output formatter

use serde::Serialize;

use super::common::yes_no;
use super::Tabular;
use crate::hcp::workspaces::Workspace;
use crate::hcp::TfeResource;

/// Serializable workspace for structured output (JSON/YAML)
#[derive(Serialize)]
pub struct SerializableWorkspace {
    id: String,
    name: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_id: Option<String>,
    execution_mode: String,
    terraform_version: String,
    resource_count: u32,
    locked: bool,
}

impl Tabular for Workspace {
    type Record = SerializableWorkspace;

    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "PROJECT", "MODE", "TF VERSION", "RESOURCES", "LOCKED"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name().to_string(),
            self.project_id().unwrap_or("").to_string(),
            self.execution_mode().to_string(),
            self.terraform_version().to_string(),
            self.resource_count().to_string(),
            yes_no(self.is_locked()),
        ]
    }

    fn record(&self) -> SerializableWorkspace {
        SerializableWorkspace {
            id: self.id.clone(),
            name: self.name().to_string(),
            description: self.description().to_string(),
            project_id: self.project_id().map(String::from),
            execution_mode: self.execution_mode().to_string(),
            terraform_version: self.terraform_version().to_string(),
            resource_count: self.resource_count(),
            locked: self.is_locked(),
        }
    }
}
