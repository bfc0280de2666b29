//! Variable set output formatter

use serde::Serialize;

use super::common::yes_no;
use super::Tabular;
use crate::hcp::varsets::VariableSet;
use crate::hcp::TfeResource;

/// Serializable variable set for structured output (JSON/YAML)
#[derive(Serialize)]
pub struct SerializableVariableSet {
    id: String,
    name: String,
    description: String,
    global: bool,
    var_count: u32,
    workspace_count: u32,
    project_count: u32,
}

impl Tabular for VariableSet {
    type Record = SerializableVariableSet;

    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "GLOBAL", "VARS", "WORKSPACES", "PROJECTS", "DESCRIPTION"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name().to_string(),
            yes_no(self.attributes.global),
            self.var_count().to_string(),
            self.workspace_count().to_string(),
            self.project_count().to_string(),
            self.description().to_string(),
        ]
    }

    fn record(&self) -> SerializableVariableSet {
        SerializableVariableSet {
            id: self.id.clone(),
            name: self.name().to_string(),
            description: self.description().to_string(),
            global: self.attributes.global,
            var_count: self.var_count(),
            workspace_count: self.workspace_count(),
            project_count: self.project_count(),
        }
    }
}
