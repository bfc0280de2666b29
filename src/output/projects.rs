//! Project output formatter

use serde::Serialize;

use super::Tabular;
use crate::hcp::projects::Project;
use crate::hcp::TfeResource;

/// Serializable project for structured output (JSON/YAML)
#[derive(Serialize)]
pub struct SerializableProject {
    id: String,
    name: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    workspace_count: Option<u32>,
}

impl Tabular for Project {
    type Record = SerializableProject;

    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "DESCRIPTION", "CREATED"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name().to_string(),
            self.description().to_string(),
            self.created_at().to_string(),
        ]
    }

    fn record(&self) -> SerializableProject {
        SerializableProject {
            id: self.id.clone(),
            name: self.name().to_string(),
            description: self.description().to_string(),
            workspace_count: self.attributes.workspace_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_row_and_record() {
        let prj: Project = serde_json::from_value(serde_json::json!({
            "id": "prj-1",
            "attributes": {"name": "infra", "description": "shared", "workspace-count": 4}
        }))
        .unwrap();
        assert_eq!(prj.row(), vec!["prj-1", "infra", "shared", ""]);

        let json = serde_json::to_value(prj.record()).unwrap();
        assert_eq!(json["workspace_count"], 4);
    }
}
