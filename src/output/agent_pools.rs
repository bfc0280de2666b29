//! Agent pool output formatter

use serde::Serialize;

use super::common::yes_no;
use super::Tabular;
use crate::hcp::agent_pools::AgentPool;
use crate::hcp::TfeResource;

/// Serializable agent pool for structured output (JSON/YAML)
#[derive(Serialize)]
pub struct SerializableAgentPool {
    id: String,
    name: String,
    organization_scoped: bool,
    agent_count: u32,
    allowed_workspaces: usize,
    created_at: String,
}

impl Tabular for AgentPool {
    type Record = SerializableAgentPool;

    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "ORG SCOPED", "AGENTS", "WORKSPACES", "CREATED"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name().to_string(),
            yes_no(self.attributes.organization_scoped),
            self.agent_count().to_string(),
            self.allowed_workspace_count().to_string(),
            self.created_at().to_string(),
        ]
    }

    fn record(&self) -> SerializableAgentPool {
        SerializableAgentPool {
            id: self.id.clone(),
            name: self.name().to_string(),
            organization_scoped: self.attributes.organization_scoped,
            agent_count: self.agent_count(),
            allowed_workspaces: self.allowed_workspace_count(),
            created_at: self.created_at().to_string(),
        }
    }
}
