//! Policy set and policy output formatters

use serde::Serialize;

use super::common::yes_no;
use super::Tabular;
use crate::hcp::policy_sets::{Policy, PolicySet};
use crate::hcp::TfeResource;

fn count(value: Option<u32>) -> String {
    value.map(|c| c.to_string()).unwrap_or_default()
}

/// Serializable policy set for structured output (JSON/YAML)
#[derive(Serialize)]
pub struct SerializablePolicySet {
    id: String,
    name: String,
    description: String,
    kind: String,
    global: bool,
    policy_count: Option<u32>,
    workspace_count: Option<u32>,
    project_count: Option<u32>,
}

impl Tabular for PolicySet {
    type Record = SerializablePolicySet;

    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "KIND", "GLOBAL", "POLICIES", "WORKSPACES", "PROJECTS", "DESCRIPTION"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name().to_string(),
            self.kind().to_string(),
            yes_no(self.attributes.global),
            count(self.attributes.policy_count),
            count(self.attributes.workspace_count),
            count(self.attributes.project_count),
            self.description().to_string(),
        ]
    }

    fn record(&self) -> SerializablePolicySet {
        SerializablePolicySet {
            id: self.id.clone(),
            name: self.name().to_string(),
            description: self.description().to_string(),
            kind: self.kind().to_string(),
            global: self.attributes.global,
            policy_count: self.attributes.policy_count,
            workspace_count: self.attributes.workspace_count,
            project_count: self.attributes.project_count,
        }
    }
}

/// Serializable policy for structured output (JSON/YAML)
#[derive(Serialize)]
pub struct SerializablePolicy {
    id: String,
    name: String,
    kind: String,
    enforcement_level: String,
    policy_set_count: Option<u32>,
}

impl Tabular for Policy {
    type Record = SerializablePolicy;

    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "KIND", "ENFORCEMENT", "POLICY SETS"]
    }

    fn row(&self) -> Vec<String> {
        let record = self.record();
        vec![
            record.id,
            record.name,
            record.kind,
            record.enforcement_level,
            count(record.policy_set_count),
        ]
    }

    fn record(&self) -> SerializablePolicy {
        SerializablePolicy {
            id: self.id.clone(),
            name: self.name().to_string(),
            kind: self.attributes.kind.clone().unwrap_or_default(),
            enforcement_level: self.attributes.enforcement_level.clone().unwrap_or_default(),
            policy_set_count: self.attributes.policy_set_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_set_row_blank_counts() {
        let set: PolicySet = serde_json::from_value(serde_json::json!({
            "id": "polset-1",
            "attributes": {"name": "baseline", "policy-count": 2}
        }))
        .unwrap();
        let row = set.row();
        assert_eq!(row[4], "2");
        assert_eq!(row[5], "");
        assert_eq!(row.len(), PolicySet::headers().len());
    }

    #[test]
    fn test_policy_row() {
        let policy: Policy = serde_json::from_value(serde_json::json!({
            "id": "pol-1",
            "attributes": {"name": "tags", "kind": "sentinel", "enforcement-level": "advisory"}
        }))
        .unwrap();
        assert_eq!(policy.row(), vec!["pol-1", "tags", "sentinel", "advisory", ""]);
    }
}
