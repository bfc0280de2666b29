//! Variable output formatter
//!
//! Values are taken from `render_value`, so sensitive variables are shown as
//! the redaction marker in every format.

use serde::Serialize;

use super::common::yes_no;
use super::Tabular;
use crate::hcp::variables::VariableRecord;

/// Serializable variable for structured output (JSON/YAML)
#[derive(Serialize)]
pub struct SerializableVariable {
    id: String,
    key: String,
    value: String,
    category: String,
    sensitive: bool,
    hcl: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl From<&VariableRecord> for SerializableVariable {
    fn from(var: &VariableRecord) -> Self {
        Self {
            id: var.id.clone(),
            key: var.key.clone(),
            value: var.render_value().to_string(),
            category: var.category.to_string(),
            sensitive: var.sensitive,
            hcl: var.hcl,
            description: var.description.clone(),
        }
    }
}

impl Tabular for VariableRecord {
    type Record = SerializableVariable;

    fn headers() -> &'static [&'static str] {
        &["ID", "KEY", "VALUE", "CATEGORY", "SENSITIVE", "HCL", "DESCRIPTION"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.key.clone(),
            self.render_value().to_string(),
            self.category.to_string(),
            yes_no(self.sensitive),
            yes_no(self.hcl),
            self.description.clone().unwrap_or_default(),
        ]
    }

    fn record(&self) -> SerializableVariable {
        SerializableVariable::from(self)
    }
}
