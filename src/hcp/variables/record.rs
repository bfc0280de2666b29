//! Variable records and the sensitive value guard
//!
//! `VariableRecord` keeps its value private. The only way to get a value out
//! for display is [`render_value`], which substitutes a fixed marker for every
//! sensitive variable.

use std::fmt;

use crate::config::display::REDACTION_MARKER;

use super::models::{Variable, VariableCategory};

/// A workspace or variable-set variable as held in memory
#[derive(Clone, PartialEq, Eq)]
pub struct VariableRecord {
    pub id: String,
    pub key: String,
    value: String,
    pub sensitive: bool,
    pub hcl: bool,
    pub category: VariableCategory,
    pub description: Option<String>,
}

impl VariableRecord {
    pub fn new(
        id: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
        sensitive: bool,
        hcl: bool,
        category: VariableCategory,
        description: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
            value: value.into(),
            sensitive,
            hcl,
            category,
            description,
        }
    }

    /// Display-safe value
    pub fn render_value(&self) -> &str {
        render_value(self)
    }
}

impl fmt::Debug for VariableRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariableRecord")
            .field("id", &self.id)
            .field("key", &self.key)
            .field("value", &render_value(self))
            .field("sensitive", &self.sensitive)
            .field("hcl", &self.hcl)
            .field("category", &self.category)
            .field("description", &self.description)
            .finish()
    }
}

impl From<Variable> for VariableRecord {
    fn from(var: Variable) -> Self {
        let attrs = var.attributes;
        Self {
            id: var.id,
            key: attrs.key,
            value: attrs.value.unwrap_or_default(),
            sensitive: attrs.sensitive,
            hcl: attrs.hcl,
            category: attrs.category,
            description: attrs.description.filter(|d| !d.is_empty()),
        }
    }
}

/// Value to show for a variable
///
/// The literal value when the variable is not sensitive, otherwise
/// the redaction marker regardless of what is held in memory.
pub fn render_value(record: &VariableRecord) -> &str {
    if record.sensitive {
        REDACTION_MARKER
    } else {
        &record.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(value: &str, sensitive: bool) -> VariableRecord {
        VariableRecord::new(
            "var-1",
            "token",
            value,
            sensitive,
            false,
            VariableCategory::Env,
            None,
        )
    }

    #[test]
    fn test_plain_value_is_shown() {
        assert_eq!(render_value(&record("eu-west-1", false)), "eu-west-1");
    }

    #[test]
    fn test_plain_empty_value_is_shown_empty() {
        assert_eq!(render_value(&record("", false)), "");
    }

    #[test]
    fn test_sensitive_value_is_masked() {
        assert_eq!(render_value(&record("hunter2", true)), "[SENSITIVE - hidden]");
    }

    #[test]
    fn test_sensitive_empty_value_is_masked() {
        assert_eq!(render_value(&record("", true)), REDACTION_MARKER);
    }

    #[test]
    fn test_sensitive_value_equal_to_marker_is_masked() {
        let r = record(REDACTION_MARKER, true);
        assert_eq!(r.render_value(), REDACTION_MARKER);
    }

    #[test]
    fn test_from_api_model_with_null_value() {
        let var: Variable = serde_json::from_value(serde_json::json!({
            "id": "var-9",
            "type": "vars",
            "attributes": {
                "key": "secret",
                "value": null,
                "sensitive": true,
                "category": "terraform",
                "hcl": false,
                "description": ""
            }
        }))
        .unwrap();
        let r = VariableRecord::from(var);
        assert_eq!(r.key, "secret");
        assert!(r.description.is_none());
        assert_eq!(r.render_value(), REDACTION_MARKER);
    }

    #[test]
    fn test_debug_output_masks_sensitive_value() {
        let r = record("hunter2", true);
        let debug = format!("{:?}", r);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains(REDACTION_MARKER));
    }

    proptest! {
        #[test]
        fn prop_sensitive_never_returns_literal(value in ".*") {
            let r = record(&value, true);
            prop_assert_eq!(render_value(&r), REDACTION_MARKER);
            if value != REDACTION_MARKER {
                prop_assert_ne!(render_value(&r), value.as_str());
            }
        }

        #[test]
        fn prop_plain_returns_literal(value in ".*") {
            let r = record(&value, false);
            prop_assert_eq!(render_value(&r), value.as_str());
        }
    }
}
