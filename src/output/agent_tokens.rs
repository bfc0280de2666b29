//! Agent token output formatter
//!
//! The secret is never part of a listing; it is printed once by the create
//! command.

use serde::Serialize;

use super::Tabular;
use crate::hcp::agent_tokens::AgentToken;

/// Serializable agent token for structured output (JSON/YAML)
#[derive(Serialize)]
pub struct SerializableAgentToken {
    id: String,
    description: String,
    created_at: String,
    last_used_at: String,
}

impl Tabular for AgentToken {
    type Record = SerializableAgentToken;

    fn headers() -> &'static [&'static str] {
        &["ID", "DESCRIPTION", "CREATED", "LAST USED"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.description().to_string(),
            self.created_at().to_string(),
            self.last_used_at().to_string(),
        ]
    }

    fn record(&self) -> SerializableAgentToken {
        SerializableAgentToken {
            id: self.id.clone(),
            description: self.description().to_string(),
            created_at: self.created_at().to_string(),
            last_used_at: self.last_used_at().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_output_never_contains_secret() {
        let token: AgentToken = serde_json::from_value(serde_json::json!({
            "id": "at-1",
            "attributes": {"description": "runner", "token": "s3cr3t"}
        }))
        .unwrap();
        assert!(!token.row().iter().any(|c| c.contains("s3cr3t")));
        let json = serde_json::to_string(&token.record()).unwrap();
        assert!(!json.contains("s3cr3t"));
    }
}
