//! Resource kinds, references, scopes and identifiers
//!
//! These types are shared by the resolver, the collection enumerator and the
//! relationship editor. A `ResourceRef` is only meaningful within the scope it
//! was resolved from.

use std::fmt;

use serde::Serialize;

use crate::config::api;
use crate::error::{Result, TfeError};

/// Kinds of objects managed in an organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    AgentPool,
    AgentToken,
    Policy,
    PolicySet,
    Project,
    Team,
    Variable,
    VariableSet,
    Workspace,
}

impl ResourceKind {
    /// Lower-case human label ("agent pool")
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::AgentPool => "agent pool",
            ResourceKind::AgentToken => "agent token",
            ResourceKind::Policy => "policy",
            ResourceKind::PolicySet => "policy set",
            ResourceKind::Project => "project",
            ResourceKind::Team => "team",
            ResourceKind::Variable => "variable",
            ResourceKind::VariableSet => "variable set",
            ResourceKind::Workspace => "workspace",
        }
    }

    /// Plural label ("agent pools")
    pub fn plural(&self) -> &'static str {
        match self {
            ResourceKind::AgentPool => "agent pools",
            ResourceKind::AgentToken => "agent tokens",
            ResourceKind::Policy => "policies",
            ResourceKind::PolicySet => "policy sets",
            ResourceKind::Project => "projects",
            ResourceKind::Team => "teams",
            ResourceKind::Variable => "variables",
            ResourceKind::VariableSet => "variable sets",
            ResourceKind::Workspace => "workspaces",
        }
    }

    /// Label with the first letter capitalised, for the start of a message
    pub fn title(&self) -> String {
        let label = self.label();
        let mut chars = label.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// JSON:API `type` value, which is also the collection path segment
    pub fn api_type(&self) -> &'static str {
        match self {
            ResourceKind::AgentPool => api::AGENT_POOLS,
            ResourceKind::AgentToken => api::AUTHENTICATION_TOKENS,
            ResourceKind::Policy => api::POLICIES,
            ResourceKind::PolicySet => api::POLICY_SETS,
            ResourceKind::Project => api::PROJECTS,
            ResourceKind::Team => api::TEAMS,
            ResourceKind::Variable => api::VARS,
            ResourceKind::VariableSet => api::VARSETS,
            ResourceKind::Workspace => api::WORKSPACES,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Canonical reference to a single object
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRef {
    pub kind: ResourceKind,
    pub id: String,
    /// Empty when the caller supplied the id directly
    pub name: String,
}

impl ResourceRef {
    pub fn new(kind: ResourceKind, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            name: name.into(),
        }
    }

    /// Reference built from a caller-supplied id; the name is unknown
    pub fn from_id(kind: ResourceKind, id: impl Into<String>) -> Self {
        Self::new(kind, id, String::new())
    }

    /// Name if known, otherwise the id
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "'{}'", self.id)
        } else {
            write!(f, "'{}' ({})", self.name, self.id)
        }
    }
}

/// Container within which names are resolved and collections enumerated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Organization(String),
    /// Workspaces of one project
    Project { org: String, project: ResourceRef },
    /// Tokens of one agent pool
    AgentPool(ResourceRef),
    /// Variables of one workspace
    Workspace(ResourceRef),
    /// Variables of one variable set
    VariableSet(ResourceRef),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Organization(org) => write!(f, "organization '{}'", org),
            Scope::Project { project, .. } => write!(f, "project '{}'", project.label()),
            Scope::AgentPool(pool) => write!(f, "agent pool '{}'", pool.label()),
            Scope::Workspace(ws) => write!(f, "workspace '{}'", ws.label()),
            Scope::VariableSet(set) => write!(f, "variable set '{}'", set.label()),
        }
    }
}

/// How duplicate names within one scope are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// First exact match in listing order wins
    #[default]
    First,
    /// More than one exact match is an error
    Unique,
}

/// What the caller supplied to identify an object
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    Id(String),
    Name(String),
}

impl Identifier {
    /// Build from optional `--name` / `--id` flags
    ///
    /// The id wins when both are present. Blank values count as absent;
    /// anything else is kept byte for byte.
    pub fn from_args(name: Option<&str>, id: Option<&str>) -> Result<Self> {
        fn present(v: Option<&str>) -> Option<&str> {
            v.filter(|v| !v.trim().is_empty())
        }
        match (present(name), present(id)) {
            (_, Some(id)) => Ok(Identifier::Id(id.to_string())),
            (Some(name), None) => Ok(Identifier::Name(name.to_string())),
            (None, None) => Err(TfeError::InputContract(
                "Please provide either --name or --id".to_string(),
            )),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Identifier::Id(v) | Identifier::Name(v) => v,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_id_wins_over_name() {
        let ident = Identifier::from_args(Some("ci-pool"), Some("apool-123")).unwrap();
        assert_eq!(ident, Identifier::Id("apool-123".to_string()));
    }

    #[test]
    fn test_name_only() {
        let ident = Identifier::from_args(Some("ci-pool"), None).unwrap();
        assert_eq!(ident, Identifier::Name("ci-pool".to_string()));
    }

    #[test]
    fn test_neither_name_nor_id_is_input_contract() {
        let err = Identifier::from_args(None, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputContract);
        assert!(err.to_string().contains("--name or --id"));
    }

    #[test]
    fn test_blank_values_count_as_absent() {
        let err = Identifier::from_args(Some("  "), Some("")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputContract);
    }

    #[test]
    fn test_padded_name_is_kept_verbatim() {
        let ident = Identifier::from_args(Some(" ci-pool "), None).unwrap();
        assert_eq!(ident, Identifier::Name(" ci-pool ".to_string()));
    }

    #[test]
    fn test_ref_label_falls_back_to_id() {
        let r = ResourceRef::from_id(ResourceKind::Workspace, "ws-1");
        assert_eq!(r.label(), "ws-1");
        assert_eq!(r.to_string(), "'ws-1'");

        let r = ResourceRef::new(ResourceKind::Workspace, "ws-1", "prod");
        assert_eq!(r.label(), "prod");
        assert_eq!(r.to_string(), "'prod' (ws-1)");
    }

    #[test]
    fn test_scope_display() {
        assert_eq!(
            Scope::Organization("acme".to_string()).to_string(),
            "organization 'acme'"
        );
        let project = ResourceRef::new(ResourceKind::Project, "prj-1", "infra");
        assert_eq!(
            Scope::Project {
                org: "acme".to_string(),
                project
            }
            .to_string(),
            "project 'infra'"
        );
    }

    #[test]
    fn test_kind_title_and_api_type() {
        assert_eq!(ResourceKind::AgentPool.title(), "Agent pool");
        assert_eq!(ResourceKind::VariableSet.api_type(), "varsets");
        assert_eq!(ResourceKind::AgentToken.api_type(), "authentication-tokens");
        assert_eq!(ResourceKind::Policy.plural(), "policies");
    }

    #[test]
    fn test_default_match_policy_is_first() {
        assert_eq!(MatchPolicy::default(), MatchPolicy::First);
    }
}
