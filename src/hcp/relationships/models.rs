//! Relationship edit models

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{Result, TfeError};
use crate::hcp::resource::{ResourceKind, ResourceRef};

/// Associations that support bulk add/remove
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    PolicySetPolicies,
    PolicySetProjects,
    PolicySetWorkspaces,
    AgentPoolWorkspaces,
}

impl Relationship {
    /// Relationship between a parent kind and a child kind, if one exists
    pub fn between(parent: ResourceKind, child: ResourceKind) -> Option<Self> {
        match (parent, child) {
            (ResourceKind::PolicySet, ResourceKind::Policy) => Some(Relationship::PolicySetPolicies),
            (ResourceKind::PolicySet, ResourceKind::Project) => {
                Some(Relationship::PolicySetProjects)
            }
            (ResourceKind::PolicySet, ResourceKind::Workspace) => {
                Some(Relationship::PolicySetWorkspaces)
            }
            (ResourceKind::AgentPool, ResourceKind::Workspace) => {
                Some(Relationship::AgentPoolWorkspaces)
            }
            _ => None,
        }
    }

    pub fn child_kind(&self) -> ResourceKind {
        match self {
            Relationship::PolicySetPolicies => ResourceKind::Policy,
            Relationship::PolicySetProjects => ResourceKind::Project,
            Relationship::PolicySetWorkspaces | Relationship::AgentPoolWorkspaces => {
                ResourceKind::Workspace
            }
        }
    }

    /// Path segment under `/<parent>/<id>/relationships/`
    pub fn path_segment(&self) -> &'static str {
        match self {
            Relationship::PolicySetPolicies => "policies",
            Relationship::PolicySetProjects => "projects",
            Relationship::PolicySetWorkspaces => "workspaces",
            Relationship::AgentPoolWorkspaces => "allowed-workspaces",
        }
    }
}

/// Direction of a relationship edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOperation {
    Add,
    Remove,
}

impl EditOperation {
    pub fn past_tense(&self) -> &'static str {
        match self {
            EditOperation::Add => "added",
            EditOperation::Remove => "removed",
        }
    }
}

impl fmt::Display for EditOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOperation::Add => write!(f, "add"),
            EditOperation::Remove => write!(f, "remove"),
        }
    }
}

/// Deduplicate child ids and reject an empty set
///
/// Blank entries are dropped before the emptiness check.
pub fn child_id_set<I, S>(child_kind: ResourceKind, ids: I) -> Result<BTreeSet<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let set: BTreeSet<String> = ids
        .into_iter()
        .map(|id| id.as_ref().trim().to_string())
        .filter(|id| !id.is_empty())
        .collect();

    if set.is_empty() {
        return Err(TfeError::InputContract(format!(
            "At least one {} id is required",
            child_kind
        )));
    }
    Ok(set)
}

/// A validated bulk add/remove of children on one parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipEdit {
    parent: ResourceRef,
    relationship: Relationship,
    child_ids: BTreeSet<String>,
    operation: EditOperation,
}

impl RelationshipEdit {
    pub fn new<I, S>(
        parent: ResourceRef,
        child_kind: ResourceKind,
        operation: EditOperation,
        child_ids: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let relationship = Relationship::between(parent.kind, child_kind).ok_or_else(|| {
            TfeError::InputContract(format!(
                "{} cannot be attached to a {}",
                child_kind.title(),
                parent.kind
            ))
        })?;
        let child_ids = child_id_set(child_kind, child_ids)?;

        Ok(Self {
            parent,
            relationship,
            child_ids,
            operation,
        })
    }

    pub fn parent(&self) -> &ResourceRef {
        &self.parent
    }

    pub fn relationship(&self) -> Relationship {
        self.relationship
    }

    pub fn child_kind(&self) -> ResourceKind {
        self.relationship.child_kind()
    }

    /// Children in sorted order, without duplicates
    pub fn child_ids(&self) -> &BTreeSet<String> {
        &self.child_ids
    }

    pub fn operation(&self) -> EditOperation {
        self.operation
    }
}

/// Outcome of a submitted edit
///
/// Reports how many children were submitted; the control plane gives no
/// per-child status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResult {
    pub parent: ResourceRef,
    pub child_kind: ResourceKind,
    pub operation: EditOperation,
    pub affected: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn policy_set() -> ResourceRef {
        ResourceRef::from_id(ResourceKind::PolicySet, "polset-1")
    }

    #[test]
    fn test_duplicates_removed() {
        let edit = RelationshipEdit::new(
            policy_set(),
            ResourceKind::Workspace,
            EditOperation::Add,
            ["ws-2", "ws-1", "ws-2", "ws-1"],
        )
        .unwrap();
        let ids: Vec<&str> = edit.child_ids().iter().map(String::as_str).collect();
        assert_eq!(ids, vec!["ws-1", "ws-2"]);
    }

    #[test]
    fn test_empty_children_rejected() {
        let err = RelationshipEdit::new(
            policy_set(),
            ResourceKind::Workspace,
            EditOperation::Add,
            Vec::<String>::new(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputContract);
        assert!(err.to_string().contains("workspace"));
    }

    #[test]
    fn test_blank_children_rejected() {
        let err = child_id_set(ResourceKind::Policy, ["", "  "]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputContract);
    }

    #[test]
    fn test_unknown_relationship_rejected() {
        let err = RelationshipEdit::new(
            ResourceRef::from_id(ResourceKind::Team, "team-1"),
            ResourceKind::Workspace,
            EditOperation::Add,
            ["ws-1"],
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputContract);
    }

    #[test]
    fn test_relationship_between() {
        assert_eq!(
            Relationship::between(ResourceKind::AgentPool, ResourceKind::Workspace),
            Some(Relationship::AgentPoolWorkspaces)
        );
        assert_eq!(
            Relationship::between(ResourceKind::PolicySet, ResourceKind::Policy),
            Some(Relationship::PolicySetPolicies)
        );
        assert_eq!(
            Relationship::between(ResourceKind::Workspace, ResourceKind::AgentPool),
            None
        );
        assert_eq!(
            Relationship::AgentPoolWorkspaces.path_segment(),
            "allowed-workspaces"
        );
    }
}
