//! Shared JSON:API building blocks

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::hcp::resource::ResourceKind;

/// Identifier object inside a relationship
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RelationshipId {
    pub id: String,
    #[serde(rename = "type")]
    pub rel_type: String,
}

/// To-one relationship
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RelationshipOne {
    pub data: Option<RelationshipId>,
}

impl RelationshipOne {
    pub fn id(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.id.as_str())
    }
}

/// To-many relationship
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RelationshipMany {
    #[serde(default)]
    pub data: Vec<RelationshipId>,
}

impl RelationshipMany {
    pub fn ids(&self) -> Vec<&str> {
        self.data.iter().map(|d| d.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Build a `{"data": {"type": ..., "attributes": ...}}` request document
pub fn document<A: Serialize>(kind: ResourceKind, attributes: &A) -> Value {
    json!({
        "data": {
            "type": kind.api_type(),
            "attributes": attributes,
        }
    })
}

/// Request document for updating an existing object
pub fn update_document<A: Serialize>(kind: ResourceKind, id: &str, attributes: &A) -> Value {
    json!({
        "data": {
            "type": kind.api_type(),
            "id": id,
            "attributes": attributes,
        }
    })
}

/// Same as [`document`] with a `relationships` object attached
pub fn document_with_relationships<A: Serialize>(
    kind: ResourceKind,
    attributes: &A,
    relationships: Value,
) -> Value {
    json!({
        "data": {
            "type": kind.api_type(),
            "attributes": attributes,
            "relationships": relationships,
        }
    })
}

/// Relationship linkage `{"data": {"type": ..., "id": ...}}` for one object
pub fn linkage(kind: ResourceKind, id: &str) -> Value {
    json!({ "data": { "type": kind.api_type(), "id": id } })
}
