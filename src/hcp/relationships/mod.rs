//! Bulk relationship edits between resources

mod api;
mod models;

pub use models::{child_id_set, EditOperation, EditResult, Relationship, RelationshipEdit};
