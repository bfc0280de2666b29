//! Common traits for TFE resources

use crate::hcp::resource::{ResourceKind, ResourceRef};
use crate::hcp::PaginationMeta;
use serde::Deserialize;

/// Common trait for all listable TFE resources
///
/// Every model that can appear in a collection listing implements this so the
/// enumerator and resolver can work on any kind without per-kind code.
pub trait TfeResource {
    /// Kind of object this model represents
    const KIND: ResourceKind;

    /// Get the resource ID
    fn id(&self) -> &str;

    /// Get the human-readable name (the key, for variables)
    fn name(&self) -> &str;

    /// Canonical reference for this item
    fn to_ref(&self) -> ResourceRef {
        ResourceRef::new(Self::KIND, self.id(), self.name())
    }
}

/// Trait for API responses that contain paginated data
///
/// Implement this trait for any `XResponse` struct to enable use with
/// `TfeClient::fetch_all_pages()` helper.
pub trait PaginatedResponse<T> {
    /// Consume self and return the data items
    fn into_data(self) -> Vec<T>;
    /// Get reference to pagination metadata
    fn meta(&self) -> Option<&PaginationMeta>;
}

/// Generic API list response wrapper for paginated endpoints
#[derive(Deserialize, Debug)]
pub struct ApiListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<PaginationMeta>,
}

impl<T> PaginatedResponse<T> for ApiListResponse<T> {
    fn into_data(self) -> Vec<T> {
        self.data
    }

    fn meta(&self) -> Option<&PaginationMeta> {
        self.meta.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestResource {
        id: String,
        name: String,
    }

    impl TfeResource for TestResource {
        const KIND: ResourceKind = ResourceKind::Team;

        fn id(&self) -> &str {
            &self.id
        }

        fn name(&self) -> &str {
            &self.name
        }
    }

    fn resource() -> TestResource {
        TestResource {
            id: "team-123".to_string(),
            name: "owners".to_string(),
        }
    }

    #[test]
    fn test_to_ref() {
        let r = resource().to_ref();
        assert_eq!(r.kind, ResourceKind::Team);
        assert_eq!(r.id, "team-123");
        assert_eq!(r.name, "owners");
    }

    #[test]
    fn test_api_list_response_meta() {
        let response: ApiListResponse<serde_json::Value> =
            serde_json::from_value(serde_json::json!({
                "data": [{"id": "item-1"}],
                "meta": {
                    "pagination": {
                        "current-page": 1,
                        "total-pages": 3,
                        "total-count": 5
                    }
                }
            }))
            .unwrap();
        let meta = response.meta().unwrap();
        let pagination = meta.pagination.as_ref().unwrap();
        assert_eq!(pagination.total_pages, 3);
        assert_eq!(pagination.total_count, 5);
    }

    #[test]
    fn test_api_list_response_without_meta() {
        let response: ApiListResponse<serde_json::Value> =
            serde_json::from_value(serde_json::json!({
                "data": [{"id": "item-1"}]
            }))
            .unwrap();
        assert!(response.meta().is_none());
        assert_eq!(response.into_data().len(), 1);
    }
}
