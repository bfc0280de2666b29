//! TFE HTTP client for API interactions

use futures::stream::{self, Stream, TryStreamExt};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::traits::PaginatedResponse;

/// TFE API client
pub struct TfeClient {
    client: Client,
    token: String,
    host: String,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
}

impl TfeClient {
    /// Create a new TFE client with optimized connection settings
    pub fn new(token: String, host: String) -> Self {
        let client = Client::builder()
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            // Timeouts
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            host,
            base_url_override: None,
        }
    }

    /// Create a client with custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub fn with_base_url(token: String, host: String, base_url: String) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            host,
            base_url_override: Some(base_url),
        }
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        format!(
            "https://{}/{}",
            self.host,
            api::BASE_PATH.trim_start_matches('/')
        )
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/vnd.api+json")
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    /// Create a PATCH request builder with standard headers
    pub(crate) fn patch(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.patch(url))
    }

    /// Create a DELETE request builder with standard headers
    pub(crate) fn delete(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.delete(url))
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(TfeError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        Ok(response.json().await?)
    }

    /// Lazily walk a paginated endpoint one page at a time
    ///
    /// Pages are requested strictly in order; page N+1 is only requested once
    /// the consumer polls past the items of page N. Dropping the stream early
    /// stops further requests.
    ///
    /// # Arguments
    /// * `path` - API path (e.g., "/organizations/my-org/teams" or with query "...?search=foo")
    /// * `error_context` - Context for error messages (e.g., "teams in organization 'my-org'")
    pub fn page_stream<'a, T, R>(
        &'a self,
        path: String,
        error_context: String,
    ) -> impl Stream<Item = Result<Vec<T>>> + 'a
    where
        T: 'a,
        R: DeserializeOwned + PaginatedResponse<T> + 'a,
    {
        stream::try_unfold(Some(1u32), move |next| {
            let path = path.clone();
            let error_context = error_context.clone();
            async move {
                match next {
                    Some(page_num) => self
                        .fetch_page::<T, R>(&path, page_num, &error_context)
                        .await
                        .map(Some),
                    None => Ok(None),
                }
            }
        })
    }

    /// Flattened item stream over every page of a collection
    pub fn item_stream<'a, T, R>(
        &'a self,
        path: String,
        error_context: String,
    ) -> impl Stream<Item = Result<T>> + 'a
    where
        T: 'a,
        R: DeserializeOwned + PaginatedResponse<T> + 'a,
    {
        self.page_stream::<T, R>(path, error_context)
            .map_ok(|items| stream::iter(items.into_iter().map(Ok::<T, TfeError>)))
            .try_flatten()
    }

    /// Fetch all pages from a paginated API endpoint
    ///
    /// # Type Parameters
    /// * `T` - The item type (e.g., Team, Workspace)
    /// * `R` - The response type that implements PaginatedResponse<T>
    pub async fn fetch_all_pages<T, R>(&self, path: &str, error_context: &str) -> Result<Vec<T>>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        let items: Vec<T> = self
            .item_stream::<T, R>(path.to_string(), error_context.to_string())
            .try_collect()
            .await?;
        debug!("Fetched {} total items for {}", items.len(), error_context);
        Ok(items)
    }

    /// Fetch one page and work out which page (if any) comes next
    async fn fetch_page<T, R>(
        &self,
        path: &str,
        page_num: u32,
        error_context: &str,
    ) -> Result<(Vec<T>, Option<u32>)>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        // Detect if path already has query params
        let separator = if path.contains('?') { "&" } else { "?" };
        let url = format!(
            "{}{}{}page[size]={}&page[number]={}",
            self.base_url(),
            path,
            separator,
            api::DEFAULT_PAGE_SIZE,
            page_num
        );

        debug!("Fetching page {} from: {}", page_num, url);

        let response = self.get(&url).send().await?;

        let page_context = if page_num == 1 {
            error_context.to_string()
        } else {
            format!("{} (page {})", error_context, page_num)
        };
        let resp: R = self.parse_api_response(response, &page_context).await?;

        let next = resp
            .meta()
            .and_then(|m| m.pagination.as_ref())
            .and_then(|p| p.page_after(page_num));
        let items = resp.into_data();

        debug!("Page {} returned {} items", page_num, items.len());
        Ok((items, next))
    }

    /// Fetch a single resource by API path
    ///
    /// Returns `None` for 404 and an error for other non-success status codes.
    ///
    /// # Arguments
    /// * `path` - API path (e.g., "/workspaces/ws-abc123")
    /// * `resource_label` - Human-readable label for error messages (e.g., "workspace 'ws-abc123'")
    pub async fn fetch_resource_by_path<T>(
        &self,
        path: &str,
        resource_label: &str,
    ) -> Result<Option<(T, serde_json::Value)>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Fetching {} from: {}", resource_label, url);

        let response = self.get(&url).send().await?;

        match response.status().as_u16() {
            200 => {
                let raw: serde_json::Value = response.json().await?;
                let item: T =
                    serde_json::from_value(raw["data"].clone()).map_err(|e| TfeError::Api {
                        status: 200,
                        message: format!("Failed to parse {}: {}", resource_label, e),
                    })?;
                Ok(Some((item, raw)))
            }
            404 => Ok(None),
            status => Err(TfeError::Api {
                status,
                message: format!("Failed to fetch {}", resource_label),
            }),
        }
    }

    /// POST a JSON:API document and parse the created resource
    pub(crate) async fn create_resource<T>(
        &self,
        path: &str,
        body: &serde_json::Value,
        resource_label: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Creating {} at: {}", resource_label, url);

        let response = self.post(&url).json(body).send().await?;
        self.parse_write_response(response, "create", resource_label)
            .await
    }

    /// PATCH a JSON:API document and parse the updated resource
    pub(crate) async fn update_resource<T>(
        &self,
        path: &str,
        body: &serde_json::Value,
        resource_label: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Updating {} at: {}", resource_label, url);

        let response = self.patch(&url).json(body).send().await?;
        self.parse_write_response(response, "update", resource_label)
            .await
    }

    /// DELETE a resource
    pub(crate) async fn delete_resource(&self, path: &str, resource_label: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Deleting {} at: {}", resource_label, url);

        let response = self.delete(&url).send().await?;

        match response.status().as_u16() {
            200 | 204 => Ok(()),
            404 => Err(TfeError::Api {
                status: 404,
                message: format!("{} not found", resource_label),
            }),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(TfeError::Api {
                    status,
                    message: format!("Failed to delete {}: {}", resource_label, body),
                })
            }
        }
    }

    async fn parse_write_response<T>(
        &self,
        response: reqwest::Response,
        action: &str,
        resource_label: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        match response.status().as_u16() {
            status @ (200 | 201) => {
                let raw: serde_json::Value = response.json().await?;
                serde_json::from_value(raw["data"].clone()).map_err(|e| TfeError::Api {
                    status,
                    message: format!("Failed to parse {} response: {}", resource_label, e),
                })
            }
            404 => Err(TfeError::Api {
                status: 404,
                message: format!("{} not found", resource_label),
            }),
            422 => {
                let body = response.text().await.unwrap_or_default();
                Err(TfeError::Api {
                    status: 422,
                    message: format!("Cannot {} {}: {}", action, resource_label, body),
                })
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(TfeError::Api {
                    status,
                    message: format!("Failed to {} {}: {}", action, resource_label, body),
                })
            }
        }
    }
}

#[cfg(test)]
impl TfeClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url(
            "test-token".to_string(),
            "mock.terraform.io".to_string(),
            base_url.to_string(),
        )
    }
}


#[cfg(test)]
mod pagination_tests {
    use super::*;
    use futures::StreamExt;
    use serde::Deserialize;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::hcp::traits::ApiListResponse;

    #[derive(Deserialize, Debug, Clone)]
    struct TestItem {
        id: String,
        name: String,
    }

    type TestItemsResponse = ApiListResponse<TestItem>;

    fn test_item_json(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": name
        })
    }

    fn page_body(items: Vec<serde_json::Value>, page: u32, total_pages: u32) -> serde_json::Value {
        serde_json::json!({
            "data": items,
            "meta": {
                "pagination": {
                    "current-page": page,
                    "total-pages": total_pages,
                    "total-count": 6
                }
            }
        })
    }

    async fn mount_three_pages(mock_server: &MockServer, expected_per_page: u64) {
        for page in 1..=3u32 {
            let first = (page - 1) * 2 + 1;
            Mock::given(method("GET"))
                .and(path("/test-items"))
                .and(query_param("page[number]", page.to_string()))
                .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
                    vec![
                        test_item_json(&format!("item-{}", first), "Item"),
                        test_item_json(&format!("item-{}", first + 1), "Item"),
                    ],
                    page,
                    3,
                )))
                .expect(if page == 1 { 1 } else { expected_per_page })
                .mount(mock_server)
                .await;
        }
    }

    #[tokio::test]
    async fn test_fetch_all_pages_single_page() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/test-items"))
            .and(query_param("page[number]", "1"))
            .and(query_param("page[size]", "100"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
                vec![
                    test_item_json("item-1", "Item 1"),
                    test_item_json("item-2", "Item 2"),
                ],
                1,
                1,
            )))
            .expect(1)
            .mount(&mock_server)
            .await;

        let items = client
            .fetch_all_pages::<TestItem, TestItemsResponse>("/test-items", "test items")
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Item 1");
        assert_eq!(items[1].name, "Item 2");
    }

    #[tokio::test]
    async fn test_fetch_all_pages_multiple_pages_in_order() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());
        mount_three_pages(&mock_server, 1).await;

        let items = client
            .fetch_all_pages::<TestItem, TestItemsResponse>("/test-items", "test items")
            .await
            .unwrap();

        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["item-1", "item-2", "item-3", "item-4", "item-5", "item-6"]
        );
    }

    #[tokio::test]
    async fn test_item_stream_stops_requesting_when_dropped() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());
        // Only page 1 may be requested
        mount_three_pages(&mock_server, 0).await;

        let first = {
            let stream = client.item_stream::<TestItem, TestItemsResponse>(
                "/test-items".to_string(),
                "test items".to_string(),
            );
            futures::pin_mut!(stream);
            stream.next().await
        };

        assert_eq!(first.unwrap().unwrap().id, "item-1");
    }

    #[tokio::test]
    async fn test_item_stream_is_restartable() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/test-items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
                vec![test_item_json("item-1", "Item 1")],
                1,
                1,
            )))
            .expect(2)
            .mount(&mock_server)
            .await;

        for _ in 0..2 {
            let items = client
                .fetch_all_pages::<TestItem, TestItemsResponse>("/test-items", "test items")
                .await
                .unwrap();
            assert_eq!(items.len(), 1);
        }
    }

    #[tokio::test]
    async fn test_fetch_all_pages_no_pagination_meta() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/test-items"))
            .and(query_param("page[number]", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [test_item_json("item-1", "Item 1")]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let items = client
            .fetch_all_pages::<TestItem, TestItemsResponse>("/test-items", "test items")
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_all_pages_api_error_on_first_page() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/test-items"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let result = client
            .fetch_all_pages::<TestItem, TestItemsResponse>("/test-items", "test items")
            .await;

        match result.unwrap_err() {
            TfeError::Api { status, .. } => assert_eq!(status, 403),
            _ => panic!("Expected TfeError::Api"),
        }
    }

    #[tokio::test]
    async fn test_fetch_all_pages_api_error_on_subsequent_page() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/test-items"))
            .and(query_param("page[number]", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
                vec![test_item_json("item-1", "Item 1")],
                1,
                2,
            )))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/test-items"))
            .and(query_param("page[number]", "2"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let result = client
            .fetch_all_pages::<TestItem, TestItemsResponse>("/test-items", "test items")
            .await;

        match result.unwrap_err() {
            TfeError::Api { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("page 2"));
            }
            _ => panic!("Expected TfeError::Api"),
        }
    }

    #[tokio::test]
    async fn test_fetch_all_pages_with_existing_query_params() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/test-items"))
            .and(query_param("filter[project][id]", "prj-1"))
            .and(query_param("page[number]", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
                vec![test_item_json("item-1", "Filtered Item")],
                1,
                1,
            )))
            .mount(&mock_server)
            .await;

        let items = client
            .fetch_all_pages::<TestItem, TestItemsResponse>(
                "/test-items?filter[project][id]=prj-1",
                "test items",
            )
            .await
            .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Filtered Item");
    }

    #[tokio::test]
    async fn test_fetch_all_pages_empty_result() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/test-items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(vec![], 1, 0)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let items = client
            .fetch_all_pages::<TestItem, TestItemsResponse>("/test-items", "test items")
            .await
            .unwrap();
        assert!(items.is_empty());
    }
}

#[cfg(test)]
mod write_tests {
    use super::*;
    use serde::Deserialize;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Deserialize, Debug)]
    struct Created {
        id: String,
    }

    #[tokio::test]
    async fn test_create_resource_parses_data() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());
        let body = serde_json::json!({"data": {"type": "teams", "attributes": {"name": "ops"}}});

        Mock::given(method("POST"))
            .and(path("/organizations/acme/teams"))
            .and(body_json(&body))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({"data": {"id": "team-1"}})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let created: Created = client
            .create_resource("/organizations/acme/teams", &body, "team 'ops'")
            .await
            .unwrap();
        assert_eq!(created.id, "team-1");
    }

    #[tokio::test]
    async fn test_update_resource_422_includes_body() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("PATCH"))
            .and(path("/teams/team-1"))
            .respond_with(ResponseTemplate::new(422).set_body_string("name has already been taken"))
            .mount(&mock_server)
            .await;

        let result: Result<Created> = client
            .update_resource("/teams/team-1", &serde_json::json!({}), "team 'ops'")
            .await;

        match result.unwrap_err() {
            TfeError::Api { status, message } => {
                assert_eq!(status, 422);
                assert!(message.contains("Cannot update team 'ops'"));
                assert!(message.contains("already been taken"));
            }
            _ => panic!("Expected TfeError::Api"),
        }
    }

    #[tokio::test]
    async fn test_delete_resource_204() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/teams/team-1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        client
            .delete_resource("/teams/team-1", "team 'team-1'")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_resource_404_is_not_found_kind() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/teams/team-gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let err = client
            .delete_resource("/teams/team-gone", "team 'team-gone'")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::NotFound);
        assert!(err.to_string().contains("team-gone"));
    }
}
