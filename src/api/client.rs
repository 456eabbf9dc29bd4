use super::{ApiError, ApiResult, ContentGateway};
use crate::types::{ContentItem, ContentPatch, NewContent};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Local dev default; the original backend serves on port 8000.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Thin typed wrapper over the backend REST resources.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize_base_url(base_url.into()),
        }
    }

    /// Base URL from `API_BASE_URL`, falling back to the local dev backend.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let response = self.client.get(self.url(path)).query(query).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Fetch a single item by id.
    pub async fn get_one(&self, user_id: &str, content_id: i64) -> ApiResult<ContentItem> {
        self.get_json(&format!("/api/content/{user_id}/{content_id}"), &[])
            .await
    }

    /// Create a saved-content entry directly, bypassing the bot pipeline.
    pub async fn create(&self, content: &NewContent) -> ApiResult<ContentItem> {
        let response = self
            .client
            .post(self.url("/api/content/"))
            .json(content)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Apply a partial update to an existing entry.
    pub async fn update(
        &self,
        user_id: &str,
        content_id: i64,
        patch: &ContentPatch,
    ) -> ApiResult<ContentItem> {
        let response = self
            .client
            .put(self.url(&format!("/api/content/{user_id}/{content_id}")))
            .json(patch)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

fn normalize_base_url(mut base_url: String) -> String {
    while base_url.ends_with('/') {
        base_url.pop();
    }
    base_url
}

async fn check_status(response: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status, body })
    }
}

/// Query parameters for the search endpoint; unset filters are omitted
/// rather than sent as empty strings.
fn search_params(
    query: &str,
    category: Option<&str>,
    platform: Option<&str>,
) -> Vec<(&'static str, String)> {
    let mut params = vec![("q", query.to_string())];
    if let Some(category) = category {
        params.push(("category", category.to_string()));
    }
    if let Some(platform) = platform {
        params.push(("platform", platform.to_string()));
    }
    params
}

#[async_trait]
impl ContentGateway for ApiClient {
    async fn health(&self) -> ApiResult<()> {
        let response = self.client.get(self.url("/api/health")).send().await?;
        check_status(response).await?;
        Ok(())
    }

    async fn list_users(&self) -> ApiResult<Vec<String>> {
        self.get_json("/api/content/users", &[]).await
    }

    async fn list_content(
        &self,
        user_id: &str,
        skip: u32,
        limit: u32,
    ) -> ApiResult<Vec<ContentItem>> {
        self.get_json(
            &format!("/api/content/{user_id}/all"),
            &[("skip", skip.to_string()), ("limit", limit.to_string())],
        )
        .await
    }

    async fn search(
        &self,
        user_id: &str,
        query: &str,
        category: Option<&str>,
        platform: Option<&str>,
    ) -> ApiResult<Vec<ContentItem>> {
        self.get_json(
            &format!("/api/content/{user_id}/search"),
            &search_params(query, category, platform),
        )
        .await
    }

    async fn list_categories(&self, user_id: &str) -> ApiResult<Vec<String>> {
        self.get_json(&format!("/api/content/{user_id}/filters/categories"), &[])
            .await
    }

    async fn list_platforms(&self, user_id: &str) -> ApiResult<Vec<String>> {
        self.get_json(&format!("/api/content/{user_id}/filters/platforms"), &[])
            .await
    }

    async fn archive(&self, user_id: &str, content_id: i64) -> ApiResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/content/{user_id}/{content_id}")))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slashes_from_base_url() {
        assert_eq!(
            normalize_base_url("http://localhost:8000///".to_string()),
            "http://localhost:8000"
        );
        assert_eq!(normalize_base_url(String::new()), "");
    }

    #[test]
    fn search_params_omit_unset_filters() {
        let params = search_params("rust", None, None);
        assert_eq!(params, vec![("q", "rust".to_string())]);

        let params = search_params("rust", Some("Coding"), Some("twitter"));
        assert_eq!(
            params,
            vec![
                ("q", "rust".to_string()),
                ("category", "Coding".to_string()),
                ("platform", "twitter".to_string()),
            ]
        );
    }

    #[test]
    fn parses_backend_content_payload() {
        let body = r#"[{
            "id": 7,
            "user_id": "user_ab12cd34e",
            "platform": "instagram",
            "original_url": "https://instagram.com/p/xyz",
            "caption": "weekend ride",
            "title": null,
            "category": "Fitness",
            "summary": "A cycling route recap.",
            "hashtags": "cycling, weekend",
            "thumbnail_url": null,
            "is_archived": false,
            "created_at": "2025-04-02T09:30:00",
            "updated_at": "2025-04-02T09:30:00"
        }]"#;

        let items: Vec<ContentItem> = serde_json::from_str(body).expect("payload should parse");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 7);
        assert_eq!(items[0].category.as_deref(), Some("Fitness"));
        assert_eq!(items[0].title, None);
    }

    #[test]
    fn patch_serializes_only_set_fields() {
        let patch = ContentPatch {
            category: Some("Travel".to_string()),
            ..ContentPatch::default()
        };
        let json = serde_json::to_string(&patch).expect("patch should serialize");
        assert_eq!(json, r#"{"category":"Travel"}"#);
    }
}
