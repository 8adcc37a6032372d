//! Reqwest-backed implementation of [`CatalogGateway`].

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;
use wares_core::{Item, ItemDraft};

use crate::error::{ClientError, ClientResult};
use crate::gateway::CatalogGateway;
use crate::models::{CreatedItem, ItemPage, PageQuery, StatsSnapshot};

/// Server the client talks to when none is configured.
pub const DEFAULT_SERVER: &str = "http://localhost:4001";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error body shape shared by every API error response.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// HTTP client for the catalog API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the given server, e.g. `http://localhost:4001`.
    pub fn new(server: &str) -> ClientResult<Self> {
        let base_url = Url::parse(server)?;
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, base_url })
    }

    /// Build an endpoint URL under the configured base.
    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let base_path = url.path().trim_end_matches('/');
        url.set_path(&format!("{base_path}/{path}"));
        url
    }

    /// Build the items URL for a page query.
    ///
    /// The `q` parameter is only sent when a non-empty term is set, matching
    /// what the server echoes back as `searchQuery`.
    fn items_url(&self, query: &PageQuery) -> Url {
        let mut url = self.endpoint("api/items");
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("page", &query.page.to_string());
            pairs.append_pair("limit", &query.limit.to_string());
            if let Some(term) = query.effective_term() {
                pairs.append_pair("q", term);
            }
        }
        url
    }

    /// Decode a success body, or map the error status and body.
    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::decode_error(status, response).await);
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(Into::into)
    }

    async fn decode_error(status: reqwest::StatusCode, response: reqwest::Response) -> ClientError {
        if status == reqwest::StatusCode::NOT_FOUND {
            return ClientError::NotFound;
        }
        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        ClientError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl CatalogGateway for ApiClient {
    async fn fetch_page(&self, query: &PageQuery) -> ClientResult<ItemPage> {
        let url = self.items_url(query);
        let response = self.http.get(url.as_str()).send().await?;
        Self::read_json(response).await
    }

    async fn fetch_item(&self, id: i64) -> ClientResult<Item> {
        let url = self.endpoint(&format!("api/items/{id}"));
        let response = self.http.get(url.as_str()).send().await?;
        Self::read_json(response).await
    }

    async fn create_item(&self, draft: &ItemDraft) -> ClientResult<CreatedItem> {
        let url = self.endpoint("api/items");
        let response = self.http.post(url.as_str()).json(draft).send().await?;
        Self::read_json(response).await
    }

    async fn fetch_stats(&self) -> ClientResult<StatsSnapshot> {
        let url = self.endpoint("api/stats");
        let response = self.http.get(url.as_str()).send().await?;
        Self::read_json(response).await
    }

    async fn refresh_stats(&self) -> ClientResult<StatsSnapshot> {
        let url = self.endpoint("api/stats/refresh");
        let response = self.http.post(url.as_str()).send().await?;
        Self::read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(DEFAULT_SERVER).unwrap()
    }

    fn query_value(url: &Url, key: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn test_new_rejects_garbage_url() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_endpoint_joins_path() {
        let url = client().endpoint("api/items/7");
        assert_eq!(url.as_str(), "http://localhost:4001/api/items/7");

        let trailing = ApiClient::new("http://localhost:4001/").unwrap();
        assert_eq!(
            trailing.endpoint("api/stats").as_str(),
            "http://localhost:4001/api/stats"
        );
    }

    #[test]
    fn test_items_url_omits_empty_term() {
        let url = client().items_url(&PageQuery::first_page());
        assert_eq!(query_value(&url, "page").as_deref(), Some("1"));
        assert_eq!(query_value(&url, "limit").as_deref(), Some("10"));
        assert_eq!(query_value(&url, "q"), None);

        let url = client().items_url(&PageQuery::new(2, 5).with_term(""));
        assert_eq!(query_value(&url, "q"), None);
        assert_eq!(query_value(&url, "page").as_deref(), Some("2"));
    }

    #[test]
    fn test_items_url_encodes_search_term() {
        let url = client().items_url(&PageQuery::first_page().with_term("blue widget"));
        assert_eq!(query_value(&url, "q").as_deref(), Some("blue widget"));
        // The raw query string must be percent/plus encoded
        assert!(!url.query().unwrap_or("").contains(' '));
    }
}
