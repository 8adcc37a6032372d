//! Port trait for catalog API access.
//!
//! [`ItemFeed`](crate::feed::ItemFeed) and the CLI handlers depend on this
//! trait rather than on a concrete HTTP client, so tests can drive them
//! with a mock gateway.

use async_trait::async_trait;
use wares_core::{Item, ItemDraft};

use crate::error::ClientResult;
use crate::models::{CreatedItem, ItemPage, PageQuery, StatsSnapshot};

/// Access to the catalog API, independent of transport.
///
/// The production implementation is [`ApiClient`](crate::http::ApiClient).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Fetch one page of items, optionally filtered by a search term.
    async fn fetch_page(&self, query: &PageQuery) -> ClientResult<ItemPage>;

    /// Fetch a single item by id.
    ///
    /// A missing item is [`ClientError::NotFound`](crate::ClientError::NotFound),
    /// not an `Option`, because callers render it as a distinct outcome.
    async fn fetch_item(&self, id: i64) -> ClientResult<Item>;

    /// Submit a new item for creation.
    async fn create_item(&self, draft: &ItemDraft) -> ClientResult<CreatedItem>;

    /// Fetch the catalog stats report.
    async fn fetch_stats(&self) -> ClientResult<StatsSnapshot>;

    /// Force a stats recomputation and fetch the fresh report.
    async fn refresh_stats(&self) -> ClientResult<StatsSnapshot>;
}
