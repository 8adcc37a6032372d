//! Client-side item feed state.
//!
//! [`ItemFeed`] is the state a list view holds: the current page of items,
//! the total count, a loading flag, and the last fetch error. Fetch
//! failures land in the held state instead of being swallowed, so a view
//! can keep the previous page visible and render a retry affordance.

use std::sync::Arc;

use tracing::warn;
use wares_core::Item;

use crate::debounce::SearchDebouncer;
use crate::error::ClientError;
use crate::gateway::CatalogGateway;
use crate::models::PageQuery;

/// Paged, searchable item feed over a [`CatalogGateway`].
pub struct ItemFeed {
    gateway: Arc<dyn CatalogGateway>,
    page_size: usize,
    page: usize,
    term: String,
    debouncer: SearchDebouncer,
    items: Vec<Item>,
    total: usize,
    loading: bool,
    has_more: bool,
    last_error: Option<ClientError>,
}

impl ItemFeed {
    /// Create a feed with the default page size.
    pub fn new(gateway: Arc<dyn CatalogGateway>) -> Self {
        Self::with_page_size(gateway, PageQuery::DEFAULT_LIMIT)
    }

    pub fn with_page_size(gateway: Arc<dyn CatalogGateway>, page_size: usize) -> Self {
        Self {
            gateway,
            page_size: page_size.max(1),
            page: 1,
            term: String::new(),
            debouncer: SearchDebouncer::new(),
            items: Vec::new(),
            total: 0,
            loading: false,
            // Optimistic until the first page proves otherwise
            has_more: true,
            last_error: None,
        }
    }

    /// The currently held page of items.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Total matching items across all pages, from the last successful fetch.
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Current 1-based page number.
    pub const fn page(&self) -> usize {
        self.page
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether another page may exist.
    ///
    /// Heuristic: the last fetched page was full-sized. An exact-multiple
    /// collection therefore reports one phantom page; the follow-up fetch
    /// comes back empty and settles it.
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    /// The search term currently in effect (already settled, not pending).
    pub fn search_term(&self) -> &str {
        &self.term
    }

    /// The most recent fetch error, cleared by the next successful fetch.
    pub const fn last_error(&self) -> Option<&ClientError> {
        self.last_error.as_ref()
    }

    fn current_query(&self) -> PageQuery {
        let mut query = PageQuery::new(self.page, self.page_size);
        if !self.term.is_empty() {
            query = query.with_term(self.term.clone());
        }
        query
    }

    /// Fetch the current page.
    ///
    /// On success the held items and total are replaced and any previous
    /// error is cleared. On failure the previous items stay visible and the
    /// error is recorded. The loading flag always clears.
    pub async fn refresh(&mut self) {
        self.loading = true;
        let query = self.current_query();
        match self.gateway.fetch_page(&query).await {
            Ok(page) => {
                self.has_more = page.items.len() == self.page_size;
                self.total = page.pagination.total;
                self.items = page.items;
                self.last_error = None;
            }
            Err(error) => {
                warn!(%error, page = query.page, "item page fetch failed");
                self.last_error = Some(error);
            }
        }
        self.loading = false;
    }

    /// Advance to the next page and fetch it.
    ///
    /// A no-op returning `false` while a fetch is in flight or when the
    /// last page was short.
    pub async fn load_more(&mut self) -> bool {
        if self.loading || !self.has_more {
            return false;
        }
        self.page += 1;
        self.refresh().await;
        true
    }

    /// Record a search edit; it takes effect once the debounce delay passes.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.debouncer.submit(term);
    }

    /// Apply a settled search term, if any.
    ///
    /// Resets to page 1 and refetches, but only when the settled term
    /// differs from the one already in effect. Returns whether a fetch was
    /// issued.
    pub async fn tick(&mut self) -> bool {
        let Some(term) = self.debouncer.poll() else {
            return false;
        };
        if term == self.term {
            return false;
        }
        self.term = term;
        self.page = 1;
        self.refresh().await;
        true
    }
}
