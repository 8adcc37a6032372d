//! Wire types for the catalog API, client side.
//!
//! Response shapes mirror what the server serializes (camelCase keys);
//! [`Item`] and [`PageMeta`] come straight from `wares-core` since both
//! ends of the wire share one definition.

use serde::Deserialize;
use wares_core::{Item, PageMeta};

/// Parameters for one page request against `GET /api/items`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    /// 1-based page number.
    pub page: usize,
    /// Page size, server-capped at 10.
    pub limit: usize,
    /// Optional search term; `None` or empty means no filtering.
    pub term: Option<String>,
}

impl PageQuery {
    /// Page size used when the caller does not pick one.
    pub const DEFAULT_LIMIT: usize = 10;

    pub const fn new(page: usize, limit: usize) -> Self {
        Self {
            page,
            limit,
            term: None,
        }
    }

    /// The first page with the default size and no search term.
    #[must_use]
    pub const fn first_page() -> Self {
        Self::new(1, Self::DEFAULT_LIMIT)
    }

    #[must_use]
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    /// The search term, unless it is absent or empty.
    #[must_use]
    pub fn effective_term(&self) -> Option<&str> {
        self.term.as_deref().filter(|t| !t.is_empty())
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::first_page()
    }
}

/// One page of items as returned by `GET /api/items`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPage {
    pub items: Vec<Item>,
    pub pagination: PageMeta,
    /// Echoed search term; absent when the request was unfiltered.
    #[serde(default)]
    pub search_query: Option<String>,
}

/// Response of `POST /api/items`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedItem {
    pub item: Item,
    pub message: String,
}

/// Response of `GET /api/stats` and `POST /api/stats/refresh`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub total: usize,
    pub average_price: f64,
    /// Whether the server answered from its stats cache.
    pub cached: bool,
    /// Cache age in whole seconds; only present on cache hits.
    #[serde(default)]
    pub cache_age: Option<u64>,
    /// Present on refresh responses.
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_term_filters_empty() {
        assert_eq!(PageQuery::first_page().effective_term(), None);
        assert_eq!(PageQuery::new(1, 10).with_term("").effective_term(), None);
        assert_eq!(
            PageQuery::new(1, 10).with_term("widget").effective_term(),
            Some("widget")
        );
    }

    #[test]
    fn test_item_page_decodes_with_and_without_search_query() {
        let with_query = r#"{
            "items": [],
            "pagination": {
                "page": 1, "limit": 10, "total": 0, "totalPages": 0,
                "hasNextPage": false, "hasPrevPage": false
            },
            "searchQuery": "widget"
        }"#;
        let page: ItemPage = serde_json::from_str(with_query).unwrap();
        assert_eq!(page.search_query.as_deref(), Some("widget"));
        assert_eq!(page.pagination.total, 0);

        let without = r#"{
            "items": [],
            "pagination": {
                "page": 1, "limit": 10, "total": 0, "totalPages": 0,
                "hasNextPage": false, "hasPrevPage": false
            }
        }"#;
        let page: ItemPage = serde_json::from_str(without).unwrap();
        assert!(page.search_query.is_none());
    }

    #[test]
    fn test_stats_snapshot_decodes_both_shapes() {
        let hit = r#"{"total": 3, "averagePrice": 20.0, "cached": true, "cacheAge": 42}"#;
        let stats: StatsSnapshot = serde_json::from_str(hit).unwrap();
        assert!(stats.cached);
        assert_eq!(stats.cache_age, Some(42));
        assert!(stats.message.is_none());

        let refreshed =
            r#"{"message": "Cache refreshed", "total": 3, "averagePrice": 20.0, "cached": false}"#;
        let stats: StatsSnapshot = serde_json::from_str(refreshed).unwrap();
        assert!(!stats.cached);
        assert!(stats.cache_age.is_none());
        assert_eq!(stats.message.as_deref(), Some("Cache refreshed"));
    }
}
