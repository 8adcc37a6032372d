//! The item query pipeline: search filtering and pagination.
//!
//! Both steps are pure functions over an in-memory collection. Callers
//! apply [`search`] before [`paginate`] so the page meta reflects the
//! filtered count; [`crate::services::CatalogService::browse`] is the
//! composed entry point.
//!
//! Note: in-memory filtering over the whole collection is deliberate. The
//! backing store is one small JSON file; revisit only if catalogs grow
//! far beyond that.

use serde::{Deserialize, Serialize};

use crate::domain::Item;

/// Pagination metadata for one result page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// 1-based page number that was requested.
    pub page: usize,
    /// Requested page size.
    pub limit: usize,
    /// Total matching items across all pages.
    pub total: usize,
    /// Total page count, `ceil(total / limit)`.
    pub total_pages: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// Filter items by a case-insensitive substring match on name or category.
///
/// An empty or whitespace-only term returns the input unchanged, same
/// order and allocation. Matches preserve source order; there is no
/// ranking.
#[must_use]
pub fn search(items: Vec<Item>, term: &str) -> Vec<Item> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&needle)
                || item.category.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Slice out one 1-based page of items.
///
/// `offset = (page - 1) * limit`, clamped to the collection: an
/// out-of-range page yields an empty slice, never an error. `page` and
/// `limit` are clamped to at least 1 (callers validate real bounds at the
/// edge).
#[must_use]
pub fn paginate(items: Vec<Item>, page: usize, limit: usize) -> (Vec<Item>, PageMeta) {
    let page = page.max(1);
    let limit = limit.max(1);

    let total = items.len();
    let total_pages = total.div_ceil(limit);
    let offset = (page - 1) * limit;

    let page_items: Vec<Item> = items.into_iter().skip(offset).take(limit).collect();

    let meta = PageMeta {
        page,
        limit,
        total,
        total_pages,
        has_next_page: page < total_pages,
        has_prev_page: page > 1,
    };
    (page_items, meta)
}
