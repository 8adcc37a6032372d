//! Item listing and creation DTOs.

use serde::{Deserialize, Serialize};
use wares_core::{Item, PageMeta};

use crate::error::HttpError;

/// Largest page size the listing endpoint accepts.
pub const MAX_PAGE_LIMIT: usize = 10;

/// Page size used when the client sends no `limit`.
pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// Longest accepted search term, in characters after trimming.
pub const MAX_SEARCH_CHARS: usize = 20;

/// Raw query parameters of `GET /api/items`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListItemsQuery {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub q: Option<String>,
}

/// Validated listing parameters.
#[derive(Debug, Clone)]
pub struct BrowseQuery {
    /// 1-based page number.
    pub page: usize,
    /// Page size, 1 to [`MAX_PAGE_LIMIT`].
    pub limit: usize,
    /// Trimmed, non-empty search term, if one was given.
    pub term: Option<String>,
}

impl ListItemsQuery {
    /// Validate the raw parameters: `page` >= 1, `limit` 1 to 10, `q` at
    /// most 20 characters after trimming. A whitespace-only `q` counts
    /// as absent. Violations yield the generic 400 body, with the
    /// offending value logged here rather than leaked to the client.
    pub fn validate(self) -> Result<BrowseQuery, HttpError> {
        let page = self.page.unwrap_or(1);
        if page < 1 {
            tracing::debug!(page, "rejected listing query: page must be positive");
            return Err(HttpError::Validation);
        }

        let limit = self.limit.unwrap_or(DEFAULT_PAGE_LIMIT);
        if !(1..=MAX_PAGE_LIMIT).contains(&limit) {
            tracing::debug!(limit, "rejected listing query: limit out of range");
            return Err(HttpError::Validation);
        }

        let term = match self.q {
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.chars().count() > MAX_SEARCH_CHARS {
                    tracing::debug!(
                        chars = trimmed.chars().count(),
                        "rejected listing query: search term too long"
                    );
                    return Err(HttpError::Validation);
                }
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            None => None,
        };

        Ok(BrowseQuery { page, limit, term })
    }
}

/// Response body of `GET /api/items`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsPageDto {
    pub items: Vec<Item>,
    pub pagination: PageMeta,
    /// Echo of the applied search term; omitted when none was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
}

/// Response body of `POST /api/items`.
#[derive(Debug, Serialize)]
pub struct ItemCreatedDto {
    pub item: Item,
    pub message: String,
}

impl ItemCreatedDto {
    pub fn new(item: Item) -> Self {
        Self {
            item,
            message: "Item created successfully".to_string(),
        }
    }
}
