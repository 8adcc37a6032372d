//! Catalog service - orchestrates item browse/get/create operations.

use std::sync::Arc;

use crate::domain::{Item, ItemDraft};
use crate::ports::{CoreError, ItemRepository, RepositoryError};
use crate::query::{PageMeta, paginate, search};

/// Service for catalog operations.
///
/// This service composes the query pipeline over the injected
/// [`ItemRepository`] and is the single entry point adapters use for item
/// access. Search always runs before pagination so the returned meta
/// reflects the filtered count.
pub struct CatalogService {
    repo: Arc<dyn ItemRepository>,
}

impl CatalogService {
    /// Create a new catalog service with the given repository.
    pub fn new(repo: Arc<dyn ItemRepository>) -> Self {
        Self { repo }
    }

    /// List one page of items, optionally filtered by a search term.
    ///
    /// An empty `term` means no filtering. `page` is 1-based; an
    /// out-of-range page yields an empty page, not an error.
    pub async fn browse(
        &self,
        term: &str,
        page: usize,
        limit: usize,
    ) -> Result<(Vec<Item>, PageMeta), CoreError> {
        let items = self.repo.list().await?;
        let filtered = search(items, term);
        Ok(paginate(filtered, page, limit))
    }

    /// Look up one item, mapping a storage miss to `None`.
    pub async fn get(&self, id: i64) -> Result<Option<Item>, CoreError> {
        match self.repo.get(id).await {
            Ok(item) => Ok(Some(item)),
            Err(RepositoryError::NotFound(_)) => Ok(None),
            Err(e) => Err(CoreError::from(e)),
        }
    }

    /// Validate a draft and insert it into the catalog.
    ///
    /// Returns the persisted item with its assigned ID and timestamps.
    pub async fn create(&self, draft: ItemDraft) -> Result<Item, CoreError> {
        let new_item = draft.validate()?;
        self.repo.insert(&new_item).await.map_err(CoreError::from)
    }
}
