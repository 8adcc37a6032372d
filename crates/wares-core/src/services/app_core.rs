//! One facade over the catalog and stats services.
//!
//! Adapters (HTTP, CLI) are handed an `AppCore` and reach every core
//! operation through it, so only their composition roots know which
//! repository backs it.

use std::sync::Arc;
use std::time::Duration;

use crate::ports::ItemRepository;

use super::{CatalogService, StatsService};

/// The services an adapter needs, behind one handle.
///
/// Constructed at the adapter's composition root with a concrete
/// repository implementation.
///
/// # Example
///
/// ```ignore
/// let repo: Arc<dyn ItemRepository> = Arc::new(JsonItemStore::new(path));
/// let core = AppCore::new(repo);
///
/// let (items, meta) = core.catalog().browse("", 1, 10).await?;
/// ```
pub struct AppCore {
    catalog: CatalogService,
    stats: StatsService,
}

impl AppCore {
    /// Create a new `AppCore` with the default stats TTL.
    pub fn new(repo: Arc<dyn ItemRepository>) -> Self {
        Self {
            catalog: CatalogService::new(Arc::clone(&repo)),
            stats: StatsService::new(repo),
        }
    }

    /// Create a new `AppCore` with an explicit stats cache TTL.
    pub fn with_stats_ttl(repo: Arc<dyn ItemRepository>, ttl: Duration) -> Self {
        Self {
            catalog: CatalogService::new(Arc::clone(&repo)),
            stats: StatsService::with_ttl(repo, ttl),
        }
    }

    /// Access the catalog service.
    pub const fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    /// Access the stats service.
    pub const fn stats(&self) -> &StatsService {
        &self.stats
    }
}
