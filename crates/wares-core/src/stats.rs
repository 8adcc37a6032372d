//! Catalog aggregate statistics.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::Item;

/// How long a computed [`CatalogStats`] may be served from cache.
///
/// The window is wall-clock only: intervening writes do not invalidate it.
/// That staleness is a documented trade-off, surfaced to callers through
/// the `cached`/`cache_age_secs` fields of
/// [`crate::services::StatsReport`].
pub const DEFAULT_STATS_TTL: Duration = Duration::from_secs(300);

/// Aggregate statistics over the whole catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    /// Item count.
    pub total: usize,
    /// Arithmetic mean of all prices; `0` for an empty catalog.
    pub average_price: f64,
}

/// Compute aggregate statistics for a collection of items.
///
/// The empty collection yields `{0, 0.0}` explicitly; there is no division
/// by zero.
#[must_use]
pub fn compute_stats(items: &[Item]) -> CatalogStats {
    if items.is_empty() {
        return CatalogStats {
            total: 0,
            average_price: 0.0,
        };
    }

    let sum: f64 = items.iter().map(|item| item.price).sum();
    #[allow(clippy::cast_precision_loss)]
    let average_price = sum / items.len() as f64;
    CatalogStats {
        total: items.len(),
        average_price,
    }
}
