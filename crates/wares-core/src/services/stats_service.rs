//! Stats service - TTL-cached catalog aggregates.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::ports::{CoreError, ItemRepository};
use crate::stats::{CatalogStats, DEFAULT_STATS_TTL, compute_stats};

/// One stats response, carrying cache provenance.
#[derive(Debug, Clone)]
pub struct StatsReport {
    pub stats: CatalogStats,
    /// Whether this report was served from the TTL cache.
    pub cached: bool,
    /// Age of the cached value in whole seconds; only set when `cached`.
    pub cache_age_secs: Option<u64>,
}

struct StatsEntry {
    stats: CatalogStats,
    computed_at: Instant,
}

/// Service computing catalog statistics behind a TTL cache.
///
/// A computed aggregate is reused for up to `ttl` regardless of
/// intervening item writes. That staleness window is a deliberate
/// trade-off, not a bug; callers see it through the `cached` and
/// `cache_age_secs` fields. [`StatsService::refresh`] bypasses the window.
///
/// The cache is keyed on [`tokio::time::Instant`] so tests can drive it
/// with a paused clock.
pub struct StatsService {
    repo: Arc<dyn ItemRepository>,
    ttl: Duration,
    cache: Mutex<Option<StatsEntry>>,
}

impl StatsService {
    /// Create a stats service with the default TTL ([`DEFAULT_STATS_TTL`]).
    pub fn new(repo: Arc<dyn ItemRepository>) -> Self {
        Self::with_ttl(repo, DEFAULT_STATS_TTL)
    }

    /// Create a stats service with an explicit cache TTL.
    pub fn with_ttl(repo: Arc<dyn ItemRepository>, ttl: Duration) -> Self {
        Self {
            repo,
            ttl,
            cache: Mutex::new(None),
        }
    }

    /// Get current stats, served from cache while the entry is younger
    /// than the TTL.
    pub async fn get(&self) -> Result<StatsReport, CoreError> {
        let mut cache = self.cache.lock().await;

        if let Some(entry) = cache.as_ref() {
            let age = entry.computed_at.elapsed();
            if age < self.ttl {
                return Ok(StatsReport {
                    stats: entry.stats.clone(),
                    cached: true,
                    cache_age_secs: Some(round_secs(age)),
                });
            }
        }

        let stats = self.recompute(&mut cache).await?;
        Ok(StatsReport {
            stats,
            cached: false,
            cache_age_secs: None,
        })
    }

    /// Discard any cached value and recompute immediately.
    pub async fn refresh(&self) -> Result<StatsReport, CoreError> {
        let mut cache = self.cache.lock().await;
        *cache = None;
        let stats = self.recompute(&mut cache).await?;
        Ok(StatsReport {
            stats,
            cached: false,
            cache_age_secs: None,
        })
    }

    async fn recompute(&self, cache: &mut Option<StatsEntry>) -> Result<CatalogStats, CoreError> {
        let items = self.repo.list().await?;
        let stats = compute_stats(&items);
        tracing::debug!(total = stats.total, "catalog stats recomputed");
        *cache = Some(StatsEntry {
            stats: stats.clone(),
            computed_at: Instant::now(),
        });
        Ok(stats)
    }
}

fn round_secs(age: Duration) -> u64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let secs = age.as_secs_f64().round() as u64;
    secs
}
