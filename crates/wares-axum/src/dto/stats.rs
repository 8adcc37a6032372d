//! Catalog stats DTOs.

use serde::Serialize;
use wares_core::StatsReport;

/// Response body of `GET /api/stats`.
///
/// Flattens the aggregate next to the cache provenance fields, matching
/// the original wire format. `cacheAge` appears only on cache hits.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDto {
    pub total: usize,
    pub average_price: f64,
    pub cached: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_age: Option<u64>,
}

impl From<StatsReport> for StatsDto {
    fn from(report: StatsReport) -> Self {
        Self {
            total: report.stats.total,
            average_price: report.stats.average_price,
            cached: report.cached,
            cache_age: report.cache_age_secs,
        }
    }
}

/// Response body of `POST /api/stats/refresh`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsRefreshDto {
    pub message: String,
    pub total: usize,
    pub average_price: f64,
    pub cached: bool,
}

impl From<StatsReport> for StatsRefreshDto {
    fn from(report: StatsReport) -> Self {
        Self {
            message: "Cache refreshed".to_string(),
            total: report.stats.total,
            average_price: report.stats.average_price,
            cached: report.cached,
        }
    }
}
