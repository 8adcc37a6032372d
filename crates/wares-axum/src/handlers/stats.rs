//! Stats handlers - TTL-cached catalog aggregates.

use axum::Json;
use axum::extract::State;

use crate::dto::{StatsDto, StatsRefreshDto};
use crate::error::HttpError;
use crate::state::AppState;

/// Current catalog stats, served from cache while it is fresh.
pub async fn get(State(state): State<AppState>) -> Result<Json<StatsDto>, HttpError> {
    let report = state.core.stats().get().await?;
    Ok(Json(StatsDto::from(report)))
}

/// Drop the stats cache and recompute immediately.
pub async fn refresh(State(state): State<AppState>) -> Result<Json<StatsRefreshDto>, HttpError> {
    let report = state.core.stats().refresh().await?;
    Ok(Json(StatsRefreshDto::from(report)))
}
