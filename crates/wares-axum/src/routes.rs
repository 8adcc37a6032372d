//! Router assembly for the catalog API.
//!
//! Wires the item and stats handlers into the `/api` tree, with the rate
//! limiter and CORS layered on top and the health probe kept outside both.

use axum::extract::State;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router, middleware};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig, ServerConfig};
use crate::dto::HealthDto;
use crate::error::HttpError;
use crate::handlers;
use crate::rate_limit::{self, ApiRateLimiter};
use crate::state::AppState;

/// Translate the configured CORS policy into a tower-http layer.
///
/// Origins that do not parse as header values are skipped rather than
/// failing startup.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// The API routes, prefix-free so the caller can nest them under `/api`.
///
/// State is left unapplied (`Router<AppState>`); the caller supplies it
/// before nesting. The fallback answers unmatched `/api/*` paths with the
/// JSON 404 body. Axum 0.8 path parameters use brace syntax (`{id}`).
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/items",
            get(handlers::items::list).post(handlers::items::create),
        )
        .route("/items/{id}", get(handlers::items::get))
        .route("/stats", get(handlers::stats::get))
        .route("/stats/refresh", post(handlers::stats::refresh))
        .fallback(unknown_api_endpoint)
}

/// 404 body for unmatched `/api/*` paths.
async fn unknown_api_endpoint() -> HttpError {
    HttpError::NotFound("API endpoint not found".to_string())
}

/// Assemble the API-only router.
///
/// API routes are nested under `/api` behind the rate limiter and CORS;
/// `/health` sits outside both so probes are never throttled. For
/// serving static assets use [`create_spa_router`].
pub fn create_router(ctx: AxumContext, config: &ServerConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(&config.cors);
    let limiter = Arc::new(ApiRateLimiter::new(&config.effective_rate_limit()));

    let api = api_routes()
        .with_state(Arc::clone(&state))
        .layer(middleware::from_fn_with_state(limiter, rate_limit::enforce))
        .layer(cors);

    Router::new()
        .route("/health", get(health_check))
        .with_state(state)
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
}

/// Assemble the full router with static asset serving for a built frontend.
///
/// Everything [`create_router`] serves, plus files out of `static_dir`,
/// with unmatched non-API paths falling back to `index.html` so
/// client-side routes resolve.
pub fn create_spa_router<P: AsRef<Path>>(
    ctx: AxumContext,
    static_dir: P,
    config: &ServerConfig,
) -> Router {
    let static_path = static_dir.as_ref();
    let index_path = static_path.join("index.html");
    let serve_dir = ServeDir::new(static_path).fallback(ServeFile::new(&index_path));

    // The API tree keeps its own fallback, so unknown /api paths still 404
    // as JSON instead of being swallowed by the SPA fallback
    create_router(ctx, config).fallback_service(serve_dir)
}

/// Health check endpoint. Registered outside the rate-limited API router.
pub(crate) async fn health_check(State(state): State<AppState>) -> Json<HealthDto> {
    Json(HealthDto::now(state.started_at, state.environment))
}
