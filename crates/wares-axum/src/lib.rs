//! Axum web adapter for the wares catalog.
//!
//! Exposes the catalog over HTTP: paginated/searchable item listing,
//! item detail, item creation, TTL-cached stats, and a health probe.
//! The adapter owns the HTTP concerns only (routing, DTOs, status
//! mapping, CORS, rate limiting, static serving); all catalog semantics
//! live in `wares-core` behind the `AppCore` facade.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dev-dependencies exercised by tests/integration_routes.rs only
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod rate_limit;
pub mod routes;
pub mod state;

// Flatten the public surface to the crate root
pub use bootstrap::{
    AxumContext, CorsConfig, Environment, RateLimitConfig, ServerConfig, bootstrap, start_server,
};
pub use error::HttpError;
pub use routes::{create_router, create_spa_router};
pub use state::AppState;
