//! Client library for the wares catalog API.
//!
//! This crate holds everything a catalog front end needs short of actual
//! rendering: an HTTP [`ApiClient`], the [`CatalogGateway`] port it
//! implements, the [`ItemFeed`] list state with debounced search, and the
//! [`Viewport`] window that drives incremental page loads.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod debounce;
pub mod error;
pub mod feed;
pub mod gateway;
pub mod http;
pub mod models;
pub mod viewport;

pub use debounce::{DEBOUNCE_DELAY, SearchDebouncer};
pub use error::{ClientError, ClientResult};
pub use feed::ItemFeed;
pub use gateway::CatalogGateway;
pub use http::{ApiClient, DEFAULT_SERVER};
pub use models::{CreatedItem, ItemPage, PageQuery, StatsSnapshot};
pub use viewport::Viewport;

// Silence unused dev-dependency warnings; these are used by tests/live_api.rs
#[cfg(test)]
use axum as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use wares_axum as _;
