//! Core domain for the wares catalog.
//!
//! This crate contains the pure domain model (items, queries, stats), the
//! port traits infrastructure must implement, and the services adapters
//! call. It knows nothing about files, HTTP, or terminals; those live in
//! `wares-store`, `wares-axum`, `wares-client`, and `wares-cli`.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod query;
pub mod services;
pub mod stats;

// Adapters import these from the crate root, skipping the module paths
pub use domain::{
    CATEGORY_MAX_CHARS, Item, ItemDraft, ItemValidationError, NAME_MAX_CHARS, NewItem,
};
pub use ports::{CoreError, ItemRepository, RepositoryError};
pub use query::{PageMeta, paginate, search};
pub use services::{AppCore, CatalogService, StatsReport, StatsService};
pub use stats::{CatalogStats, DEFAULT_STATS_TTL, compute_stats};
