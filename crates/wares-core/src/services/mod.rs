//! The application's business logic.
//!
//! Services coordinate ports and domain types. They never see a concrete
//! repository, only the trait, so each adapter composes them with
//! whatever store its bootstrap builds.

mod app_core;
mod catalog_service;
mod stats_service;

pub use app_core::AppCore;
pub use catalog_service::CatalogService;
pub use stats_service::{StatsReport, StatsService};
