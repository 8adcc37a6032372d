//! JSON-file storage for the wares catalog.
//!
//! One JSON array file holds the whole catalog. [`JsonItemStore`] implements
//! the `ItemRepository` port over it with an mtime-validated read cache and
//! atomic whole-file rewrites; [`setup_store`] initializes the file the way
//! entry points expect.
#![deny(unsafe_code)]

pub mod json_store;
pub mod setup;

pub use json_store::JsonItemStore;
pub use setup::setup_store;
