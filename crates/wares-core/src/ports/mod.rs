//! The traits infrastructure implements for the core domain.
//!
//! Ports are the whole of what the domain knows about storage: trait
//! signatures over domain types, nothing else.
//!
//! # Design Rules
//!
//! - No filesystem or HTTP types in any signature
//! - Repository traits are minimal: list, get, insert. Update and delete
//!   are deliberately absent; no exposed operation mutates an existing
//!   item.
//! - Search and pagination belong in [`crate::query`], not here

mod item_repository;

use thiserror::Error;

pub use item_repository::ItemRepository;

/// What a repository implementation can fail with.
///
/// This error type abstracts away storage implementation details (file
/// I/O, JSON decoding) and provides a clean interface for services to
/// handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested item was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The backing file could not be stat'ed, read, or written.
    #[error("I/O error: {0}")]
    Io(String),

    /// The backing file does not contain a JSON item array.
    #[error("Format error: {0}")]
    Format(String),
}

/// The failure type every core service operation returns.
///
/// This is the canonical error type used across the core domain. Adapters
/// map this to their own error types (HTTP status codes, CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Storage could not complete the operation.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Item field validation failed.
    #[error(transparent)]
    InvalidItem(#[from] crate::domain::ItemValidationError),

    /// A caller-supplied value was rejected.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A condition the core has no better classification for.
    #[error("Internal error: {0}")]
    Internal(String),
}
