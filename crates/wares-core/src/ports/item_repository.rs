//! Item repository trait definition.
//!
//! The one port the catalog needs: list, fetch, insert. Where and how
//! the items are kept is entirely the implementor's business.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Item, NewItem};

/// Repository for item persistence operations.
///
/// Implementations are responsible for all storage details (the JSON file,
/// its cache, write atomicity). Items are created and read, never updated
/// or deleted; the trait exposes exactly that.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// List all items in insertion order.
    async fn list(&self) -> Result<Vec<Item>, RepositoryError>;

    /// Fetch one item by id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the item doesn't exist.
    async fn get(&self, id: i64) -> Result<Item, RepositoryError>;

    /// Insert a new item, assigning it a fresh unique ID.
    ///
    /// Returns the persisted item. Implementations must serialize
    /// concurrent inserts so ids stay unique and no insert is lost.
    async fn insert(&self, item: &NewItem) -> Result<Item, RepositoryError>;
}
