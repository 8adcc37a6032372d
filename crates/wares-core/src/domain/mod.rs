//! Core domain types.
//!
//! Nothing here knows about storage or HTTP. The store and the adapters
//! depend on these types, never the other way around.

mod item;

// Re-export item types at the domain level for convenience
pub use item::{
    CATEGORY_MAX_CHARS, Item, ItemDraft, ItemValidationError, NAME_MAX_CHARS, NewItem,
};
