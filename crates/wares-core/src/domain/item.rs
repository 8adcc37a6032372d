//! Item domain types and validation.
//!
//! These types represent catalog items in the system, independent of any
//! infrastructure concerns (file storage, HTTP, etc.). Serialized field
//! names are camelCase because that is the catalog's wire and file format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maximum accepted item name length, in characters (after trimming).
pub const NAME_MAX_CHARS: usize = 200;

/// Maximum accepted item category length, in characters (after trimming).
pub const CATEGORY_MAX_CHARS: usize = 50;

/// A catalog item that exists in the store with an assigned ID.
///
/// This represents a persisted item. Use [`ItemDraft`] for incoming data
/// that hasn't been validated yet, and [`NewItem`] for validated data that
/// hasn't been persisted yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Store-assigned ID (always present and positive for persisted items).
    pub id: i64,
    /// Display name, 1-200 characters.
    pub name: String,
    /// Category label, 1-50 characters.
    pub category: String,
    /// Price in currency units. Finite and non-negative.
    pub price: f64,
    /// Free-form description. Never set by the create path; preserved when
    /// present in the backing file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// UTC timestamp of when the item was created.
    pub created_at: DateTime<Utc>,
    /// UTC timestamp of the last modification. Equal to `created_at` today
    /// because no update operation exists.
    pub updated_at: DateTime<Utc>,
    /// Fields this program does not model. Kept so a full-file rewrite does
    /// not strip data added by external tooling.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// A validated item to be inserted into the store (no ID yet).
///
/// Construct via [`ItemDraft::validate`]; the store assigns the ID and
/// timestamps at insert time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub price: f64,
}

impl NewItem {
    /// Assemble the persisted form with a store-assigned ID.
    ///
    /// Both timestamps are set to the same instant; `updated_at` only
    /// diverges once an update operation exists.
    #[must_use]
    pub fn into_item(self, id: i64, at: DateTime<Utc>) -> Item {
        Item {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
            description: None,
            created_at: at,
            updated_at: at,
            extra: HashMap::new(),
        }
    }
}

/// Unvalidated item input, exactly as received from a client.
///
/// Only `name`, `category`, and `price` are accepted on create; any other
/// submitted fields are dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    pub price: f64,
}

impl ItemDraft {
    /// Validate the draft, producing a [`NewItem`] with trimmed text fields.
    pub fn validate(self) -> Result<NewItem, ItemValidationError> {
        let name = self.name.trim().to_string();
        let name_chars = name.chars().count();
        if name_chars == 0 || name_chars > NAME_MAX_CHARS {
            return Err(ItemValidationError::NameLength(name_chars));
        }

        let category = self.category.trim().to_string();
        let category_chars = category.chars().count();
        if category_chars == 0 || category_chars > CATEGORY_MAX_CHARS {
            return Err(ItemValidationError::CategoryLength(category_chars));
        }

        if !(self.price.is_finite() && self.price >= 0.0) {
            return Err(ItemValidationError::InvalidPrice(self.price));
        }

        Ok(NewItem {
            name,
            category,
            price: self.price,
        })
    }
}

/// Item validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ItemValidationError {
    #[error("Name must be between 1 and 200 characters, got {0}")]
    NameLength(usize),

    #[error("Category must be between 1 and 50 characters, got {0}")]
    CategoryLength(usize),

    #[error("Price must be a finite non-negative number, got {0}")]
    InvalidPrice(f64),
}
