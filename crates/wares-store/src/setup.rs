//! First-run preparation of the backing file.
//!
//! Entry points hand `setup_store()` the resolved data path and get back
//! a ready [`JsonItemStore`], whether or not the file existed before.

use anyhow::Result;
use std::path::Path;

use crate::JsonItemStore;

/// Sets up the item store backing file and returns a store over it.
///
/// Parent directories are created as needed, and a missing file is
/// seeded with an empty `[]` array.
///
/// An existing file is left untouched, whatever it contains; a corrupt
/// file surfaces as a format error on first read, not here.
///
/// # Errors
///
/// Returns an error if the directories or the file cannot be created.
pub fn setup_store(path: &Path) -> Result<JsonItemStore> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::write(path, b"[]")?;
        tracing::info!(path = %path.display(), "created empty item file");
    }

    Ok(JsonItemStore::new(path))
}
