//! JSON-file implementation of the `ItemRepository` trait.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::SystemTime;

use async_trait::async_trait;
use chrono::Utc;
use tokio::fs;

use wares_core::{Item, ItemRepository, NewItem, RepositoryError};

/// The last-read collection plus the file modification time it was read at.
struct CacheEntry {
    items: Vec<Item>,
    modified: SystemTime,
}

/// JSON-file implementation of the `ItemRepository` trait.
///
/// The whole catalog lives in one pretty-printed JSON array file. Reads go
/// through an in-memory cache that stays valid until the file's observed
/// modification time advances; writes rewrite the whole file through a
/// sibling temp file and rename, then re-prime the cache.
///
/// Concurrency: the cache slot is a std `Mutex` held only to copy the
/// collection in or out, never across an await. Inserts serialize on a
/// tokio `Mutex` covering the whole read-modify-write, so in-process
/// concurrent inserts cannot lose updates. Writers in other processes are
/// out of scope; they are only ever observed through the mtime check.
pub struct JsonItemStore {
    path: PathBuf,
    cache: Mutex<Option<CacheEntry>>,
    writer: tokio::sync::Mutex<()>,
    disk_reads: AtomicU64,
}

impl JsonItemStore {
    /// Create a store over the given backing file.
    ///
    /// The file is not touched until the first read; use
    /// [`crate::setup_store`] to create it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
            writer: tokio::sync::Mutex::new(()),
            disk_reads: AtomicU64::new(0),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of actual file reads performed so far.
    ///
    /// Instrumentation for the cache: two consecutive [`Self::read`] calls
    /// with no intervening file change do not advance this counter.
    pub fn disk_reads(&self) -> u64 {
        self.disk_reads.load(Ordering::Relaxed)
    }

    /// Read the collection, served from cache while the file is unchanged.
    ///
    /// Stats the backing file every call; re-reads and re-parses only when
    /// the modification time has advanced past the cached one. A file
    /// containing JSON `null` reads as the empty collection; any other
    /// non-array content is a [`RepositoryError::Format`].
    pub async fn read(&self) -> Result<Vec<Item>, RepositoryError> {
        let meta = fs::metadata(&self.path)
            .await
            .map_err(|e| RepositoryError::Io(format!("stat {}: {e}", self.path.display())))?;
        let modified = meta
            .modified()
            .map_err(|e| RepositoryError::Io(format!("mtime {}: {e}", self.path.display())))?;

        if let Some(items) = self.cached_if_fresh(modified) {
            return Ok(items);
        }

        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(|e| RepositoryError::Io(format!("read {}: {e}", self.path.display())))?;
        self.disk_reads.fetch_add(1, Ordering::Relaxed);
        let items = parse_items(&raw)?;

        tracing::debug!(
            path = %self.path.display(),
            count = items.len(),
            "item file (re)loaded"
        );
        self.install_cache(items.clone(), modified);
        Ok(items)
    }

    /// Overwrite the backing file with `items` and re-prime the cache.
    ///
    /// The write goes through a sibling temp file and an atomic rename, so
    /// a crash mid-write never leaves a truncated array behind.
    pub async fn write(&self, items: &[Item]) -> Result<(), RepositoryError> {
        let json = serde_json::to_string_pretty(items)
            .map_err(|e| RepositoryError::Format(format!("encode items: {e}")))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json.as_bytes())
            .await
            .map_err(|e| RepositoryError::Io(format!("write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| RepositoryError::Io(format!("rename to {}: {e}", self.path.display())))?;

        // The mtime observed after the rename becomes the cache validity
        // key. Every mutation goes through this same install/invalidate
        // pair the read path checks; if the post-write stat fails, drop
        // the cache so the next read goes back to disk.
        match fs::metadata(&self.path).await.and_then(|m| m.modified()) {
            Ok(modified) => self.install_cache(items.to_vec(), modified),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "post-write stat failed, invalidating items cache"
                );
                self.invalidate_cache();
            }
        }
        Ok(())
    }

    fn cached_if_fresh(&self, modified: SystemTime) -> Option<Vec<Item>> {
        let cache = self.cache.lock().unwrap();
        cache
            .as_ref()
            .filter(|entry| modified <= entry.modified)
            .map(|entry| entry.items.clone())
    }

    fn install_cache(&self, items: Vec<Item>, modified: SystemTime) {
        *self.cache.lock().unwrap() = Some(CacheEntry { items, modified });
    }

    fn invalidate_cache(&self) {
        *self.cache.lock().unwrap() = None;
    }
}

/// Decode the file content as an item array.
///
/// JSON `null` is accepted as the empty collection; everything else must
/// be an array of items.
fn parse_items(raw: &str) -> Result<Vec<Item>, RepositoryError> {
    let parsed: Option<Vec<Item>> = serde_json::from_str(raw)
        .map_err(|e| RepositoryError::Format(format!("decode items: {e}")))?;
    Ok(parsed.unwrap_or_default())
}

#[async_trait]
impl ItemRepository for JsonItemStore {
    async fn list(&self) -> Result<Vec<Item>, RepositoryError> {
        self.read().await
    }

    async fn get(&self, id: i64) -> Result<Item, RepositoryError> {
        self.read()
            .await?
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Item with ID {id}")))
    }

    async fn insert(&self, item: &NewItem) -> Result<Item, RepositoryError> {
        // The writer lock covers the whole read-modify-write; concurrent
        // inserts queue up here instead of losing each other's appends.
        let _writer = self.writer.lock().await;

        let mut items = self.read().await?;
        let id = items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        let created = item.clone().into_item(id, Utc::now());
        items.push(created.clone());
        self.write(&items).await?;

        tracing::debug!(id, name = %created.name, "item inserted");
        Ok(created)
    }
}
