//! Persistent store adapter: named JSON blobs on local disk.
//!
//! The store is a write-through mirror of the cart, wishlist and
//! recently-viewed slices, not a source of truth after the initial load.
//! Reads tolerate missing or corrupt blobs by substituting an empty default;
//! mirror writes log failures and never propagate them, so storage trouble
//! degrades persistence rather than breaking a mutation.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::cart_slice::CartAction;
use crate::framework::CommitHook;
use crate::model::CartState;
use crate::recent_slice::{RecentAction, RecentState};
use crate::wishlist_slice::{WishlistAction, WishlistState};

/// Blob keys for the mirrored slices.
pub const KEY_CART: &str = "cart";
pub const KEY_WISHLIST: &str = "wishlist";
pub const KEY_RECENTLY_VIEWED: &str = "recently_viewed";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The platform-appropriate default data directory.
pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("shopfront")
    } else {
        PathBuf::from(".shopfront-data")
    }
}

/// String-keyed JSON blob storage rooted at one directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Opens a store, creating the directory if needed.
    ///
    /// If `dir` is `None`, uses the platform-appropriate default.
    pub fn open(dir: Option<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.unwrap_or_else(default_data_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Reads a blob, substituting `T::default()` when it is missing or does
    /// not parse. Corrupt data is discarded, never fatal.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let path = self.blob_path(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return T::default(),
            Err(e) => {
                warn!(key, error = %e, "Failed to read blob, using default");
                return T::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Discarding corrupt blob, using default");
                T::default()
            }
        }
    }

    /// Writes a blob, replacing any previous value under the key.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        fs::write(self.blob_path(key), raw)?;
        Ok(())
    }

    /// Deletes a blob. Ok if the key was never written.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.blob_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Whether a blob currently exists under the key.
    pub fn contains(&self, key: &str) -> bool {
        self.blob_path(key).exists()
    }
}

fn log_mirror_failure(key: &str, result: Result<(), StorageError>) {
    if let Err(e) = result {
        warn!(key, error = %e, "Mirror write failed");
    }
}

/// Write-through mirror for the cart slice.
///
/// `Clear` deletes the blob entirely; every other committed action rewrites
/// the full line array.
pub struct CartMirror {
    store: Arc<JsonStore>,
}

impl CartMirror {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

impl CommitHook<CartState> for CartMirror {
    fn after_commit(&self, action: &CartAction, state: &CartState) {
        let result = match action {
            CartAction::Clear => self.store.remove(KEY_CART),
            _ => self.store.save(KEY_CART, &state.lines),
        };
        log_mirror_failure(KEY_CART, result);
    }
}

/// Write-through mirror for the wishlist slice.
pub struct WishlistMirror {
    store: Arc<JsonStore>,
}

impl WishlistMirror {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

impl CommitHook<WishlistState> for WishlistMirror {
    fn after_commit(&self, _action: &WishlistAction, state: &WishlistState) {
        log_mirror_failure(KEY_WISHLIST, self.store.save(KEY_WISHLIST, &state.entries));
    }
}

/// Write-through mirror for the recently-viewed slice.
pub struct RecentMirror {
    store: Arc<JsonStore>,
}

impl RecentMirror {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

impl CommitHook<RecentState> for RecentMirror {
    fn after_commit(&self, _action: &RecentAction, state: &RecentState) {
        log_mirror_failure(
            KEY_RECENTLY_VIEWED,
            self.store.save(KEY_RECENTLY_VIEWED, &state.products),
        );
    }
}
