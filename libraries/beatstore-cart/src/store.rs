//! Durable cart storage
//!
//! The cart persists as a JSON array of [`CartItem`] records. The trait
//! keeps the engine independent of where that array lives; the shipped
//! implementations cover an on-disk file and an in-memory store for tests
//! and headless use.

use crate::error::{CartError, Result};
use crate::types::CartItem;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::debug;

/// Durable storage for cart contents
///
/// `load` is called once at startup; `save` after every committed item-set
/// change. Implementations must persist the full item array on each save.
pub trait CartStore: Send + Sync {
    /// Read the persisted item array, if any
    ///
    /// `Ok(None)` means nothing has been persisted yet. Malformed data is
    /// an error; the manager decides how to degrade.
    fn load(&self) -> Result<Option<Vec<CartItem>>>;

    /// Persist the full item array
    fn save(&self, items: &[CartItem]) -> Result<()>;
}

impl<S: CartStore + ?Sized> CartStore for std::sync::Arc<S> {
    fn load(&self) -> Result<Option<Vec<CartItem>>> {
        (**self).load()
    }

    fn save(&self, items: &[CartItem]) -> Result<()> {
        (**self).save(items)
    }
}

/// Cart storage backed by a JSON file
pub struct JsonCartStore {
    path: PathBuf,
}

impl JsonCartStore {
    /// Create a store writing to the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CartStore for JsonCartStore {
    fn load(&self) -> Result<Option<Vec<CartItem>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let items: Vec<CartItem> = serde_json::from_reader(reader)?;

        debug!(path = %self.path.display(), count = items.len(), "Loaded persisted cart");
        Ok(Some(items))
    }

    fn save(&self, items: &[CartItem]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(&self.path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer(writer, items)?;

        debug!(path = %self.path.display(), count = items.len(), "Persisted cart");
        Ok(())
    }
}

/// In-memory cart storage
///
/// For tests and contexts with no durable storage attached.
#[derive(Default)]
pub struct MemoryCartStore {
    items: Mutex<Option<Vec<CartItem>>>,
}

impl MemoryCartStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with items, as if persisted earlier
    pub fn with_items(items: Vec<CartItem>) -> Self {
        Self {
            items: Mutex::new(Some(items)),
        }
    }
}

impl CartStore for MemoryCartStore {
    fn load(&self) -> Result<Option<Vec<CartItem>>> {
        self.items
            .lock()
            .map(|guard| guard.clone())
            .map_err(|_| CartError::Storage("memory store lock poisoned".to_string()))
    }

    fn save(&self, items: &[CartItem]) -> Result<()> {
        let mut guard = self
            .items
            .lock()
            .map_err(|_| CartError::Storage("memory store lock poisoned".to_string()))?;
        *guard = Some(items.to_vec());
        Ok(())
    }
}
