//! Loading and saving documents.
//!
//! A [`DocumentStore`] turns a file into a [`Document`] and back. The
//! [`StoreRegistry`] picks a store by file extension.
//!
//! # Example
//!
//! ```no_run
//! use paperfmt::store::StoreRegistry;
//! use std::path::Path;
//!
//! fn main() -> paperfmt::Result<()> {
//!     let registry = StoreRegistry::with_defaults();
//!     let doc = registry.load(Path::new("paper.json"))?;
//!     registry.save(&doc, Path::new("paper_copy.json"))?;
//!     Ok(())
//! }
//! ```

mod json;

pub use json::JsonStore;

use crate::error::{Error, Result};
use crate::model::Document;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Reads and writes documents in one file format.
pub trait DocumentStore: Send + Sync {
    /// Lowercase extensions without the leading dot.
    fn supported_extensions(&self) -> &[&str];

    /// Name of this store.
    fn name(&self) -> &str;

    /// Load a document. Failures are reported as [`Error::Load`].
    fn load(&self, path: &Path) -> Result<Document>;

    /// Save a document. Failures are reported as [`Error::Save`].
    fn save(&self, doc: &Document, path: &Path) -> Result<()>;

    /// Check if this store handles the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry mapping file extensions to stores.
pub struct StoreRegistry {
    stores: HashMap<String, Arc<dyn DocumentStore>>,
}

impl StoreRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            stores: HashMap::new(),
        }
    }

    /// Create a registry with the default stores (JSON).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(JsonStore::new()));
        registry
    }

    /// Register a store for all its extensions.
    pub fn register(&mut self, store: Arc<dyn DocumentStore>) {
        for ext in store.supported_extensions() {
            self.stores.insert(ext.to_lowercase(), store.clone());
        }
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.stores.contains_key(&ext.to_lowercase())
    }

    /// Find the store for a path.
    pub fn for_path(&self, path: &Path) -> Result<Arc<dyn DocumentStore>> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        self.stores
            .get(&ext.to_lowercase())
            .cloned()
            .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))
    }

    /// Load a document with the store matching its extension.
    pub fn load(&self, path: &Path) -> Result<Document> {
        let store = self.for_path(path)?;
        log::debug!("Loading {} with the {} store", path.display(), store.name());
        store.load(path)
    }

    /// Save a document with the store matching its extension.
    pub fn save(&self, doc: &Document, path: &Path) -> Result<()> {
        let store = self.for_path(path)?;
        log::debug!("Saving {} with the {} store", path.display(), store.name());
        store.save(doc, path)
    }
}

impl Default for StoreRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
