//! JSON document store.

use super::DocumentStore;
use crate::error::{Error, Result};
use crate::model::Document;
use std::fs;
use std::path::Path;

/// Stores documents as pretty-printed JSON.
#[derive(Debug, Clone, Default)]
pub struct JsonStore {
    _private: (),
}

impl JsonStore {
    /// Create a new JSON store.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Parse a document from JSON text.
    pub fn parse(&self, text: &str) -> Result<Document> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize a document to JSON text.
    pub fn to_string(&self, doc: &Document) -> Result<String> {
        Ok(serde_json::to_string_pretty(doc)?)
    }
}

impl DocumentStore for JsonStore {
    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn name(&self) -> &str {
        "json"
    }

    fn load(&self, path: &Path) -> Result<Document> {
        let text = fs::read_to_string(path).map_err(|e| Error::load(path, e.into()))?;
        let doc = self.parse(&text).map_err(|e| Error::load(path, e))?;
        log::debug!(
            "Loaded {} with {} paragraphs and {} tables",
            path.display(),
            doc.paragraphs.len(),
            doc.tables.len()
        );
        Ok(doc)
    }

    fn save(&self, doc: &Document, path: &Path) -> Result<()> {
        let text = self.to_string(doc).map_err(|e| Error::save(path, e))?;
        fs::write(path, text).map_err(|e| Error::save(path, e.into()))?;
        log::debug!("Saved {}", path.display());
        Ok(())
    }
}
