//! # Document Sources
//!
//! Storage collaborators the store reads raw document bytes from.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use super::errors::{DocumentError, DocumentResult};

/// Raw access to stored documents
pub trait DocumentSource: Send + Sync + fmt::Debug {
    /// List every document id this source can serve
    fn list_ids(&self) -> DocumentResult<Vec<String>>;

    /// Read the raw bytes of a document
    fn read_document(&self, id: &str) -> DocumentResult<Vec<u8>>;
}

/// Directory of `<id>.json` files
#[derive(Debug)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Create a source rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn document_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.json", id))
    }
}

impl DocumentSource for DirectorySource {
    fn list_ids(&self) -> DocumentResult<Vec<String>> {
        let entries = fs::read_dir(&self.root).map_err(|e| {
            DocumentError::Storage(format!(
                "Failed to read bible directory {}: {}",
                self.root.display(),
                e
            ))
        })?;

        let mut ids = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| DocumentError::Storage(e.to_string()))?
                .path();

            // Skip non-JSON files
            if !path.is_file() || path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }

            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }

        ids.sort();
        Ok(ids)
    }

    fn read_document(&self, id: &str) -> DocumentResult<Vec<u8>> {
        fs::read(self.document_path(id)).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                DocumentError::DocumentNotFound(id.to_string())
            } else {
                DocumentError::Storage(e.to_string())
            }
        })
    }
}

/// In-memory source, mostly for tests and embedding
#[derive(Debug, Default)]
pub struct MemorySource {
    documents: BTreeMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, replacing any existing one with the same id
    pub fn with_document(mut self, id: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.documents.insert(id.into(), bytes.into());
        self
    }
}

impl DocumentSource for MemorySource {
    fn list_ids(&self) -> DocumentResult<Vec<String>> {
        Ok(self.documents.keys().cloned().collect())
    }

    fn read_document(&self, id: &str) -> DocumentResult<Vec<u8>> {
        self.documents
            .get(id)
            .cloned()
            .ok_or_else(|| DocumentError::DocumentNotFound(id.to_string()))
    }
}
