//! Document store: registry of known bibles plus an optional read-through cache.
//!
//! - The registry is built once, at open time, from the source's id listing
//! - Ids outside the registry are rejected without touching storage
//! - Loaded documents are immutable and shared as `Arc<Document>`

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::errors::{DocumentError, DocumentResult};
use super::source::DocumentSource;
use super::types::Document;

/// Whether parsed documents are kept between calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CachePolicy {
    /// Parse once, serve many
    #[default]
    Retain,
    /// Parse on every call
    Reload,
}

/// Registry of documents keyed by id
#[derive(Debug)]
pub struct DocumentStore {
    source: Box<dyn DocumentSource>,
    ids: BTreeSet<String>,
    policy: CachePolicy,
    cache: RwLock<HashMap<String, Arc<Document>>>,
}

impl DocumentStore {
    /// Opens a store over `source`, registering every id it lists.
    pub fn open(source: impl DocumentSource + 'static, policy: CachePolicy) -> DocumentResult<Self> {
        let ids: BTreeSet<String> = source.list_ids()?.into_iter().collect();
        info!(documents = ids.len(), ?policy, "document registry built");

        Ok(Self {
            source: Box::new(source),
            ids,
            policy,
            cache: RwLock::new(HashMap::new()),
        })
    }

    /// Registered ids, in sorted order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    /// Number of documents currently held in the cache
    pub fn cached_count(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Loads a document by id.
    ///
    /// Fails with `DocumentNotFound` for unregistered ids and `Parse` for
    /// malformed files.
    pub fn load(&self, id: &str) -> DocumentResult<Arc<Document>> {
        if !self.contains(id) {
            return Err(DocumentError::DocumentNotFound(id.to_string()));
        }

        if self.policy == CachePolicy::Reload {
            return self.parse(id).map(Arc::new);
        }

        if let Some(document) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
        {
            debug!(id, "document cache hit");
            return Ok(Arc::clone(document));
        }

        let parsed = Arc::new(self.parse(id)?);

        // A concurrent loader may have won; keep whichever copy landed first
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        let document = cache.entry(id.to_string()).or_insert(parsed);
        Ok(Arc::clone(document))
    }

    /// Parses every registered document, returning how many were loaded.
    ///
    /// Stops at the first failure.
    pub fn preload(&self) -> DocumentResult<usize> {
        let mut loaded = 0;
        for id in &self.ids {
            self.load(id)?;
            loaded += 1;
        }
        info!(loaded, "documents preloaded");
        Ok(loaded)
    }

    fn parse(&self, id: &str) -> DocumentResult<Document> {
        let bytes = self.source.read_document(id)?;
        let document = Document::from_slice(id, &bytes).map_err(|e| DocumentError::Parse {
            id: id.to_string(),
            reason: e.to_string(),
        })?;
        debug!(id, books = document.book_count(), "document parsed");
        Ok(document)
    }
}
