//! Translation and language catalogs
//!
//! Two static lists read once at startup and shared read-only by every handler:
//! - `versions.json`: translations (id, name, language, language_id)
//! - `languages.json`: languages (id, language)
//!
//! Records serialize back exactly as read; unnamed keys ride along in `extra`.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::{Extra, Label};

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog loading errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog '{path}': {reason}")]
    Io { path: String, reason: String },

    #[error("Malformed catalog '{path}': {reason}")]
    Parse { path: String, reason: String },
}

/// An available Bible translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// Document id; matches the stem of the translation's JSON file
    pub id: Label,
    pub name: String,
    pub language: String,
    pub language_id: Label,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub id: Label,
    /// Display name of the language
    pub language: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Immutable catalog data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    translations: Vec<Translation>,
    languages: Vec<Language>,
}

impl Catalog {
    pub fn new(translations: Vec<Translation>, languages: Vec<Language>) -> Self {
        Self {
            translations,
            languages,
        }
    }

    /// Loads both catalogs from disk
    pub fn load(versions_file: &Path, languages_file: &Path) -> CatalogResult<Self> {
        Ok(Self::new(read_list(versions_file)?, read_list(languages_file)?))
    }

    pub fn translations(&self) -> &[Translation] {
        &self.translations
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Finds a translation by document id
    pub fn translation(&self, id: &str) -> Option<&Translation> {
        self.translations.iter().find(|t| t.id.to_string() == id)
    }

    /// Translations whose id has no entry in `document_ids`
    pub fn missing_documents<'a, I>(&self, document_ids: I) -> Vec<&Translation>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let known: Vec<&str> = document_ids.into_iter().collect();
        self.translations
            .iter()
            .filter(|t| !known.contains(&t.id.to_string().as_str()))
            .collect()
    }
}

fn read_list<T: DeserializeOwned>(path: &Path) -> CatalogResult<Vec<T>> {
    let content = fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| CatalogError::Parse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
