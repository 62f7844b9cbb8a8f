//! CLI command implementations
//!
//! Boot sequence shared by every command:
//! 1. Configuration load
//! 2. Catalog load (serve, check)
//! 3. Document registry scan
//! 4. Optional preload

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::document::{
    Book, CachePolicy, Chapter, DirectorySource, Document, DocumentResult, DocumentStore, Verse,
};
use crate::http_server::{HttpServer, ServerContext};
use crate::logging;
use crate::resolver;

use super::args::{Cli, Command, ReadTarget};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::Check { config } => check(&config),
        Command::Read { config, target } => read(&config, &target),
    }
}

fn open_store(config: &Config, policy: CachePolicy) -> CliResult<DocumentStore> {
    let source = DirectorySource::new(&config.data_dir);
    Ok(DocumentStore::open(source, policy)?)
}

/// Start the HTTP server
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = Config::load(config_path)?;
    logging::init(&config.log_level);

    if let Some(port) = port {
        config.server.port = port;
    }

    let catalog = Catalog::load(&config.versions_file, &config.languages_file)?;
    info!(
        translations = catalog.translations().len(),
        languages = catalog.languages().len(),
        "catalogs loaded"
    );

    let store = open_store(&config, config.cache)?;
    if store.is_empty() {
        warn!(data_dir = %config.data_dir.display(), "no bibles found");
    }
    if config.preload {
        store.preload()?;
    }

    let context = ServerContext {
        store: Arc::new(store),
        catalog: Arc::new(catalog),
        search_mode: config.search_mode,
    };
    let server = HttpServer::new(config.server.clone(), context);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Per-document line of the check report
#[derive(Debug, Serialize)]
pub struct DocumentReport {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub books: usize,
    pub verses: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub documents: Vec<DocumentReport>,
    /// Catalog translations with no bible file
    pub missing_documents: Vec<String>,
    pub languages: usize,
}

impl CheckReport {
    pub fn failures(&self) -> usize {
        self.documents.iter().filter(|d| d.error.is_some()).count()
    }
}

/// Parses every document and both catalogs, then prints a summary.
///
/// Fails after printing when any document is unreadable.
pub fn check(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    logging::init(&config.log_level);

    let catalog = Catalog::load(&config.versions_file, &config.languages_file)?;
    let store = open_store(&config, CachePolicy::Reload)?;

    let report = build_report(&store, &catalog);
    write_json(&report)?;

    match report.failures() {
        0 => Ok(()),
        n => Err(CliError::boot_failed(format!("{} bible(s) failed to load", n))),
    }
}

/// Loads each registered document in turn and records counts or the failure
pub fn build_report(store: &DocumentStore, catalog: &Catalog) -> CheckReport {
    let documents = store
        .ids()
        .map(|id| {
            let name = catalog.translation(id).map(|t| t.name.clone());
            match store.load(id) {
                Ok(document) => DocumentReport {
                    id: id.to_string(),
                    name,
                    books: document.book_count(),
                    verses: document.verse_count(),
                    error: None,
                },
                Err(e) => DocumentReport {
                    id: id.to_string(),
                    name,
                    books: 0,
                    verses: 0,
                    error: Some(e.to_string()),
                },
            }
        })
        .collect();

    CheckReport {
        documents,
        missing_documents: catalog
            .missing_documents(store.ids())
            .into_iter()
            .map(|t| format!("{} ({})", t.name, t.id))
            .collect(),
        languages: catalog.languages().len(),
    }
}

/// One-shot lookup printed as JSON
pub fn read(config_path: &Path, target: &ReadTarget) -> CliResult<()> {
    let config = Config::load(config_path)?;
    logging::init(&config.log_level);

    let store = open_store(&config, CachePolicy::Reload)?;
    let document = store.load(&target.bible)?;
    let found = lookup(&document, target)?;

    write_json(&found)
}

/// Result of a `read` lookup
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Lookup<'a> {
    Book(&'a Book),
    Chapter(&'a Chapter),
    Verse(&'a Verse),
    Range(&'a [Verse]),
}

/// Resolves a read target against a document
pub fn lookup<'a>(document: &'a Document, target: &ReadTarget) -> DocumentResult<Lookup<'a>> {
    let book = target.book;
    let found = match (target.chapter, target.verse, target.range) {
        (None, _, _) => Lookup::Book(resolver::book(document, book)?),
        (Some(chapter), Some(verse), _) => {
            Lookup::Verse(resolver::verse(document, book, chapter, verse)?)
        }
        (Some(chapter), None, Some((first, last))) => {
            Lookup::Range(resolver::verse_range(document, book, chapter, first, last)?)
        }
        (Some(chapter), None, None) => Lookup::Chapter(resolver::chapter(document, book, chapter)?),
    };
    Ok(found)
}
