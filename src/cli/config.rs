//! Configuration file
//!
//! Relative paths are resolved against the directory holding the config file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::document::CachePolicy;
use crate::http_server::HttpServerConfig;
use crate::verses::SearchMode;

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory of `<id>.json` bible files (required)
    pub data_dir: PathBuf,

    /// Translations catalog (default "versions.json")
    #[serde(default = "default_versions_file")]
    pub versions_file: PathBuf,

    /// Languages catalog (default "languages.json")
    #[serde(default = "default_languages_file")]
    pub languages_file: PathBuf,

    /// Keep parsed bibles in memory (default "retain")
    #[serde(default)]
    pub cache: CachePolicy,

    /// Parse every bible at boot instead of on first request
    #[serde(default)]
    pub preload: bool,

    /// Case handling for verse search (default "compat")
    #[serde(default)]
    pub search_mode: SearchMode,

    /// Log level used when RUST_LOG is unset (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub server: HttpServerConfig,
}

fn default_versions_file() -> PathBuf {
    PathBuf::from("versions.json")
}

fn default_languages_file() -> PathBuf {
    PathBuf::from("languages.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let mut config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }

        Ok(config)
    }

    fn resolve_paths(&mut self, base: &Path) {
        for path in [
            &mut self.data_dir,
            &mut self.versions_file,
            &mut self.languages_file,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(CliError::config_error("data_dir must not be empty"));
        }

        if self.server.port == 0 {
            return Err(CliError::config_error("server.port must be > 0"));
        }

        Ok(())
    }
}
