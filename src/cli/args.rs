//! CLI argument definitions using clap
//!
//! Commands:
//! - bible-api serve --config <path> [--port <port>]
//! - bible-api check --config <path>
//! - bible-api read --config <path> --bible <id> --book <n> [--chapter <n>] [--verse <n> | --range <a-b>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Bible API - serves Bible translations over HTTP
#[derive(Parser, Debug)]
#[command(name = "bible-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./bible-api.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Parse every bible and catalog, then print a summary
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./bible-api.json")]
        config: PathBuf,
    },

    /// Look up a book, chapter, verse or verse range and print it as JSON
    Read {
        /// Path to configuration file
        #[arg(long, default_value = "./bible-api.json")]
        config: PathBuf,

        #[command(flatten)]
        target: ReadTarget,
    },
}

/// Coordinates for the `read` command; all ordinals are 1-based
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ReadTarget {
    /// Bible id
    #[arg(long)]
    pub bible: String,

    /// Book ordinal
    #[arg(long)]
    pub book: i64,

    /// Chapter ordinal
    #[arg(long)]
    pub chapter: Option<i64>,

    /// Verse ordinal
    #[arg(long, requires = "chapter", conflicts_with = "range")]
    pub verse: Option<i64>,

    /// Inclusive verse range, e.g. 3-7
    #[arg(long, requires = "chapter", value_parser = parse_range)]
    pub range: Option<(i64, i64)>,
}

fn parse_range(raw: &str) -> Result<(i64, i64), String> {
    let (first, last) = raw
        .split_once('-')
        .ok_or_else(|| format!("expected <first>-<last>, got '{}'", raw))?;
    let first = first
        .trim()
        .parse()
        .map_err(|_| format!("invalid first verse '{}'", first))?;
    let last = last
        .trim()
        .parse()
        .map_err(|_| format!("invalid last verse '{}'", last))?;
    Ok((first, last))
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
