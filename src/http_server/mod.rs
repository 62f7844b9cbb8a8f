//! # HTTP Server Module
//!
//! Axum front end for the bible API.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/bible/all`, `/api/languages` - Catalogs
//! - `/api/bible/*` - Books, chapters, verses, search, random verse

pub mod bible_routes;
pub mod catalog_routes;
pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::{HttpServer, ServerContext};
