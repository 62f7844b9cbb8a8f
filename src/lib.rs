//! bible-api - Bible translations served from static JSON documents
//!
//! Bible → Book → Chapter → Verse lookups with 1-based external ordinals.

pub mod catalog;
pub mod cli;
pub mod document;
pub mod http_server;
pub mod logging;
pub mod resolver;
pub mod verses;
