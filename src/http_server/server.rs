//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::bible_routes::{bible_routes, BibleState};
use super::catalog_routes::catalog_routes;
use super::config::HttpServerConfig;
use super::observability_routes::health_routes;
use crate::catalog::Catalog;
use crate::document::DocumentStore;
use crate::verses::SearchMode;

/// Everything the handlers read from; built once at boot
#[derive(Clone)]
pub struct ServerContext {
    pub store: Arc<DocumentStore>,
    pub catalog: Arc<Catalog>,
    pub search_mode: SearchMode,
}

/// HTTP server for the bible API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: HttpServerConfig, context: ServerContext) -> Self {
        let router = Self::build_router(&config, context);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    pub fn build_router(config: &HttpServerConfig, context: ServerContext) -> Router {
        let bible_state = Arc::new(BibleState::new(
            Arc::clone(&context.store),
            context.search_mode,
        ));

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| match s.parse() {
                    Ok(origin) => Some(origin),
                    Err(_) => {
                        warn!(origin = %s, "ignoring unparsable CORS origin");
                        None
                    }
                })
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        let api = Router::new()
            .merge(catalog_routes(context.catalog))
            .merge(bible_routes(bible_state));

        Router::new()
            // Health check at root level
            .merge(health_routes(context.store))
            .nest("/api", api)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;

        info!(%addr, "bible API listening");
        info!("  - /health");
        info!("  - /api/bible/* - Bibles, books, chapters, verses");
        info!("  - /api/languages - Language catalog");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{CachePolicy, MemorySource};

    fn context() -> ServerContext {
        ServerContext {
            store: Arc::new(DocumentStore::open(MemorySource::new(), CachePolicy::Retain).unwrap()),
            catalog: Arc::new(Catalog::default()),
            search_mode: SearchMode::Compat,
        }
    }

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(HttpServerConfig::default(), context());
        assert_eq!(server.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let server = HttpServer::new(HttpServerConfig::with_port(8080), context());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds_with_origins() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:5173".into(), "not a header\n".into()],
            ..Default::default()
        };
        let _router = HttpServer::new(config, context()).router();
    }
}
