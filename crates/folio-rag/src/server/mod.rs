//! HTTP server for the answer service
//!
//! Serves `POST /api/ask` from the service knowledge base and the widget's static assets
//! from `server.static_dir`.

pub mod routes;
pub mod state;

use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::FolioConfig;
use crate::error::{Error, Result};
use state::AppState;

/// Answer service HTTP server
pub struct AnswerServer {
    config: FolioConfig,
    state: AppState,
}

impl AnswerServer {
    /// Create a new server; fails if the service knowledge base is invalid
    pub fn new(config: FolioConfig) -> Result<Self> {
        let state = AppState::new(&config)?;
        Ok(Self { config, state })
    }

    /// Build the router with all routes
    pub fn router(&self) -> Router {
        let static_files = ServeDir::new(&self.config.server.static_dir)
            .append_index_html_on_directories(true);

        let router = Router::new()
            .route("/health", get(health_check))
            .nest("/api", routes::api_routes())
            .with_state(self.state.clone())
            .fallback_service(static_files)
            .layer(TraceLayer::new_for_http());

        if self.config.server.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            router.layer(cors)
        } else {
            router
        }
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = self
            .address()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid address: {}", e)))?;

        let router = self.router();

        tracing::info!("Starting answer service on http://{}", addr);
        tracing::info!(
            "Serving static files from {}",
            self.config.server.static_dir.display()
        );

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| Error::Config(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, router).await?;

        Ok(())
    }

    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.server.host, self.config.server.port)
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
