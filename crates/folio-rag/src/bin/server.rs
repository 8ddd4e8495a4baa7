//! Answer service binary
//!
//! Run with: cargo run -p folio-rag --bin folio-server
//! Set FOLIO_CONFIG to a TOML file to override the built-in knowledge base.

use folio_rag::{config::FolioConfig, server::AnswerServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_rag=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = FolioConfig::load(None)?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - Service rules: {}", config.answer_service.entries.len());
    tracing::info!("  - Static files: {}", config.server.static_dir.display());

    let server = AnswerServer::new(config)?;

    println!("\nServer starting...");
    println!("  Widget: http://{}/", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("\nEndpoints:");
    println!("  POST /api/ask  - Ask a question");
    println!("  GET  /api/info - Service info");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
