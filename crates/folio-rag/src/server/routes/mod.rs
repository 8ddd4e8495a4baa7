//! API routes for the answer service

pub mod ask;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ask", post(ask::ask))
        .route("/info", get(info))
}

/// API info endpoint
async fn info(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "folio-rag",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Portfolio assistant answer service",
        "rules": state.matcher().knowledge().len(),
        "endpoints": {
            "POST /api/ask": "Answer a question: {\"question\": ...} -> {\"answer\": ...}",
            "GET /api/info": "This document",
            "GET /health": "Liveness check"
        }
    }))
}
