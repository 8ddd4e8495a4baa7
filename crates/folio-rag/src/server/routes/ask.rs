//! Question endpoint

use axum::{body::Bytes, extract::State, Json};

use crate::error::Result;
use crate::server::state::AppState;
use crate::types::{AskRequest, AskResponse};

/// POST /api/ask - answer a question from the service knowledge base
///
/// The body is parsed as JSON regardless of content type. A body without a `question`
/// field is answered as an empty question.
pub async fn ask(State(state): State<AppState>, body: Bytes) -> Result<Json<AskResponse>> {
    let request: AskRequest = serde_json::from_slice(&body)?;

    tracing::info!("Ask: \"{}\"", request.question);

    let local = state.matcher().find_answer(&request.question);
    tracing::debug!(source = %local.source(), "Answer selected");

    Ok(Json(AskResponse::new(local.answer())))
}
