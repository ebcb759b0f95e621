use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use matcher::MatchResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Chat request
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user's free-text message
    pub message: String,
}

/// Chat response
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Answer a free-text query against the catalog.
///
/// The query is normalized, scored against every catalog question, and the
/// best candidate is accepted only when it clears the confidence threshold;
/// otherwise the fixed fallback reply is returned. Either way the response
/// body is `{"response": <reply>}`.
///
/// A missing or malformed `message` field is a client error; an empty
/// catalog is a server error.
pub async fn chat(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ServerResult<impl IntoResponse> {
    let Json(request) = payload
        .map_err(|err| ServerError::BadRequest(format!("'message' is required: {err}")))?;

    tracing::info!(message = %request.message, "received chat query");
    let result = state.engine.answer(&request.message)?;

    Ok(Json(ChatResponse {
        response: result.answer,
    }))
}

/// Answer a query and return the full match result.
///
/// Same pipeline as [`chat`], but the response carries the matched flag,
/// the score, and the matched catalog question. Intended for threshold
/// tuning and debugging rather than end users.
pub async fn match_query(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ServerResult<Json<MatchResult>> {
    let Json(request) = payload
        .map_err(|err| ServerError::BadRequest(format!("'message' is required: {err}")))?;

    let result = state.engine.answer(&request.message)?;
    Ok(Json(result))
}
