//! Farming assistant chat endpoints.
//!
//! A well-formed chat request always answers 200: upstream failures are
//! already folded into fallback messages by the gateway.

use axum::{extract::State, http::HeaderMap, response::IntoResponse};
use std::sync::Arc;

use crate::api::{ApiJson, DataResponse};
use crate::app::AppState;
use crate::domain::assistant::{
    ChatRequest, ChatResponse, SuggestionsResponse, SUGGESTED_QUESTIONS,
};
use crate::middleware::RequestIdExt;

/// Ask the assistant a farming question.
///
/// POST /assistant/chat
pub async fn chat(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<ChatRequest>,
) -> impl IntoResponse {
    tracing::debug!(
        request_id = headers.request_id().unwrap_or("-"),
        message_len = req.message.len(),
        "Chat message received"
    );

    let answer = state.assistant.answer(&req.message).await;

    DataResponse::new(ChatResponse { answer })
}

/// Starter questions for an empty conversation.
///
/// GET /assistant/suggestions
pub async fn suggestions() -> impl IntoResponse {
    DataResponse::new(SuggestionsResponse {
        suggestions: SUGGESTED_QUESTIONS.iter().map(|s| s.to_string()).collect(),
    })
}
