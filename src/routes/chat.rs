// src/routes/chat.rs
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use crate::error::AppError;
use crate::message::{ChatRequest, ChatResponse};
use crate::services::prompt::build_prompt;
use crate::state::SharedState;

pub const EMPTY_MESSAGE: &str = "⚠️ Please type a message.";

pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    // A missing or undecodable body counts as an empty message.
    let payload: ChatRequest = serde_json::from_slice(&body).unwrap_or_default();

    let message = payload.message.trim();
    if message.is_empty() {
        return Err(AppError::BadRequest(EMPTY_MESSAGE.to_string()));
    }

    let prompt = build_prompt(message, &payload.language);
    let response = state.gemini.generate(&prompt).await?;

    Ok(Json(ChatResponse { response }))
}
