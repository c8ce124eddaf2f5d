// @zen-component: CHAT-RelayHandler
//
//! Chat request handler — relays a conversation to the completion API.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tracing::debug;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{ChatReply, ChatRequest};
use crate::services::relay::{self, INVALID_MESSAGES_REPLY};

/// `POST /api/chat` — answer the last user turn of a conversation.
///
/// Any body that does not decode to `{ "messages": [...] }` is reported the
/// same way as an empty conversation.
pub async fn chat_handler(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatReply>> {
    let Json(request) = body.map_err(|rejection| {
        debug!(error = %rejection.body_text(), "rejecting malformed chat request");
        AppError::InvalidInput(INVALID_MESSAGES_REPLY.into())
    })?;

    let reply = relay::relay(
        state.completion.as_ref(),
        &state.config.system_prompt,
        request.messages,
    )
    .await?;

    Ok(Json(ChatReply::new(reply)))
}
