// @zen-component: CHAT-RelayService
//
//! Relay service — validate, inject the system prompt, normalize, call upstream.
//!
//! Holds no state between calls. The only suspension point is the upstream
//! request.

use tracing::{debug, error};
use vitbot_core::chat::{ChatMessage, normalize};
use vitbot_core::completion::CompletionApi;
use vitbot_core::prompt::inject_system_prompt;

use crate::error::{AppError, AppResult};

/// Reply for a missing, malformed or empty conversation.
pub const INVALID_MESSAGES_REPLY: &str = "Invalid or empty messages array.";

/// Reply when the normalized conversation does not end on a user/tool turn.
pub const TERMINAL_ROLE_REPLY: &str = "Last message must be from user/tool.";

/// Reply when the upstream answered without any content.
pub const FALLBACK_REPLY: &str = "Sorry, no response.";

/// Prepare a client conversation for the completion API.
///
/// Rejects an empty conversation, injects `system_prompt` when the client
/// sent no system message, collapses same-party runs, and checks that the
/// result ends on a `user` or `tool` turn.
pub fn prepare_conversation(
    mut messages: Vec<ChatMessage>,
    system_prompt: &str,
) -> AppResult<Vec<ChatMessage>> {
    if messages.is_empty() {
        return Err(AppError::InvalidInput(INVALID_MESSAGES_REPLY.into()));
    }

    let injected = inject_system_prompt(&mut messages, system_prompt);
    let received = messages.len();
    let messages = normalize(messages);
    debug!(
        injected,
        received,
        kept = messages.len(),
        "normalized conversation"
    );

    match messages.last() {
        Some(last) if last.role.is_terminal() => Ok(messages),
        last => {
            debug!(
                last_role = last.map(|m| m.role.as_str()),
                "rejecting conversation with non-terminal last role"
            );
            Err(AppError::InvalidInput(TERMINAL_ROLE_REPLY.into()))
        }
    }
}

/// Relay a conversation to the completion API and return the reply text.
pub async fn relay(
    completion: &dyn CompletionApi,
    system_prompt: &str,
    messages: Vec<ChatMessage>,
) -> AppResult<String> {
    let messages = prepare_conversation(messages, system_prompt)?;

    let response = completion.complete(&messages).await.map_err(|e| {
        error!(error = %e, "completion API call failed");
        AppError::from(e)
    })?;

    if let Some(message) = response.error_message() {
        debug!(upstream_error = message, "completion API reported an error");
        return Err(AppError::Upstream(message.to_string()));
    }

    Ok(response
        .reply_text()
        .unwrap_or(FALLBACK_REPLY)
        .to_string())
}
