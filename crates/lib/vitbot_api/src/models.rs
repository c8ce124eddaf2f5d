//! Request and response bodies for the chat endpoint.

use serde::{Deserialize, Serialize};
use vitbot_core::chat::ChatMessage;

/// `POST /api/chat` request body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

/// Every `/api/chat` response, success or failure, is `{"reply": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: String,
}

impl ChatReply {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}
