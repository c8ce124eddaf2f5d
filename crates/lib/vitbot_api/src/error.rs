//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use vitbot_core::completion::CompletionError;

use crate::models::ChatReply;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Reply sent for any transport failure; the detail stays in the server log.
pub const TRANSPORT_REPLY: &str = "Internal error. Try again later.";

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or unacceptable conversation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The completion API reported an error in its payload.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Calling the completion API failed.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) | AppError::Upstream(_) => StatusCode::BAD_REQUEST,
            AppError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text placed in the `reply` field for the caller.
    pub fn reply(&self) -> String {
        match self {
            AppError::InvalidInput(m) => m.clone(),
            AppError::Upstream(m) => format!("API error: {m}"),
            AppError::Transport(_) => TRANSPORT_REPLY.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(ChatReply::new(self.reply()))).into_response()
    }
}

impl From<CompletionError> for AppError {
    fn from(e: CompletionError) -> Self {
        AppError::Transport(e.to_string())
    }
}
