// @zen-component: CHAT-CompletionClient
//
//! Completion API collaborator.
//!
//! [`CompletionApi`] is the seam the relay calls through; [`perplexity`]
//! provides the HTTP implementation. The response type mirrors the
//! OpenAI-compatible `chat/completions` payload, keeping every field optional
//! because the upstream reports errors in-band.

pub mod perplexity;

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chat::ChatMessage;

pub use perplexity::PerplexityClient;

/// Default completion endpoint.
pub const DEFAULT_API_URL: &str = "https://api.perplexity.ai/chat/completions";

/// Default model identifier sent with every request.
pub const DEFAULT_MODEL: &str = "sonar-pro";

/// Default bound on a single upstream call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Errors raised while talking to the completion API.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Invalid completion API URL: {0}")]
    InvalidUrl(String),

    #[error("Completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Completion response parse error: {0}")]
    Decode(String),
}

/// Connection settings for the completion API.
#[derive(Clone)]
pub struct CompletionConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl CompletionConfig {
    /// Settings with the default endpoint, model and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// The API key must never reach the logs.
impl fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Request body sent upstream.
#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
}

/// Upstream response payload.
///
/// Both fields are kept as raw JSON; an unexpected shape in either one must
/// not fail the decode.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CompletionResponse {
    /// Normally `[{"message": {"content": "..."}}, ...]`.
    #[serde(default)]
    pub choices: Option<serde_json::Value>,
    /// Normally `{"message": "..."}`.
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

/// JSON values that count as "no error": `null`, `false`, `0` and `""`.
fn is_blank(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::Bool(b) => !b,
        serde_json::Value::Number(n) => n.as_f64() == Some(0.0),
        serde_json::Value::String(s) => s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => false,
    }
}

impl CompletionResponse {
    /// Message of the upstream-reported error, if the payload carries one.
    pub fn error_message(&self) -> Option<&str> {
        let error = self.error.as_ref().filter(|e| !is_blank(e))?;
        let message = match error {
            serde_json::Value::String(s) => Some(s.as_str()),
            other => other.get("message").and_then(|m| m.as_str()),
        };
        Some(message.unwrap_or("unknown error"))
    }

    /// Content of the first choice, if it is a non-empty string.
    pub fn reply_text(&self) -> Option<&str> {
        self.choices
            .as_ref()?
            .get(0)?
            .get("message")?
            .get("content")?
            .as_str()
            .filter(|c| !c.is_empty())
    }
}

/// A completion backend.
#[async_trait]
pub trait CompletionApi: Send + Sync {
    /// Send the conversation upstream and return the decoded payload.
    ///
    /// Upstream-reported errors come back as `Ok` with
    /// [`CompletionResponse::error`] set; only transport and decode failures
    /// are `Err`.
    async fn complete(
        &self,
        messages: &[ChatMessage],
    ) -> Result<CompletionResponse, CompletionError>;
}
