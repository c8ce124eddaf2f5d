//! Perplexity `chat/completions` client.
//!
//! One POST per call, bearer-authenticated, bounded by the configured
//! timeout. No retries. The body is decoded whatever the HTTP status, since
//! error details arrive as `{"error": {"message": ...}}`.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{
    CompletionApi, CompletionConfig, CompletionError, CompletionRequest, CompletionResponse,
};
use crate::chat::ChatMessage;

/// HTTP client for an OpenAI-compatible completion endpoint.
#[derive(Debug, Clone)]
pub struct PerplexityClient {
    client: Client,
    config: CompletionConfig,
}

impl PerplexityClient {
    /// Build a client. The endpoint URL is validated up front.
    pub fn new(config: CompletionConfig) -> Result<Self, CompletionError> {
        let url: url::Url = config
            .api_url
            .parse()
            .map_err(|e| CompletionError::InvalidUrl(format!("{}: {e}", config.api_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CompletionError::InvalidUrl(format!(
                "{}: scheme must be http or https",
                config.api_url
            )));
        }

        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }
}

#[async_trait]
impl CompletionApi for PerplexityClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
    ) -> Result<CompletionResponse, CompletionError> {
        debug!(
            model = %self.config.model,
            messages = messages.len(),
            "sending completion request"
        );

        let resp = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&CompletionRequest {
                model: &self.config.model,
                messages,
            })
            .send()
            .await?;

        let status = resp.status();
        let body = resp.bytes().await?;
        if !status.is_success() {
            debug!(%status, "completion API returned non-success status");
        }

        serde_json::from_slice(&body)
            .map_err(|e| CompletionError::Decode(format!("{e} (status {status})")))
    }
}
