//! OpenRouter gateway adapter.
//!
//! Implements the application's [`QuoteGateway`] port over HTTP. Each
//! `complete` call issues exactly one POST to the chat-completion endpoint
//! and classifies the outcome into the port's failure taxonomy; the
//! per-attempt timeout expires into `Unreachable` so the orchestrator's
//! chain walk always terminates.

use crate::config::FileProviderConfig;
use crate::openrouter::protocol::{ChatCompletionReply, ChatCompletionRequest, ChatMessage};
use async_trait::async_trait;
use quotecraft_application::config::GenerationParams;
use quotecraft_application::ports::quote_gateway::{GatewayError, QuoteGateway};
use quotecraft_domain::Model;
use tracing::debug;

/// HTTP adapter for the OpenRouter chat-completion API.
pub struct OpenRouterGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    referer: String,
    app_title: String,
    params: GenerationParams,
}

impl OpenRouterGateway {
    /// Build from resolved provider settings.
    ///
    /// Credential resolution (env var or explicit key) happens in the
    /// config layer before this point; a missing key never surfaces
    /// mid-pipeline.
    pub fn new(config: &FileProviderConfig, api_key: String, params: GenerationParams) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            referer: config.referer.clone(),
            app_title: config.app_title.clone(),
            params,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/v1/chat/completions", self.base_url)
    }
}

#[async_trait]
impl QuoteGateway for OpenRouterGateway {
    async fn complete(
        &self,
        model: &Model,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GatewayError> {
        let request = ChatCompletionRequest {
            model: model.to_string(),
            messages: vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(user_prompt),
            ],
            max_tokens: self.params.max_tokens,
            temperature: self.params.temperature,
        };

        debug!("POST {} model={}", self.endpoint(), model);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", &self.app_title)
            .timeout(self.params.request_timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Unreachable("request timed out".to_string())
                } else {
                    GatewayError::Unreachable(e.to_string())
                }
            })?;

        if let Some(failure) = classify_status(response.status().as_u16()) {
            return Err(failure);
        }

        let reply: ChatCompletionReply = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedEnvelope(e.to_string()))?;

        extract_content(reply)
    }
}

/// Map a non-success HTTP status to its failure kind.
fn classify_status(status: u16) -> Option<GatewayError> {
    match status {
        200..=299 => None,
        401 | 403 => Some(GatewayError::Unauthorized),
        429 => Some(GatewayError::RateLimited),
        other => Some(GatewayError::BadStatus(other)),
    }
}

/// Pull the assistant content out of a decoded envelope.
fn extract_content(reply: ChatCompletionReply) -> Result<String, GatewayError> {
    reply
        .into_content()
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| {
            GatewayError::MalformedEnvelope("reply has no message content".to_string())
        })
}
