//! Anthropic Messages API client.
//!
//! Sends the synthesis prompt as a single user turn and extracts the
//! first text block of the model's reply.

use crate::config::AnthropicConfig;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Version header required by the Messages endpoint.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Upper bound on generated tokens per synthesis.
const MAX_OUTPUT_TOKENS: u32 = 1000;

/// Failures surfaced by the synthesis provider.
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("Anthropic API error {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("model reply contained no text content")]
    EmptyReply,
}

/// Client for the Anthropic Messages API.
#[derive(Clone)]
pub struct AnthropicClient {
    client: Client,
    config: AnthropicConfig,
}

impl AnthropicClient {
    pub fn new(config: AnthropicConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Run one synthesis prompt and return the model's text reply.
    pub async fn synthesize(&self, prompt: &str) -> Result<String, SynthesisError> {
        let request = MessagesRequest {
            model: self.config.model.clone(),
            max_tokens: MAX_OUTPUT_TOKENS,
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let url = format!("{}/v1/messages", self.config.api_base_url);

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "sending synthesis request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or(body);
            return Err(SynthesisError::Api { status, message });
        }

        let reply: MessagesResponse = response.json().await?;
        first_text_block(&reply).ok_or(SynthesisError::EmptyReply)
    }
}

fn first_text_block(reply: &MessagesResponse) -> Option<String> {
    reply.content.iter().find_map(|block| match block {
        ContentBlock::Text { text } => Some(text.clone()),
        ContentBlock::Other => None,
    })
}

// ============================================================================
// Messages API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}
