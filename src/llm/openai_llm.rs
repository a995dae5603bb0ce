use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use super::interface::{
    with_retries, LlmClient, LlmError, CONNECT_TIMEOUT, MAX_RETRIES, REQUEST_TIMEOUT,
};
use crate::config::OpenAiConfig;
use crate::prompt::SYSTEM_PROMPT;

/// OpenAI-compatible chat-completions client.
///
/// Works against the official API and any backend exposing the same
/// `/chat/completions` surface. The request pins `response_format` to a
/// JSON object so the model is constrained server-side, not just by the
/// prompt.
pub struct OpenAiLlm {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

impl OpenAiLlm {
    pub fn new(config: &OpenAiConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        info!(
            "Initialized OpenAiLlm: model={}, base_url={}",
            config.model, config.base_url
        );
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    async fn try_complete(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompt},
            ],
            "response_format": {"type": "json_object"},
            "temperature": 0.2,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(LlmError::from_request_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::from_status(status.as_u16(), body));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(LlmError::from_request_error)?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(LlmError::EmptyReply)
    }
}

#[async_trait]
impl LlmClient for OpenAiLlm {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        with_retries(MAX_RETRIES, || self.try_complete(prompt)).await
    }
}
