use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use super::interface::{
    with_retries, LlmClient, LlmError, CONNECT_TIMEOUT, MAX_RETRIES, REQUEST_TIMEOUT,
};
use crate::config::ClaudeConfig;
use crate::prompt::SYSTEM_PROMPT;

const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1024;

/// Anthropic messages-API client.
///
/// The messages API has no JSON response-format constraint; the system
/// prompt and the instruction template carry that requirement instead.
pub struct ClaudeLlm {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

impl ClaudeLlm {
    pub fn new(config: &ClaudeConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        info!(
            "Initialized ClaudeLlm: model={}, base_url={}",
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
        let url = format!("{}/v1/messages", self.base_url);
        let body = json!({
            "model": self.model,
            "max_tokens": MAX_TOKENS,
            "system": SYSTEM_PROMPT,
            "messages": [
                {"role": "user", "content": prompt},
            ],
        });

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(LlmError::from_request_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::from_status(status.as_u16(), body));
        }

        let messages: MessagesResponse = response
            .json()
            .await
            .map_err(LlmError::from_request_error)?;

        messages
            .content
            .into_iter()
            .find_map(|block| block.text)
            .ok_or(LlmError::EmptyReply)
    }
}

#[async_trait]
impl LlmClient for ClaudeLlm {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        with_retries(MAX_RETRIES, || self.try_complete(prompt)).await
    }
}
