use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Connection establishment budget for one provider request.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Overall budget for one provider request, response body included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
/// Additional attempts after the first, for transient failures only.
pub const MAX_RETRIES: u32 = 2;

const RETRY_BACKOFF: Duration = Duration::from_millis(300);

/// Interface for a hosted text-generation model.
///
/// Implementations send one prompt and return the raw textual reply.
/// They hold no conversation state between calls.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLM 인증에 실패했습니다 (status {0})")]
    Auth(u16),
    #[error("LLM 요청 한도를 초과했습니다")]
    RateLimited,
    #[error("LLM 응답 시간이 초과되었습니다")]
    Timeout,
    #[error("LLM 서버에 연결할 수 없습니다: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("LLM 서버 오류 (status {status})")]
    Api { status: u16, body: String },
    #[error("LLM 응답에 텍스트가 없습니다")]
    EmptyReply,
}

impl LlmError {
    /// Timeouts, transport failures, rate limits and provider 5xx are worth
    /// another attempt; auth and other client-side rejections are terminal.
    pub fn is_transient(&self) -> bool {
        match self {
            LlmError::Timeout | LlmError::Transport(_) | LlmError::RateLimited => true,
            LlmError::Api { status, .. } => *status >= 500,
            LlmError::Auth(_) | LlmError::EmptyReply => false,
        }
    }

    pub fn from_request_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Transport(err)
        }
    }

    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => LlmError::Auth(status),
            429 => LlmError::RateLimited,
            _ => LlmError::Api { status, body },
        }
    }
}

/// Runs `attempt` up to `1 + max_retries` times, retrying transient
/// failures with a short linear backoff. Terminal errors return at once.
pub(crate) async fn with_retries<F, Fut>(max_retries: u32, mut attempt: F) -> Result<String, LlmError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<String, LlmError>>,
{
    let mut tries = 0;
    loop {
        match attempt().await {
            Ok(text) => return Ok(text),
            Err(e) if e.is_transient() && tries < max_retries => {
                tries += 1;
                warn!("LLM request failed (attempt {}): {}; retrying", tries, e);
                tokio::time::sleep(RETRY_BACKOFF * tries).await;
            }
            Err(e) => return Err(e),
        }
    }
}
