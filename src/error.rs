use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::llm::LlmError;

/// Request-level error taxonomy. Validation failures are the client's to
/// fix; provider and parse failures ask the client to resubmit.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("번역 중 오류가 발생했습니다: {0}")]
    Provider(#[from] LlmError),
    #[error("LLM 응답을 파싱할 수 없습니다. 다시 시도해주세요.")]
    Parse(#[source] serde_json::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Provider(_) | ApiError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
