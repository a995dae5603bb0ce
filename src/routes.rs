use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::error;

use crate::error::ApiError;
use crate::normalize;
use crate::prompt;
use crate::state::AppState;
use crate::types::{TranslateRequest, TranslateResponse};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/", get(root_info))
        .route("/api/health", get(health_check))
        .route("/api/translate", post(translate_text))
        .with_state(state)
}

async fn root_info() -> Json<Value> {
    Json(json!({
        "service": "DEDEGO(판교어 번역기) API",
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "translate": "POST /api/translate",
            "health": "GET /api/health"
        }
    }))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Translate between standard Korean and Pangyo-eo.
///
/// Validation failures are 400s; provider and reply-parsing failures are
/// 500s with a Korean `detail` message. The response echoes the request's
/// `text` and `direction` verbatim.
async fn translate_text(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::Validation("텍스트를 입력해주세요".to_string()));
    }

    let max_chars = state.config.max_text_chars;
    if request.text.chars().count() > max_chars {
        return Err(ApiError::Validation(format!(
            "텍스트가 너무 깁니다. {}자 이내로 입력해주세요.",
            max_chars
        )));
    }

    let prompt = prompt::build(request.direction, &state.glossary, &request.text);
    let raw_reply = state.llm.complete(&prompt).await?;

    let reply = normalize::parse_reply(&raw_reply).map_err(|e| {
        error!("Unparsable LLM reply: {}; raw: {}", e, raw_reply);
        ApiError::Parse(e)
    })?;

    Ok(Json(TranslateResponse {
        original: request.text,
        translated: reply.translated,
        direction: request.direction,
        terms: reply.terms,
    }))
}
