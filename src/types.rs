use serde::{Deserialize, Serialize};

/// Which way the translation flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    ToPangyo,
    ToKorean,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub direction: Direction,
}

/// A Pangyo-eo term used in the translated sentence, with its explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermExplanation {
    pub term: String,
    pub meaning: String,
    #[serde(default)]
    pub original: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub original: String,
    pub translated: String,
    pub direction: Direction,
    pub terms: Vec<TermExplanation>,
}
