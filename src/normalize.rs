use serde_json::Value;

use crate::types::TermExplanation;

/// The fields recognized in the model's JSON reply, with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelReply {
    pub translated: String,
    pub terms: Vec<TermExplanation>,
}

/// Strips a surrounding markdown code fence from the reply, if present.
///
/// Models occasionally wrap the JSON object as ```json ... ``` despite
/// being told not to; the payload inside is what counts.
fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // The opening fence may carry a language tag ("json"); drop that line.
    let rest = match rest.split_once('\n') {
        Some((_lang, body)) => body,
        None => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Parses the raw model reply into a [`ModelReply`].
///
/// `translated` defaults to an empty string and `terms` to an empty list
/// when absent. Term entries missing `term` or `meaning` are discarded;
/// `original` defaults to empty. A reply that is not a JSON object after
/// fence stripping is an error for the whole request — no partial result
/// is ever guessed.
pub fn parse_reply(raw: &str) -> Result<ModelReply, serde_json::Error> {
    let stripped = strip_code_fence(raw);
    let value: Value = serde_json::from_str(stripped)?;

    let translated = value
        .get("translated")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string();

    let terms = value
        .get("terms")
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value::<TermExplanation>(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default();

    Ok(ModelReply { translated, terms })
}
