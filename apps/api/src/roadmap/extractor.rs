//! Response extraction — recovers a structured roadmap from free-form model
//! output.
//!
//! The model is asked for bare JSON but routinely wraps it in prose or
//! markdown fences. Policy: the candidate payload is the span from the first
//! `{` to the last `}` (greedy outermost braces, assuming exactly one
//! top-level object); nested braces inside strings are left to the JSON
//! parser, which does the structural validation. No fallback roadmap is ever
//! synthesized — extraction failure is fatal to the request.

use thiserror::Error;

use crate::models::roadmap::RoadmapPayload;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no JSON object found in model output")]
    NoJsonObject,

    #[error("embedded JSON is not a valid roadmap: {0}")]
    Json(#[from] serde_json::Error),

    #[error("extracted roadmap contains no items")]
    Empty,
}

/// Extracts and parses the roadmap payload embedded in `text`.
///
/// Typed deserialization doubles as schema validation: missing required
/// fields or out-of-range category/priority/resource values fail here rather
/// than being persisted.
pub fn extract_roadmap(text: &str) -> Result<RoadmapPayload, ExtractError> {
    let start = text.find('{').ok_or(ExtractError::NoJsonObject)?;
    let end = text.rfind('}').ok_or(ExtractError::NoJsonObject)?;
    if end < start {
        return Err(ExtractError::NoJsonObject);
    }

    let payload: RoadmapPayload = serde_json::from_str(&text[start..=end])?;

    if payload.items.is_empty() {
        return Err(ExtractError::Empty);
    }

    Ok(payload)
}
