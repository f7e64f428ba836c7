//! Decoding of raw model output.

use serde_json::Value;

use crate::{GenflowError, Result};

const JSON_FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

/// Strip a surrounding ```json fence, if any, and trim.
///
/// Text without an opening fence is only trimmed.
pub fn strip_fences(text: &str) -> &str {
    let text = text.trim();
    match text.strip_prefix(JSON_FENCE_OPEN) {
        Some(body) => body.strip_suffix(FENCE_CLOSE).unwrap_or(body).trim(),
        None => text,
    }
}

/// Decode model output into a JSON value.
pub fn parse_response(text: &str) -> Result<Value> {
    let body = strip_fences(text);
    serde_json::from_str(body).map_err(|err| GenflowError::Parse(format!("model output is not valid json: {}", err)))
}
