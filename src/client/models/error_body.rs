//! Error response bodies

use serde_json::Value;

/// Body fields that may carry a human-readable message, in order of preference
pub const MESSAGE_FIELDS: [&str; 2] = ["message", "error"];

/// Best-effort message from an error response body.
///
/// Checks the [`MESSAGE_FIELDS`] of a JSON object in order, then a JSON
/// string, then the raw body text. Returns `None` for an empty body.
pub fn extract_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(fields)) => MESSAGE_FIELDS.iter().find_map(|field| {
            fields
                .get(*field)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        }),
        Ok(Value::String(text)) if !text.is_empty() => Some(text),
        Ok(_) => None,
        Err(_) => Some(body.to_string()),
    }
}
