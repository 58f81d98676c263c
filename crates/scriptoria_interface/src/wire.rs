//! Response body interpretation shared by gateway implementations.

use scriptoria_core::Document;
use scriptoria_error::RemoteError;
use serde_json::Value;
use tracing::debug;

/// Keys that may carry a human-readable failure reason, most specific first.
const DETAIL_KEYS: [&str; 5] = ["details", "errorDetail", "errorMessage", "error", "message"];

/// Pull the most specific failure message out of a JSON error body.
///
/// # Examples
///
/// ```
/// use scriptoria_interface::error_detail;
/// use serde_json::json;
///
/// let body = json!({"success": false, "error": "Failed to generate screenplay.", "details": "rate limited"});
/// assert_eq!(error_detail(&body).as_deref(), Some("rate limited"));
/// assert_eq!(error_detail(&json!({"ok": 1})), None);
/// ```
pub fn error_detail(body: &Value) -> Option<String> {
    DETAIL_KEYS.iter().find_map(|key| {
        body.get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

/// Interpret a generation response body.
///
/// Accepts the bare document or the `{success, screenplay, ...}` envelope.
///
/// # Errors
///
/// A [`RemoteError`] when the body reports `success: false`, has no
/// `screenplay`, or does not parse; the detail field is filled from the body
/// where possible.
pub fn parse_generate_body(body: &[u8]) -> Result<Document, RemoteError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| RemoteError::new(format!("Failed to parse generation response: {}", e)))?;

    let reported_failure = value.get("success").and_then(Value::as_bool) == Some(false);
    if reported_failure || value.get("screenplay").is_none() {
        let err = RemoteError::new("Generation service returned no screenplay");
        return Err(match error_detail(&value) {
            Some(detail) => err.with_detail(detail),
            None => err,
        });
    }

    let document: Document = serde_json::from_value(value).map_err(|e| {
        RemoteError::new(format!("Generation response did not match the document shape: {}", e))
    })?;
    debug!(
        title = %document.title(),
        characters = document.characters.len(),
        scenes = document.scenes.len(),
        "Parsed generated document"
    );
    Ok(document)
}
