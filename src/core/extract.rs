//! JSON block extraction from model replies
//!
//! Models tend to wrap the requested JSON object in prose or markdown
//! fences. We take the span from the first `{` through the last `}`.
//! This is deliberately not a JSON-aware scanner: two separate objects in
//! one reply produce one (invalid) span, which the callers then treat as a
//! parse failure.

use serde_json::Value;

/// Greedy `{...}` span: first `{` through the last `}` after it
pub fn json_block(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Extract and parse the greedy JSON span as an object
pub fn json_object(text: &str) -> Option<serde_json::Map<String, Value>> {
    let block = json_block(text)?;
    match serde_json::from_str::<Value>(block) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!("JSON block did not parse: {}", e);
            None
        }
    }
}
