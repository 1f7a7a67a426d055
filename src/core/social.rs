//! Social post parser
//!
//! The model is asked to stay under the limit, but that is advisory. The
//! length cap is enforced here on every reply.

use serde_json::Value;

use super::article::SocialPost;
use super::extract::json_object;

/// Maximum post length in characters
pub const MAX_POST_CHARS: usize = 100;

const ELLIPSIS: &str = "...";

/// Used when the reply carried JSON but no `content` field
pub const MISSING_CONTENT: &str = "Failed to generate the social post text";

/// Used when the reply carried no usable JSON at all
pub const FALLBACK_POST: &str = "Couldn't come up with a catchy post this time 🤖 #AI #blog";

/// Parse a model reply into a length-capped post
pub fn parse_post(raw: &str) -> SocialPost {
    let Some(obj) = json_object(raw) else {
        tracing::warn!("Social post reply had no usable JSON object; using fallback post");
        return SocialPost::new(FALLBACK_POST);
    };

    let content = obj
        .get("content")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(MISSING_CONTENT);

    if let Some(reported) = obj.get("characterCount").and_then(Value::as_u64) {
        tracing::debug!("Model reported {} characters (ignored)", reported);
    }

    SocialPost::new(truncate(content))
}

/// Cap `text` at [`MAX_POST_CHARS`], ending with an ellipsis when cut
pub fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_POST_CHARS {
        return text.to_string();
    }
    let keep = MAX_POST_CHARS - ELLIPSIS.chars().count();
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}
