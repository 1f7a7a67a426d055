//! Article content parser
//!
//! Turns a raw model reply into an [`ArticleDraft`]. Never fails: a reply
//! without a usable JSON object becomes a fallback draft that wraps the raw
//! text as the article body.

use serde_json::{Map, Value};

use super::article::{ArticleDraft, ArticleMetadata};
use super::extract::json_object;

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_HTML: &str = "<p>No content generated</p>";

pub const FALLBACK_TITLE: &str = "Generated Blog Post";
pub const FALLBACK_SUMMARY: &str = "AI-generated blog post from learning content";
pub const FALLBACK_TAGS: [&str; 3] = ["generated", "ai", "blog"];

/// Parse a model reply into an article draft
pub fn parse_article(raw: &str) -> ArticleDraft {
    match json_object(raw) {
        Some(obj) => from_object(&obj),
        None => {
            tracing::warn!(
                "Model reply had no usable JSON object ({} chars); using fallback article",
                raw.chars().count()
            );
            fallback(raw)
        }
    }
}

fn from_object(obj: &Map<String, Value>) -> ArticleDraft {
    let metadata = obj.get("metadata");

    ArticleDraft {
        title: non_empty_str(obj.get("title")).unwrap_or(DEFAULT_TITLE).to_string(),
        summary: non_empty_str(obj.get("summary")).unwrap_or_default().to_string(),
        html_content: non_empty_str(obj.get("htmlContent"))
            .unwrap_or(DEFAULT_HTML)
            .to_string(),
        tags: tags(obj.get("tags")),
        metadata: ArticleMetadata {
            reading_time: positive_int(metadata.and_then(|m| m.get("readingTime"))).unwrap_or(1),
            word_count: positive_int(metadata.and_then(|m| m.get("wordCount"))).unwrap_or(0),
        },
    }
}

/// Draft synthesized from the raw reply when no JSON could be read
pub fn fallback(raw: &str) -> ArticleDraft {
    let chars = raw.chars().count();
    let reading_time = chars.div_ceil(1000);
    let word_count = raw.split_whitespace().count();

    ArticleDraft {
        title: FALLBACK_TITLE.to_string(),
        summary: FALLBACK_SUMMARY.to_string(),
        html_content: format!("<div class=\"blog-content\">{}</div>", raw),
        tags: FALLBACK_TAGS.iter().map(|t| t.to_string()).collect(),
        metadata: ArticleMetadata::new(saturate(reading_time), saturate(word_count)),
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Keep string entries of a list; anything that is not a list yields no tags
fn tags(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Non-zero number, rounded up to a whole count. Zero, negatives and
/// non-numbers fall back to the field default.
fn positive_int(value: Option<&Value>) -> Option<u32> {
    let n = value.and_then(Value::as_f64)?;
    if !n.is_finite() || n <= 0.0 {
        return None;
    }
    Some(n.ceil().min(u32::MAX as f64) as u32)
}

fn saturate(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_reply_passes_through() {
        let raw = r#"Here is your article:
{
  "title": "Understanding Lifetimes",
  "summary": "How the borrow checker reasons about references.",
  "htmlContent": "<div class='blog-content'><h2>Intro</h2><p>Lifetimes...</p></div>",
  "tags": ["rust", "lifetimes", "borrowck"],
  "metadata": {"readingTime": 4, "wordCount": 812}
}"#;
        let draft = parse_article(raw);

        assert_eq!(draft.title, "Understanding Lifetimes");
        assert_eq!(draft.summary, "How the borrow checker reasons about references.");
        assert_eq!(
            draft.html_content,
            "<div class='blog-content'><h2>Intro</h2><p>Lifetimes...</p></div>"
        );
        assert_eq!(draft.tags, vec!["rust", "lifetimes", "borrowck"]);
        assert_eq!(draft.metadata, ArticleMetadata { reading_time: 4, word_count: 812 });
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let draft = parse_article("{}");

        assert_eq!(draft.title, DEFAULT_TITLE);
        assert_eq!(draft.summary, "");
        assert_eq!(draft.html_content, DEFAULT_HTML);
        assert!(draft.tags.is_empty());
        assert_eq!(draft.metadata, ArticleMetadata { reading_time: 1, word_count: 0 });
    }

    #[test]
    fn test_empty_title_and_zero_reading_time_defaulted() {
        let draft = parse_article(r#"{"title": "", "metadata": {"readingTime": 0, "wordCount": 0}}"#);
        assert_eq!(draft.title, DEFAULT_TITLE);
        assert_eq!(draft.metadata.reading_time, 1);
        assert_eq!(draft.metadata.word_count, 0);
    }

    #[test]
    fn test_tags_not_a_list() {
        let draft = parse_article(r#"{"title": "T", "tags": "rust, go"}"#);
        assert!(draft.tags.is_empty());
    }

    #[test]
    fn test_duplicate_tags_kept_in_order() {
        let draft = parse_article(r#"{"tags": ["b", "a", "b"]}"#);
        assert_eq!(draft.tags, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_not_json_falls_back() {
        let raw = "not json at all";
        let draft = parse_article(raw);

        assert_eq!(draft.title, FALLBACK_TITLE);
        assert_eq!(draft.summary, FALLBACK_SUMMARY);
        assert_eq!(draft.tags, vec!["generated", "ai", "blog"]);
        assert_eq!(draft.html_content, "<div class=\"blog-content\">not json at all</div>");
        assert_eq!(draft.metadata.word_count, 4);
        assert_eq!(draft.metadata.reading_time, 1);
    }

    #[test]
    fn test_malformed_json_falls_back() {
        let raw = "{\"title\": \"Half";
        let draft = parse_article(raw);
        assert_eq!(draft.title, FALLBACK_TITLE);

        let raw = "{\"title\": \"Broken\",}";
        let draft = parse_article(raw);
        assert_eq!(draft.title, FALLBACK_TITLE);
        assert!(draft.html_content.contains("Broken"));
    }

    #[test]
    fn test_fallback_estimates() {
        let raw = "word ".repeat(500);
        let draft = fallback(&raw);

        // 2500 chars -> 3 minutes
        assert_eq!(draft.metadata.reading_time, 3);
        assert_eq!(draft.metadata.word_count, 500);
    }

    #[test]
    fn test_fallback_on_empty_reply_keeps_minimum_reading_time() {
        let draft = fallback("");
        assert_eq!(draft.metadata.reading_time, 1);
        assert_eq!(draft.metadata.word_count, 0);
    }

    #[test]
    fn test_fractional_metadata_rounds_up() {
        let draft = parse_article(r#"{"metadata": {"readingTime": 2.2, "wordCount": 10}}"#);
        assert_eq!(draft.metadata.reading_time, 3);
    }
}
