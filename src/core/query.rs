//! Query - In-memory filter, sort and paginate over articles
//!
//! Works on the full collection returned by the store. Filtering happens
//! first, then newest-first ordering, then the page slice.

use serde::Serialize;

use super::article::Article;

/// List query builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Case-insensitive substring matched against title, summary and tags
    pub search: Option<String>,

    /// Comma-separated tag list (ANY match, case-insensitive)
    pub tags: Option<String>,

    /// 1-indexed page number; page 0 yields no articles
    pub page: usize,

    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: None,
            tags: None,
            page: 1,
            page_size: 10,
        }
    }
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    pub fn with_page(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePage {
    pub articles: Vec<Article>,

    /// Filtered count, not the store size
    pub total: usize,

    pub page: usize,
    pub page_size: usize,
}

/// Run a list query over the whole collection
pub fn query(mut articles: Vec<Article>, q: &ListQuery) -> ArticlePage {
    if let Some(term) = q.search.as_deref() {
        let term = term.to_lowercase();
        articles.retain(|a| matches_search(a, &term));
    }

    if let Some(tags) = q.tags.as_deref() {
        let wanted = parse_tag_filter(tags);
        articles.retain(|a| {
            a.tags
                .iter()
                .any(|t| wanted.contains(&t.to_lowercase()))
        });
    }

    // Stable sort keeps stored order among equal timestamps
    articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let total = articles.len();
    let items = match q.page.checked_sub(1) {
        Some(index) => articles
            .into_iter()
            .skip(index.saturating_mul(q.page_size))
            .take(q.page_size)
            .collect(),
        None => Vec::new(),
    };

    ArticlePage {
        articles: items,
        total,
        page: q.page,
        page_size: q.page_size,
    }
}

fn matches_search(article: &Article, term: &str) -> bool {
    article.title.to_lowercase().contains(term)
        || article.summary.to_lowercase().contains(term)
        || article.tags.iter().any(|t| t.to_lowercase().contains(term))
}

/// Split a comma-separated filter into trimmed, lower-cased tags
pub fn parse_tag_filter(tags: &str) -> Vec<String> {
    tags.split(',').map(|t| t.trim().to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::article::ArticleMetadata;
    use chrono::{Duration, TimeZone, Utc};

    fn article(id: &str, title: &str, tags: &[&str], minutes: i64) -> Article {
        let created = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(minutes);
        Article {
            id: id.to_string(),
            title: title.to_string(),
            summary: format!("summary of {}", title),
            content: "<p></p>".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            metadata: ArticleMetadata::default(),
            created_at: created,
            updated_at: created,
        }
    }

    fn ids(page: &ArticlePage) -> Vec<&str> {
        page.articles.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_tag_filter_case_insensitive() {
        let store = vec![
            article("A", "Goroutines", &["go", "ai"], 1),
            article("B", "Traits", &["rust"], 2),
        ];
        let page = query(store, &ListQuery::new().with_tags("AI").with_page(1, 10));

        assert_eq!(ids(&page), vec!["A"]);
        assert_eq!(page.total, 1);
    }

    #[test]
    fn test_newest_first_without_filters() {
        let store = vec![
            article("old", "a", &[], 1),
            article("new", "b", &[], 3),
            article("mid", "c", &[], 2),
        ];
        let page = query(store, &ListQuery::new());
        assert_eq!(ids(&page), vec!["new", "mid", "old"]);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_search_matches_title_summary_or_tag() {
        let mut by_summary = article("S", "x", &[], 1);
        by_summary.summary = "All about TOKIO runtimes".to_string();
        let store = vec![
            article("T", "Tokio basics", &[], 2),
            by_summary,
            article("G", "y", &["tokio-console"], 3),
            article("N", "unrelated", &["misc"], 4),
        ];
        let page = query(store, &ListQuery::new().with_search("tokio"));
        assert_eq!(ids(&page), vec!["G", "T", "S"]);
    }

    #[test]
    fn test_search_and_tags_are_conjunctive() {
        let store = vec![
            article("1", "Async Rust", &["rust"], 1),
            article("2", "Async Go", &["go"], 2),
            article("3", "Sync Rust", &["rust"], 3),
        ];
        let page = query(store, &ListQuery::new().with_search("async").with_tags("rust"));
        assert_eq!(ids(&page), vec!["1"]);
    }

    #[test]
    fn test_tag_filter_list_trimmed() {
        let store = vec![
            article("1", "a", &["Rust"], 1),
            article("2", "b", &["Go"], 2),
            article("3", "c", &["python"], 3),
        ];
        let page = query(store, &ListQuery::new().with_tags(" rust , GO "));
        assert_eq!(ids(&page), vec!["2", "1"]);
    }

    #[test]
    fn test_tag_filter_is_exact_not_substring() {
        let store = vec![article("1", "a", &["rustacean"], 1)];
        let page = query(store, &ListQuery::new().with_tags("rust"));
        assert!(page.articles.is_empty());
    }

    #[test]
    fn test_pages_partition_collection() {
        let store: Vec<Article> = (0..7)
            .map(|i| article(&i.to_string(), "t", &[], i))
            .collect();

        let mut seen = Vec::new();
        for p in 1..=3 {
            let page = query(store.clone(), &ListQuery::new().with_page(p, 3));
            assert_eq!(page.total, 7);
            seen.extend(page.articles.into_iter().map(|a| a.id));
        }
        assert_eq!(seen, vec!["6", "5", "4", "3", "2", "1", "0"]);

        let last = query(store, &ListQuery::new().with_page(3, 3));
        assert_eq!(last.articles.len(), 1);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let store = vec![article("1", "a", &[], 1)];
        let page = query(store, &ListQuery::new().with_page(5, 10));
        assert!(page.articles.is_empty());
        assert_eq!(page.total, 1);
    }

    #[test]
    fn test_page_zero_is_empty() {
        let store = vec![article("1", "a", &[], 1), article("2", "b", &[], 2)];
        let page = query(store, &ListQuery::new().with_page(0, 10));
        assert!(page.articles.is_empty());
        assert_eq!(page.total, 2);
        assert_eq!(page.page, 0);
    }

    #[test]
    fn test_query_is_idempotent() {
        let store = vec![
            article("1", "Rust", &["rust"], 1),
            article("2", "Go", &["go"], 2),
        ];
        let q = ListQuery::new().with_search("r").with_page(1, 1);
        assert_eq!(query(store.clone(), &q), query(store, &q));
    }

    #[test]
    fn test_duplicate_tags_match_once() {
        let store = vec![article("1", "a", &["ai", "AI"], 1)];
        let page = query(store, &ListQuery::new().with_tags("ai"));
        assert_eq!(page.total, 1);
    }
}
