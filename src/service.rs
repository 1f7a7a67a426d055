//! Article service - the generation and listing pipelines
//!
//! ```text
//! create:  notes ──► GenerationClient ──► parse_article ──► ArticleStore.append
//! list:    ArticleStore.list ──► query (filter, sort, page)
//! post:    ArticleStore.get ──► GenerationClient ──► parse_post
//! ```
//!
//! The generator is injected; nothing here holds global client state.
//! A service without one still reads, lists and deletes.

use std::sync::Arc;

use thiserror::Error;

use crate::core::article::{Article, SocialPost};
use crate::core::content::parse_article;
use crate::core::query::{query, ArticlePage, ListQuery};
use crate::core::social::parse_post;
use crate::core::store::{ArticleStore, BlobStore, FileBlobStore, StoreError};
use crate::generation::{GenerationClient, GenerationError, Prompt, TextGenerator};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("No text generator configured")]
    NoGenerator,
}

/// Ties the store, the generator and the parsers together
pub struct ArticleService<B: BlobStore = FileBlobStore> {
    store: Arc<ArticleStore<B>>,
    generator: Option<GenerationClient>,
}

impl<B: BlobStore> ArticleService<B> {
    pub fn new(store: Arc<ArticleStore<B>>) -> Self {
        Self {
            store,
            generator: None,
        }
    }

    /// Attach the backend used by `create_article` and `social_post`
    pub fn with_generator(mut self, backend: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(GenerationClient::new(backend));
        self
    }

    pub fn store(&self) -> &ArticleStore<B> {
        &self.store
    }

    fn generator(&self) -> Result<&GenerationClient, ServiceError> {
        self.generator.as_ref().ok_or(ServiceError::NoGenerator)
    }

    /// Generate an article from learning notes and persist it
    pub async fn create_article(&self, learning_content: &str) -> Result<Article, ServiceError> {
        let raw = self.generator()?.generate(&Prompt::article(learning_content)).await?;
        let draft = parse_article(&raw);
        let article = Article::from_draft(draft);

        self.store.append(article.clone())?;
        tracing::info!(id = %article.id, title = %article.title, "Article created");

        Ok(article)
    }

    /// Filter, sort and paginate the stored articles
    pub fn list_articles(&self, q: &ListQuery) -> ArticlePage {
        query(self.store.list(), q)
    }

    pub fn get_article(&self, id: &str) -> Option<Article> {
        self.store.get(id)
    }

    /// Returns `false` when no article has `id`
    pub fn delete_article(&self, id: &str) -> Result<bool, ServiceError> {
        let deleted = self.store.delete(id)?;
        if deleted {
            tracing::info!(id, "Article deleted");
        }
        Ok(deleted)
    }

    /// Derive a social post from a stored article. `Ok(None)` when the id is
    /// unknown; the generator is not called in that case.
    pub async fn social_post(&self, id: &str) -> Result<Option<SocialPost>, ServiceError> {
        let Some(article) = self.store.get(id) else {
            return Ok(None);
        };

        let prompt = Prompt::social_post(&article.title, &article.summary, &article.tags);
        let raw = self.generator()?.generate(&prompt).await?;

        Ok(Some(parse_post(&raw)))
    }
}
