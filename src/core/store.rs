//! Storage - JSON article collection over a blob
//!
//! The whole collection is one JSON array. Every mutation is a
//! read-modify-write of that array, so mutations go through a single mutex
//! held by [`ArticleStore`]. Reads do not take the lock.
//!
//! # Key Points
//! - `list` never fails: unreadable or corrupt data reads as empty
//! - `delete` of an unknown id is `Ok(false)`, not an error
//! - Write failures surface as [`StoreError`]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

use super::article::Article;

/// Persistence failures ("StoreWriteFailure")
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to serialize article collection: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write article collection: {0}")]
    Write(#[from] std::io::Error),

    #[error("Store lock poisoned")]
    Poisoned,
}

/// Durable byte storage for the serialized collection.
///
/// `write_all` must replace the previous contents entirely or not at all.
pub trait BlobStore: Send + Sync {
    /// Current contents, `Ok(None)` if nothing was ever written
    fn read(&self) -> std::io::Result<Option<Vec<u8>>>;

    /// Replace the contents
    fn write_all(&self, bytes: &[u8]) -> std::io::Result<()>;
}

/// File-backed blob with atomic replace (temp file + rename)
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    path: PathBuf,
}

impl FileBlobStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl BlobStore for FileBlobStore {
    fn read(&self) -> std::io::Result<Option<Vec<u8>>> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write_all(&self, bytes: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.temp_path();
        {
            let mut file = std::fs::File::create(&tmp)?;
            file.write_all(bytes)?;
            file.sync_all()?;
        }
        std::fs::rename(&tmp, &self.path)
    }
}

/// In-memory blob (for testing and ephemeral use)
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    data: Mutex<Option<Vec<u8>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            data: Mutex::new(Some(bytes.into())),
        }
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self) -> std::io::Result<Option<Vec<u8>>> {
        let data = self
            .data
            .lock()
            .map_err(|e| std::io::Error::other(format!("Lock error: {}", e)))?;
        Ok(data.clone())
    }

    fn write_all(&self, bytes: &[u8]) -> std::io::Result<()> {
        let mut data = self
            .data
            .lock()
            .map_err(|e| std::io::Error::other(format!("Lock error: {}", e)))?;
        *data = Some(bytes.to_vec());
        Ok(())
    }
}

/// Article collection store
pub struct ArticleStore<B: BlobStore = FileBlobStore> {
    blob: B,
    write_lock: Mutex<()>,
}

impl ArticleStore<FileBlobStore> {
    /// Open a store backed by a JSON file (created lazily on first write)
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(FileBlobStore::new(path))
    }

    /// Create the file with an empty collection if it does not exist yet
    pub fn initialize(&self) -> Result<(), StoreError> {
        if self.blob.path().exists() {
            return Ok(());
        }
        self.persist(&[])
    }
}

impl<B: BlobStore> ArticleStore<B> {
    pub fn new(blob: B) -> Self {
        Self {
            blob,
            write_lock: Mutex::new(()),
        }
    }

    /// All stored articles, in stored order
    pub fn list(&self) -> Vec<Article> {
        let bytes = match self.blob.read() {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read article store, treating as empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(articles) => articles,
            Err(e) => {
                tracing::warn!("Article store is not a valid collection, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Find an article by id
    pub fn get(&self, id: &str) -> Option<Article> {
        self.list().into_iter().find(|a| a.id == id)
    }

    /// Append one article and persist the whole collection
    pub fn append(&self, article: Article) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;

        let mut articles = self.list();
        articles.push(article);
        self.persist(&articles)
    }

    /// Remove the article with `id`. Returns `false` when there is none.
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;

        let mut articles = self.list();
        let Some(pos) = articles.iter().position(|a| a.id == id) else {
            return Ok(false);
        };
        articles.remove(pos);
        self.persist(&articles)?;

        Ok(true)
    }

    /// Number of stored articles
    pub fn count(&self) -> usize {
        self.list().len()
    }

    fn persist(&self, articles: &[Article]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(articles)?;
        self.blob.write_all(&json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::article::{ArticleDraft, ArticleMetadata};
    use tempfile::TempDir;

    fn article(title: &str) -> Article {
        Article::from_draft(ArticleDraft {
            title: title.to_string(),
            summary: String::new(),
            html_content: "<p>body</p>".to_string(),
            tags: vec!["rust".to_string()],
            metadata: ArticleMetadata::default(),
        })
    }

    /// Blob whose writes always fail
    struct ReadOnlyBlob(MemoryBlobStore);

    impl BlobStore for ReadOnlyBlob {
        fn read(&self) -> std::io::Result<Option<Vec<u8>>> {
            self.0.read()
        }

        fn write_all(&self, _bytes: &[u8]) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"))
        }
    }

    #[test]
    fn test_append_and_get() -> anyhow::Result<()> {
        let store = ArticleStore::new(MemoryBlobStore::new());
        let a = article("First");
        let id = a.id.clone();

        store.append(a)?;
        store.append(article("Second"))?;

        assert_eq!(store.count(), 2);
        assert_eq!(store.get(&id).map(|a| a.title), Some("First".to_string()));
        assert!(store.get("missing").is_none());
        Ok(())
    }

    #[test]
    fn test_list_preserves_append_order() -> anyhow::Result<()> {
        let store = ArticleStore::new(MemoryBlobStore::new());
        for title in ["a", "b", "c"] {
            store.append(article(title))?;
        }
        let titles: Vec<_> = store.list().into_iter().map(|a| a.title).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
        Ok(())
    }

    #[test]
    fn test_delete_existing_removes_exactly_one() -> anyhow::Result<()> {
        let store = ArticleStore::new(MemoryBlobStore::new());
        let a = article("a");
        let id = a.id.clone();
        store.append(a)?;
        store.append(article("b"))?;

        assert!(store.delete(&id)?);
        assert_eq!(store.count(), 1);
        assert!(store.get(&id).is_none());
        Ok(())
    }

    #[test]
    fn test_delete_missing_leaves_collection_unchanged() -> anyhow::Result<()> {
        let store = ArticleStore::new(MemoryBlobStore::new());
        store.append(article("a"))?;
        let before = store.list();

        assert!(!store.delete("nope")?);
        assert_eq!(store.list(), before);
        Ok(())
    }

    #[test]
    fn test_corrupt_blob_lists_empty() {
        let store = ArticleStore::new(MemoryBlobStore::with_contents("{ not an array"));
        assert!(store.list().is_empty());
        assert!(store.get("anything").is_none());
    }

    #[test]
    fn test_write_failure_is_distinct_from_not_found() -> anyhow::Result<()> {
        let seed = ArticleStore::new(MemoryBlobStore::new());
        let a = article("a");
        let id = a.id.clone();
        seed.append(a)?;
        let bytes = seed.blob.read()?.unwrap_or_default();

        let store = ArticleStore::new(ReadOnlyBlob(MemoryBlobStore::with_contents(bytes)));

        assert!(!store.delete("missing")?);
        assert!(matches!(store.delete(&id), Err(StoreError::Write(_))));
        assert!(matches!(store.append(article("b")), Err(StoreError::Write(_))));
        assert_eq!(store.count(), 1);
        Ok(())
    }

    #[test]
    fn test_file_store_roundtrip() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("nested").join("articles.json");
        let store = ArticleStore::open(&path);

        assert!(store.list().is_empty());
        store.initialize()?;
        assert_eq!(std::fs::read_to_string(&path)?, "[]");

        let a = article("On disk");
        let id = a.id.clone();
        store.append(a)?;

        let reopened = ArticleStore::open(&path);
        assert_eq!(reopened.get(&id).map(|a| a.title), Some("On disk".to_string()));
        assert!(!path.with_file_name("articles.json.tmp").exists());
        Ok(())
    }

    #[test]
    fn test_initialize_keeps_existing_file() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("articles.json");
        let store = ArticleStore::open(&path);
        store.append(article("keep me"))?;

        store.initialize()?;
        assert_eq!(store.count(), 1);
        Ok(())
    }

    #[test]
    fn test_concurrent_appends_are_not_lost() -> anyhow::Result<()> {
        let store = std::sync::Arc::new(ArticleStore::new(MemoryBlobStore::new()));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || store.append(article(&format!("t{}", i))))
            })
            .collect();
        for h in handles {
            h.join().expect("thread panicked")?;
        }
        assert_eq!(store.count(), 8);
        Ok(())
    }
}
