use async_trait::async_trait;
use nt_core::{Article, ArticleCache, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct CacheStore {
    entries: HashMap<String, Arc<[Article]>>,
}

impl CacheStore {
    fn get(&self, keyword: &str) -> Vec<Article> {
        self.entries
            .get(keyword)
            .map(|articles| articles.to_vec())
            .unwrap_or_default()
    }

    /// Last write wins; the previous list is dropped whole.
    fn put(&mut self, keyword: &str, articles: &[Article]) {
        self.entries.insert(keyword.to_string(), Arc::from(articles));
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Per-keyword last-known-good article lists, kept for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCache {
    store: Arc<RwLock<CacheStore>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }
}

#[async_trait]
impl ArticleCache for InMemoryCache {
    async fn get(&self, keyword: &str) -> Result<Vec<Article>> {
        let store = self.store.read().await;
        Ok(store.get(keyword))
    }

    async fn put(&self, keyword: &str, articles: &[Article]) -> Result<()> {
        let mut store = self.store.write().await;
        store.put(keyword, articles);
        tracing::debug!("Cached {} articles for keyword {}", articles.len(), keyword);
        Ok(())
    }
}
