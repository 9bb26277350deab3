use async_trait::async_trait;
use crate::types::Article;
use crate::Result;

#[async_trait]
pub trait ArticleCache: Send + Sync {
    /// Last articles stored for the keyword, or an empty list
    async fn get(&self, keyword: &str) -> Result<Vec<Article>>;

    /// Replace whatever is stored for the keyword
    async fn put(&self, keyword: &str, articles: &[Article]) -> Result<()>;
}
