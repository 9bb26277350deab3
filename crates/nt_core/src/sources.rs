use async_trait::async_trait;
use crate::types::{Article, SearchResult};
use crate::Result;

/// A remote provider of news for a keyword.
///
/// Implementations return `Error::NoContent` when the provider confirms there
/// is nothing to return, and a fetch failure (see `Error::is_fetch_failure`)
/// for anything that went wrong on the way.
#[async_trait]
pub trait NewsSource: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch(&self, keyword: &str) -> Result<SearchResult>;
}

#[async_trait]
pub trait SecretProvider: Send + Sync {
    async fn credential(&self) -> Result<String>;
}

pub trait FixtureProvider: Send + Sync {
    fn articles(&self) -> Vec<Article>;
}
