pub mod error;
pub mod sources;
pub mod storage;
pub mod types;

pub use error::{Error, Result};
pub use sources::{FixtureProvider, NewsSource, SecretProvider};
pub use storage::ArticleCache;
pub use types::{Article, Bucket, GroupedArticles, Mode, ResultStatus, SearchResult, TimeUnit};
