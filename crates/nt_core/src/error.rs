use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    InvalidKeyword(String),

    #[error("{0}")]
    InvalidMode(String),

    #[error("{0}")]
    InvalidInput(String),

    /// A confirmed empty result. Never eligible for cache fallback.
    #[error("{0}")]
    NoContent(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Credential error: {0}")]
    Credential(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub const INVALID_KEYWORD: &'static str =
        "Keyword must only contain letters and numbers and cannot be null.";
    pub const NO_NEWS_FOUND: &'static str = "No news found for the given keyword";
    pub const NO_ARTICLES_AVAILABLE: &'static str =
        "No news articles available for the given keyword.";
    pub const INVALID_MODE: &'static str = "Invalid mode. Use 'online' or 'offline'.";

    pub fn invalid_keyword() -> Self {
        Self::InvalidKeyword(Self::INVALID_KEYWORD.to_string())
    }

    pub fn no_news_found() -> Self {
        Self::NoContent(Self::NO_NEWS_FOUND.to_string())
    }

    /// Transport or provider failures. These are the only errors the
    /// search pipeline recovers from, by reading the article cache.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::Fetch(_) | Self::Credential(_) | Self::Http(_) | Self::Serialization(_)
        )
    }

    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidKeyword(_) | Self::InvalidMode(_) | Self::InvalidInput(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
