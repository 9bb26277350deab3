use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use nt_core::{Article, Error, NewsSource, Result, SearchResult, SecretProvider};
use serde::Deserialize;
use url::Url;

use crate::config::NewsApiConfig;

/// Body returned by the provider. Its `totalResults` counts every match on
/// the server, not the page we received, so it is ignored.
#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

pub struct NewsApiClient {
    client: reqwest::Client,
    config: NewsApiConfig,
    secrets: Arc<dyn SecretProvider>,
}

impl fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("url_template", &self.config.url_template)
            .field("timeout", &self.config.timeout)
            .finish()
    }
}

impl NewsApiClient {
    pub fn new(config: NewsApiConfig, secrets: Arc<dyn SecretProvider>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config, secrets })
    }

    pub fn build_url(&self, keyword: &str, api_key: &str) -> Result<Url> {
        let url = self
            .config
            .url_template
            .replace("{apiKey}", api_key)
            .replace("{keyword}", keyword);
        Url::parse(&url).map_err(|e| Error::Fetch(format!("Invalid provider URL: {}", e)))
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    fn name(&self) -> &str {
        "newsapi"
    }

    async fn fetch(&self, keyword: &str) -> Result<SearchResult> {
        let api_key = self.secrets.credential().await?;
        let url = self.build_url(keyword, &api_key)?;

        tracing::info!("Fetching news for keyword {}", keyword);
        // reqwest errors carry the URL, and the URL carries the key.
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Provider answered {} for keyword {}", status, keyword);
            return Err(Error::no_news_found());
        }

        let body: NewsApiResponse = response
            .json()
            .await
            .map_err(|e| Error::Http(e.without_url()))?;
        if body.articles.is_empty() {
            return Err(Error::no_news_found());
        }

        tracing::info!(
            "Provider returned {} articles for keyword {}",
            body.articles.len(),
            keyword
        );
        Ok(SearchResult::new(body.articles))
    }
}
