use std::num::NonZeroU32;
use std::sync::Arc;

use nt_core::{
    Article, ArticleCache, Error, FixtureProvider, GroupedArticles, Mode, NewsSource, Result,
    SearchResult, TimeUnit,
};
use tracing::{info, warn};

use crate::filter::filter_by_keyword;
use crate::grouping::group_by_interval;
use crate::keyword::validate_keyword;
use crate::mode::ModeSwitch;

/// Runs searches: validate, pick the article source for the current mode,
/// fall back to the cache once when the remote fetch fails, then filter.
pub struct NewsManager {
    source: Arc<dyn NewsSource>,
    cache: Arc<dyn ArticleCache>,
    fixtures: Arc<dyn FixtureProvider>,
    mode: Arc<ModeSwitch>,
}

impl NewsManager {
    pub fn new(
        source: Arc<dyn NewsSource>,
        cache: Arc<dyn ArticleCache>,
        fixtures: Arc<dyn FixtureProvider>,
        mode: Arc<ModeSwitch>,
    ) -> Self {
        Self {
            source,
            cache,
            fixtures,
            mode,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode.get()
    }

    pub fn set_mode(&self, value: &str) -> Result<Mode> {
        let mode = self.mode.set_from_str(value)?;
        info!("Mode set to {}", mode);
        Ok(mode)
    }

    pub async fn search(&self, keyword: &str) -> Result<SearchResult> {
        validate_keyword(keyword)?;

        let articles = match self.mode.get() {
            Mode::Offline => {
                info!("Searching offline fixtures for keyword {}", keyword);
                self.fixtures.articles()
            }
            Mode::Online => {
                info!("Searching {} for keyword {}", self.source.name(), keyword);
                self.fetch_with_fallback(keyword).await?
            }
        };

        filter_by_keyword(keyword, articles)
    }

    pub async fn grouped_search(
        &self,
        keyword: &str,
        interval: NonZeroU32,
        unit: TimeUnit,
    ) -> Result<GroupedArticles> {
        let result = self.search(keyword).await?;
        info!(
            "Grouping {} articles for keyword {} every {} {}",
            result.total_results(),
            keyword,
            interval,
            unit
        );
        Ok(group_by_interval(result.into_articles(), interval, unit))
    }

    async fn fetch_with_fallback(&self, keyword: &str) -> Result<Vec<Article>> {
        match self.source.fetch(keyword).await {
            Ok(result) => {
                // Unfiltered, so any later filtering still has the full set.
                if let Err(e) = self.cache.put(keyword, result.articles()).await {
                    warn!("Failed to cache articles for keyword {}: {}", keyword, e);
                }
                Ok(result.into_articles())
            }
            Err(e) if e.is_fetch_failure() => {
                warn!("Fetch failed for keyword {}, falling back to cache: {}", keyword, e);
                let cached = self.cache.get(keyword).await?;
                if cached.is_empty() {
                    return Err(Error::NoContent(Error::NO_ARTICLES_AVAILABLE.to_string()));
                }
                info!("Serving {} cached articles for keyword {}", cached.len(), keyword);
                Ok(cached)
            }
            Err(e) => Err(e),
        }
    }
}
