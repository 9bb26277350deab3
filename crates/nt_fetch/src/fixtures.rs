use chrono::{DateTime, TimeZone, Utc};
use nt_core::{Article, FixtureProvider};

/// Built-in articles served while the service runs offline.
#[derive(Debug, Clone)]
pub struct ExampleArticles {
    articles: Vec<Article>,
}

impl ExampleArticles {
    pub fn new() -> Self {
        Self {
            articles: vec![
                Article::new(
                    "Apple unveils new iPhone lineup",
                    "Apple introduced its latest phones with a faster chip and a brighter display.",
                    "https://example.com/news/apple-iphone-lineup",
                    at(2024, 9, 10, 17, 0),
                ),
                Article::new(
                    "Apple shares climb after earnings beat",
                    "Quarterly revenue topped analyst estimates on strong services growth.",
                    "https://example.com/news/apple-earnings",
                    at(2024, 8, 2, 21, 30),
                ),
                Article::new(
                    "Orchards brace for a smaller harvest",
                    "Growers expect the apple crop to shrink after a late spring frost.",
                    "https://example.com/news/orchard-harvest",
                    at(2024, 8, 1, 8, 15),
                ),
                Article::new(
                    "Tesla expands charging network in Europe",
                    "The carmaker opened hundreds of new superchargers across the region.",
                    "https://example.com/news/tesla-charging",
                    at(2024, 7, 22, 11, 45),
                ),
                Article::new(
                    "Central bank holds interest rates steady",
                    "Policymakers kept rates unchanged and signalled patience on cuts.",
                    "https://example.com/news/rates-steady",
                    at(2024, 7, 31, 18, 0),
                ),
            ],
        }
    }
}

impl Default for ExampleArticles {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureProvider for ExampleArticles {
    fn articles(&self) -> Vec<Article> {
        self.articles.clone()
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}
