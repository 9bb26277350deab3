use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default, deserialize_with = "null_as_empty")]
    title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    description: String,
    url: String,
    published_at: DateTime<Utc>,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
            published_at,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }

    /// Case-insensitive substring match against title or description.
    pub fn mentions(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.title.to_lowercase().contains(&keyword)
            || self.description.to_lowercase().contains(&keyword)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Ok,
}

/// A set of articles whose `total_results` always matches the article count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawSearchResult")]
pub struct SearchResult {
    status: ResultStatus,
    total_results: usize,
    articles: Vec<Article>,
}

impl SearchResult {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            status: ResultStatus::Ok,
            total_results: articles.len(),
            articles,
        }
    }

    pub fn status(&self) -> ResultStatus {
        self.status
    }

    pub fn total_results(&self) -> usize {
        self.total_results
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn into_articles(self) -> Vec<Article> {
        self.articles
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSearchResult {
    status: ResultStatus,
    total_results: usize,
    articles: Vec<Article>,
}

impl TryFrom<RawSearchResult> for SearchResult {
    type Error = String;

    fn try_from(raw: RawSearchResult) -> std::result::Result<Self, Self::Error> {
        if raw.total_results != raw.articles.len() {
            return Err(format!(
                "totalResults is {} but {} articles were supplied",
                raw.total_results,
                raw.articles.len()
            ));
        }
        Ok(Self {
            status: raw.status,
            total_results: raw.total_results,
            articles: raw.articles,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Online,
    Offline,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Online => "online",
            Mode::Offline => "offline",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("online") {
            Ok(Mode::Online)
        } else if s.eq_ignore_ascii_case("offline") {
            Ok(Mode::Offline)
        } else {
            Err(Error::InvalidMode(Error::INVALID_MODE.to_string()))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 6] = [
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
        TimeUnit::Weeks,
        TimeUnit::Months,
        TimeUnit::Years,
    ];

    /// Width of one unit in seconds. Months are 30 days, years 365.
    pub fn seconds(&self) -> i64 {
        const MINUTE: i64 = 60;
        const HOUR: i64 = 60 * MINUTE;
        const DAY: i64 = 24 * HOUR;
        match self {
            TimeUnit::Minutes => MINUTE,
            TimeUnit::Hours => HOUR,
            TimeUnit::Days => DAY,
            TimeUnit::Weeks => 7 * DAY,
            TimeUnit::Months => 30 * DAY,
            TimeUnit::Years => 365 * DAY,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
            TimeUnit::Weeks => "weeks",
            TimeUnit::Months => "months",
            TimeUnit::Years => "years",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TimeUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "Invalid unit '{}'. Use one of: minutes, hours, days, weeks, months, years.",
                    s
                ))
            })
    }
}

/// Articles sharing one elapsed-time interval. `count` always equals the
/// number of member articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    label: String,
    count: usize,
    articles: Vec<Article>,
}

impl Bucket {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            count: 0,
            articles: Vec::new(),
        }
    }

    pub fn push(&mut self, article: Article) {
        self.articles.push(article);
        self.count = self.articles.len();
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }
}

/// Buckets keyed by their label, e.g. `"12 hours ago"`.
pub type GroupedArticles = BTreeMap<String, Bucket>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn article(title: &str, description: &str) -> Article {
        Article::new(
            title,
            description,
            "http://example.com/1",
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_search_result_counts_articles() {
        let result = SearchResult::new(vec![article("a", "b"), article("c", "d")]);
        assert_eq!(result.total_results(), 2);
        assert_eq!(result.status(), ResultStatus::Ok);
    }

    #[test]
    fn test_search_result_json_shape() {
        let result = SearchResult::new(vec![article("Example Title", "Example Description")]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["totalResults"], 1);
        assert_eq!(json["articles"][0]["publishedAt"], "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_search_result_rejects_mismatched_total() {
        let json = r#"{"status":"ok","totalResults":3,"articles":[]}"#;
        assert!(serde_json::from_str::<SearchResult>(json).is_err());

        let json = r#"{"status":"ok","totalResults":0,"articles":[]}"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_article_null_fields_become_empty() {
        let json = r#"{
            "title": null,
            "description": null,
            "url": "http://x",
            "publishedAt": "2024-01-01T12:00:00Z",
            "author": "ignored"
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.title(), "");
        assert_eq!(article.description(), "");
        assert_eq!(article.url(), "http://x");
    }

    #[test]
    fn test_article_mentions_is_case_insensitive() {
        let article = article("Apple unveils", "new hardware");
        assert!(article.mentions("APPLE"));
        assert!(article.mentions("Hardware"));
        assert!(!article.mentions("tesla"));
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("OFFLINE".parse::<Mode>().unwrap(), Mode::Offline);
        assert_eq!("Online".parse::<Mode>().unwrap(), Mode::Online);
        assert!(matches!("standby".parse::<Mode>(), Err(Error::InvalidMode(_))));
        assert!(matches!(" offline ".parse::<Mode>(), Err(Error::InvalidMode(_))));
        assert_eq!(Mode::default(), Mode::Online);
    }

    #[test]
    fn test_time_unit_parsing() {
        assert_eq!("Hours".parse::<TimeUnit>().unwrap(), TimeUnit::Hours);
        assert_eq!("years".parse::<TimeUnit>().unwrap().seconds(), 365 * 86_400);
        assert!(matches!("fortnights".parse::<TimeUnit>(), Err(Error::InvalidInput(_))));
        assert!(matches!(" hours".parse::<TimeUnit>(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_bucket_push_tracks_count() {
        let mut bucket = Bucket::new("12 hours ago");
        bucket.push(article("a", "b"));
        bucket.push(article("c", "d"));
        assert_eq!(bucket.count(), 2);
        assert_eq!(bucket.count(), bucket.articles().len());
        assert_eq!(bucket.label(), "12 hours ago");
    }
}
