use std::time::Duration;

pub const DEFAULT_URL_TEMPLATE: &str =
    "https://newsapi.org/v2/everything?q={keyword}&apiKey={apiKey}";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how long to wait for the remote provider.
///
/// `url_template` carries `{keyword}` and `{apiKey}` placeholders that are
/// substituted on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsApiConfig {
    pub url_template: String,
    pub timeout: Duration,
}

impl NewsApiConfig {
    pub fn new(url_template: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url_template: url_template.into(),
            timeout,
        }
    }

    pub fn with_url(mut self, url_template: impl Into<String>) -> Self {
        self.url_template = url_template.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for NewsApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_URL_TEMPLATE, DEFAULT_TIMEOUT)
    }
}
