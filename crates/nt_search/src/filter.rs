use nt_core::{Article, Error, Result, SearchResult};

/// Keep the articles whose title or description mention `keyword`, ignoring
/// case. An empty outcome is reported as `NoContent`.
pub fn filter_by_keyword(keyword: &str, articles: Vec<Article>) -> Result<SearchResult> {
    let relevant: Vec<Article> = articles
        .into_iter()
        .filter(|article| article.mentions(keyword))
        .collect();

    if relevant.is_empty() {
        return Err(Error::no_news_found());
    }
    Ok(SearchResult::new(relevant))
}
