use serde::Serialize;

/// A single company-news article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsArticle {
    /// The headline of the article.
    pub headline: String,
    /// A short summary of the article body.
    pub summary: String,
    /// The outlet that published the article (e.g., "Reuters").
    pub source: Option<String>,
    /// A direct link to the article.
    pub url: Option<String>,
    /// The Unix timestamp (in seconds) of when the article was published.
    pub datetime: i64,
}
