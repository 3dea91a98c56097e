mod api;
mod model;
mod wire;

pub use model::NewsArticle;

use crate::core::{KnClient, KnError, Period};

/// Default maximum number of articles retained per request.
pub const DEFAULT_ARTICLE_LIMIT: usize = 5;

/// A builder for fetching recent company news for a symbol.
pub struct CompanyNewsBuilder {
    client: KnClient,
    symbol: String,
    days: u32,
    count: usize,
}

impl CompanyNewsBuilder {
    /// Creates a new `CompanyNewsBuilder` for a given symbol.
    ///
    /// Defaults to a one-week window and at most
    /// [`DEFAULT_ARTICLE_LIMIT`] articles.
    pub fn new(client: &KnClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            days: Period::OneWeek.days(),
            count: DEFAULT_ARTICLE_LIMIT,
        }
    }

    /// Sets the lookback window from a [`Period`].
    #[must_use]
    pub const fn period(mut self, period: Period) -> Self {
        self.days = period.days();
        self
    }

    /// Sets the lookback window to an arbitrary day count.
    #[must_use]
    pub const fn days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    /// Sets the maximum number of articles to retain, in API return order.
    #[must_use]
    pub const fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Executes the request and fetches the news articles.
    ///
    /// # Errors
    ///
    /// Returns a `KnError` if the request to the news API fails, the server
    /// responds with a non-success status, or the body cannot be parsed.
    pub async fn fetch(self) -> Result<Vec<NewsArticle>, KnError> {
        api::fetch_company_news(&self.client, &self.symbol, self.days, self.count).await
    }
}
