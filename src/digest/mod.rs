//! Digest assembly and the once-per-action flow behind the CLI.
//!
//! [`assemble`] is the pure headline/summary join; [`DigestBuilder`] runs the
//! whole fetch → assemble → translate sequence exactly once and reports the
//! outcome as a [`Digest`]. Both external calls degrade rather than abort: a
//! retrieval failure becomes the no-news path and a translation failure falls
//! back to the untranslated text, each leaving a warning behind.

use crate::core::{KnClient, KnError, Period};
use crate::news::{CompanyNewsBuilder, DEFAULT_ARTICLE_LIMIT, NewsArticle};
use crate::translate::TranslateBuilder;

/// Outcome of one digest request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Digest {
    /// The ticker was blank; nothing was fetched.
    EmptyTicker,
    /// No articles were found in the selected window.
    NoNews {
        /// User-visible messages for degraded steps (e.g., a failed fetch).
        warnings: Vec<String>,
    },
    /// A report ready for display.
    Report {
        /// The text to show.
        text: String,
        /// `false` means the translation call failed (or was skipped) and
        /// `text` is the untranslated assembly.
        translated: bool,
        /// User-visible messages for degraded steps.
        warnings: Vec<String>,
    },
}

/// Joins each article's headline and summary into a block, with a blank line
/// between blocks. Deterministic and order-preserving.
pub fn assemble(articles: &[NewsArticle]) -> String {
    articles
        .iter()
        .map(|a| format!("{}\n{}", a.headline, a.summary))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// A builder for running the full digest flow for a ticker.
pub struct DigestBuilder {
    client: KnClient,
    ticker: String,
    period: Period,
    count: usize,
    translate: bool,
    target: String,
}

impl DigestBuilder {
    /// Creates a new `DigestBuilder` for a given ticker.
    ///
    /// Defaults: one-week window, at most [`DEFAULT_ARTICLE_LIMIT`]
    /// articles, translation to Japanese enabled.
    pub fn new(client: &KnClient, ticker: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            ticker: ticker.into(),
            period: Period::OneWeek,
            count: DEFAULT_ARTICLE_LIMIT,
            translate: true,
            target: "ja".to_string(),
        }
    }

    /// Sets the lookback window.
    #[must_use]
    pub const fn period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    /// Sets the maximum number of articles in the digest.
    #[must_use]
    pub const fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Enables or disables the translation step.
    #[must_use]
    pub const fn translate(mut self, yes: bool) -> Self {
        self.translate = yes;
        self
    }

    /// Sets the translation target language.
    #[must_use]
    pub fn target(mut self, lang: impl Into<String>) -> Self {
        self.target = lang.into();
        self
    }

    /// Runs the flow once and reports the outcome.
    ///
    /// Never fails: both external calls are degraded into warnings.
    pub async fn run(self) -> Digest {
        let ticker = self.ticker.trim();
        if ticker.is_empty() {
            return Digest::EmptyTicker;
        }

        let mut warnings = Vec::new();

        tracing::info!("fetching news for {ticker}...");
        let articles = match CompanyNewsBuilder::new(&self.client, ticker)
            .period(self.period)
            .count(self.count)
            .fetch()
            .await
        {
            Ok(articles) => articles,
            Err(e) => {
                tracing::warn!(error = %e, "news retrieval failed");
                warnings.push(format!("failed to fetch news: {e}"));
                Vec::new()
            }
        };

        if articles.is_empty() {
            return Digest::NoNews { warnings };
        }

        let text = assemble(&articles);

        if !self.translate {
            return Digest::Report {
                text,
                translated: false,
                warnings,
            };
        }

        tracing::info!("translating digest...");
        match self.translate_assembled(&text).await {
            Ok(translated) => Digest::Report {
                text: translated,
                translated: true,
                warnings,
            },
            Err(e) => {
                tracing::warn!(error = %e, "translation failed, falling back to source text");
                warnings.push(format!("translation failed: {e}"));
                Digest::Report {
                    text,
                    translated: false,
                    warnings,
                }
            }
        }
    }

    async fn translate_assembled(&self, text: &str) -> Result<String, KnError> {
        TranslateBuilder::new(&self.client, text)
            .target(self.target.as_str())
            .fetch()
            .await
    }
}
