//! Public client surface + builder.
//!
//! One `KnClient` holds the shared HTTP client, the two service base URLs,
//! and the Finnhub token. It is cheap to clone; every API builder takes it
//! by reference and clones what it needs.

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::KnError;

const DEFAULT_BASE_NEWS: &str = "https://finnhub.io/api/v1/";
const DEFAULT_BASE_TRANSLATE: &str = "https://translate.googleapis.com/";
const USER_AGENT: &str = concat!("kabunews-rs/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct KnClient {
    http: Client,
    base_news: Url,
    base_translate: Url,
    token: String,
}

impl fmt::Debug for KnClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KnClient")
            .field("base_news", &self.base_news.as_str())
            .field("base_translate", &self.base_translate.as_str())
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl KnClient {
    /// Create a new builder.
    pub fn builder() -> KnClientBuilder {
        KnClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
    pub(crate) fn base_translate(&self) -> &Url {
        &self.base_translate
    }
    pub(crate) fn token(&self) -> &str {
        &self.token
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct KnClientBuilder {
    user_agent: Option<String>,
    base_news: Option<Url>,
    base_translate: Option<Url>,
    token: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl KnClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the Finnhub API base (e.g., `https://finnhub.io/api/v1/`).
    #[must_use]
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Override the translation service base.
    #[must_use]
    pub fn base_translate(mut self, url: Url) -> Self {
        self.base_translate = Some(url);
        self
    }

    /// Set the Finnhub API token. Required.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`KnError::MissingToken`] if no token was set, or an error if
    /// a default base URL fails to parse or the HTTP client cannot be built.
    pub fn build(self) -> Result<KnClient, KnError> {
        let token = self.token.ok_or(KnError::MissingToken)?;
        let base_news = match self.base_news {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_NEWS)?,
        };
        let base_translate = match self.base_translate {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_TRANSLATE)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(KnClient {
            http,
            base_news,
            base_translate,
            token,
        })
    }
}
