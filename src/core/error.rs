use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum KnError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A response body could not be parsed as JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error, with any credential redacted.
        url: String,
    },

    /// The data received from a service was in an unexpected shape.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// An unrecognized lookback-period label was supplied.
    #[error("Unknown period label: {0:?} (expected 1d, 1w, or 1mo)")]
    InvalidPeriod(String),

    /// No Finnhub API token was configured on the client builder.
    #[error("Missing Finnhub API token (set FINNHUB_API_KEY or call KnClientBuilder::token)")]
    MissingToken,
}
