mod api;
mod wire;

use crate::core::{KnClient, KnError};

/// Translates arbitrary text to Japanese.
///
/// Convenience wrapper over [`TranslateBuilder`] with the default target.
///
/// # Errors
///
/// Returns `KnError` if the network request fails or the response cannot be
/// parsed. The caller decides whether to fall back to the source text.
pub async fn translate_to_japanese(client: &KnClient, text: &str) -> Result<String, KnError> {
    TranslateBuilder::new(client, text).fetch().await
}

/// A builder for translating a block of text.
pub struct TranslateBuilder {
    client: KnClient,
    text: String,
    target: String,
}

impl TranslateBuilder {
    /// Creates a new `TranslateBuilder`. The target language defaults to
    /// Japanese (`ja`).
    pub fn new(client: &KnClient, text: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            text: text.into(),
            target: "ja".to_string(),
        }
    }

    /// Sets the target language (an ISO 639-1 code such as `ja` or `fr`).
    #[must_use]
    pub fn target(mut self, lang: impl Into<String>) -> Self {
        self.target = lang.into();
        self
    }

    /// Executes the translation request.
    ///
    /// # Errors
    ///
    /// Returns a `KnError` if the request fails, the server responds with a
    /// non-success status, or the response body has an unexpected shape.
    pub async fn fetch(self) -> Result<String, KnError> {
        api::translate_text(&self.client, &self.text, &self.target).await
    }
}
