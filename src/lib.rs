//! kabunews-rs: Finnhub company news for a ticker, digested into Japanese.
//!
//! The crate is split into a thin API-client layer (`core`, `news`,
//! `translate`) and a `digest` layer that runs the whole
//! fetch → assemble → translate flow once and reports the outcome.

pub mod core;
pub mod digest;
pub mod news;
pub mod translate;

pub use core::{KnClient, KnClientBuilder, KnError, Period};
pub use digest::{Digest, DigestBuilder, assemble};
pub use news::{CompanyNewsBuilder, DEFAULT_ARTICLE_LIMIT, NewsArticle};
pub use translate::{TranslateBuilder, translate_to_japanese};
