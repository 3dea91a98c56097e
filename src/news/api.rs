use chrono::{Days, Utc};
use url::Url;

use crate::{
    core::{KnClient, KnError},
    news::{model::NewsArticle, wire},
};

pub(super) async fn fetch_company_news(
    client: &KnClient,
    symbol: &str,
    days: u32,
    count: usize,
) -> Result<Vec<NewsArticle>, KnError> {
    let to = Utc::now().date_naive();
    let from = to.checked_sub_days(Days::new(u64::from(days))).unwrap_or(to);

    let mut url = client.base_news().join("company-news")?;
    url.query_pairs_mut()
        .append_pair("symbol", symbol)
        .append_pair("from", &from.format("%Y-%m-%d").to_string())
        .append_pair("to", &to.format("%Y-%m-%d").to_string())
        .append_pair("token", client.token());

    tracing::debug!(%symbol, %from, %to, "requesting company news");

    let resp = client
        .http()
        .get(url.clone())
        .header("accept", "application/json")
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(KnError::Status {
            status: resp.status().as_u16(),
            url: redact_token(&url),
        });
    }

    let body = resp.text().await?;
    let items: Vec<wire::CompanyNewsItem> = serde_json::from_str(&body)?;

    // Truncate first, in native API order, then drop records that lack the
    // fields the digest needs.
    let articles = items
        .into_iter()
        .take(count)
        .filter_map(|raw| {
            let headline = raw.headline.filter(|h| !h.is_empty())?;
            let summary = raw.summary?;
            Some(NewsArticle {
                headline,
                summary,
                source: raw.source,
                url: raw.url,
                datetime: raw.datetime.unwrap_or_default(),
            })
        })
        .collect();

    Ok(articles)
}

/// The news URL carries the API token as a query parameter; strip it before
/// embedding the URL in an error message.
fn redact_token(url: &Url) -> String {
    let mut clean = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "token" {
                "REDACTED".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    clean
        .query_pairs_mut()
        .clear()
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    clean.to_string()
}
