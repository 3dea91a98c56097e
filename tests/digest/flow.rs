use httpmock::{Method::GET, MockServer};
use serde_json::json;

use kabunews_rs::{Digest, DigestBuilder, Period};

const ASSEMBLED_AAPL: &str = "Apple unveils new AI features for iPhone\n\
The company announced a suite of on-device AI features at its annual developer conference.\n\
\n\
Apple supplier expands production in India\n\
A key assembly partner will add two plants as the company diversifies its supply chain.";

#[tokio::test]
async fn blank_ticker_short_circuits_without_network() {
    let server = MockServer::start();

    let any_get = server.mock(|when, then| {
        when.method(GET);
        then.status(200).body("[]");
    });

    let client = crate::common::client_for(&server);
    let digest = DigestBuilder::new(&client, "   ").run().await;

    assert_eq!(digest, Digest::EmptyTicker);
    assert_eq!(any_get.hits(), 0);
}

#[tokio::test]
async fn no_news_skips_translation() {
    let server = MockServer::start();
    let sym = "TSLA";

    let news = crate::common::mock_company_news(&server, sym, "[]");
    let translation = crate::common::mock_translation(&server, "[]");

    let client = crate::common::client_for(&server);
    let digest = DigestBuilder::new(&client, sym)
        .period(Period::OneMonth)
        .run()
        .await;

    news.assert();
    assert_eq!(translation.hits(), 0);
    assert_eq!(digest, Digest::NoNews { warnings: vec![] });
}

#[tokio::test]
async fn retrieval_failure_degrades_to_no_news_with_warning() {
    let server = MockServer::start();

    let news = server.mock(|when, then| {
        when.method(GET).path("/company-news");
        then.status(500).body("internal error");
    });
    let translation = crate::common::mock_translation(&server, "[]");

    let client = crate::common::client_for(&server);
    let digest = DigestBuilder::new(&client, "AAPL").run().await;

    news.assert();
    assert_eq!(translation.hits(), 0);

    match digest {
        Digest::NoNews { warnings } => {
            assert_eq!(warnings.len(), 1);
            assert!(warnings[0].contains("failed to fetch news"));
        }
        other => panic!("expected the no-news path, got {other:?}"),
    }
}

#[tokio::test]
async fn translation_failure_falls_back_to_assembled_text() {
    let server = MockServer::start();
    let sym = "AAPL";

    let body = crate::common::fixture("company_news", sym, "json");
    let news = crate::common::mock_company_news(&server, sym, &body);
    let translation = server.mock(|when, then| {
        when.method(GET).path("/translate_a/single");
        then.status(503).body("unavailable");
    });

    let client = crate::common::client_for(&server);
    let digest = DigestBuilder::new(&client, sym).run().await;

    news.assert();
    translation.assert();

    match digest {
        Digest::Report {
            text,
            translated,
            warnings,
        } => {
            assert!(!translated);
            assert_eq!(text, ASSEMBLED_AAPL);
            assert_eq!(warnings.len(), 1);
            assert!(warnings[0].contains("translation failed"));
        }
        other => panic!("expected a report, got {other:?}"),
    }
}

#[tokio::test]
async fn no_translate_returns_assembled_text_without_calling_the_service() {
    let server = MockServer::start();
    let sym = "AAPL";

    let body = crate::common::fixture("company_news", sym, "json");
    let news = crate::common::mock_company_news(&server, sym, &body);
    let translation = crate::common::mock_translation(&server, "[]");

    let client = crate::common::client_for(&server);
    let digest = DigestBuilder::new(&client, sym).translate(false).run().await;

    news.assert();
    assert_eq!(translation.hits(), 0);

    assert_eq!(
        digest,
        Digest::Report {
            text: ASSEMBLED_AAPL.to_string(),
            translated: false,
            warnings: vec![],
        }
    );
}

#[tokio::test]
async fn end_to_end_digest_translates_the_exact_assembly() {
    let server = MockServer::start();
    let sym = "AAPL";

    let translated = "アップル、iPhone向けの新AI機能を発表\n\
年次開発者会議でオンデバイスAI機能群を発表した。\n\
\n\
アップルのサプライヤー、インドで生産拡大\n\
主要組立パートナーが工場を2拠点増設する。";

    let news_body = crate::common::fixture("company_news", sym, "json");
    let news = crate::common::mock_company_news(&server, sym, &news_body);

    let translation_body =
        json!([[[translated, ASSEMBLED_AAPL, null, null, 3]], null, "en"]).to_string();
    let translation = server.mock(|when, then| {
        when.method(GET)
            .path("/translate_a/single")
            .query_param("tl", "ja")
            .query_param_exists("q");
        then.status(200)
            .header("content-type", "application/json")
            .body(translation_body);
    });

    let client = crate::common::client_for(&server);
    let digest = DigestBuilder::new(&client, sym)
        .period(Period::OneWeek)
        .run()
        .await;

    news.assert();
    translation.assert();

    assert_eq!(
        digest,
        Digest::Report {
            text: translated.to_string(),
            translated: true,
            warnings: vec![],
        }
    );
}
