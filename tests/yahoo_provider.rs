mod common;

use aethelgard_terminal::fetcher::{MarketDataProvider, YahooProvider};
use aethelgard_terminal::model::{FetchError, SeriesRequest};
use common::{chart_body, mock_chart, not_found_body, provider_config};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request(symbol: &str) -> SeriesRequest {
    SeriesRequest {
        symbol: symbol.to_string(),
        range: "2d".into(),
        interval: "1m".into(),
    }
}

#[tokio::test]
async fn fetches_and_parses_bars() {
    let server = MockServer::start().await;
    mock_chart(&server, "NVDA", 200, chart_body("NVDA", &[120.0, 121.5, 121.0])).await;

    let provider = YahooProvider::new(&provider_config(&server)).unwrap();
    let series = provider.fetch_series(&request("NVDA")).await.unwrap();

    assert_eq!(series.symbol, "NVDA");
    assert_eq!(series.closes(), vec![120.0, 121.5, 121.0]);
    assert_eq!(series.bars[1].open, 121.25);
    assert_eq!(series.bars[2].volume, 1000.0);
}

#[tokio::test]
async fn not_found_means_no_data() {
    let server = MockServer::start().await;
    mock_chart(&server, "ZZZZ", 404, not_found_body()).await;

    let provider = YahooProvider::new(&provider_config(&server)).unwrap();
    let err = provider.fetch_series(&request("ZZZZ")).await.unwrap_err();
    assert!(matches!(err, FetchError::NoData(ref s) if s == "ZZZZ"), "{:?}", err);
}

#[tokio::test]
async fn not_found_fault_in_ok_body_means_no_data() {
    let server = MockServer::start().await;
    mock_chart(&server, "ZZZZ", 200, not_found_body()).await;

    let provider = YahooProvider::new(&provider_config(&server)).unwrap();
    let err = provider.fetch_series(&request("ZZZZ")).await.unwrap_err();
    assert!(matches!(err, FetchError::NoData(_)), "{:?}", err);
}

#[tokio::test]
async fn server_error_surfaces_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let provider = YahooProvider::new(&provider_config(&server)).unwrap();
    let err = provider.fetch_series(&request("AAPL")).await.unwrap_err();
    match err {
        FetchError::Status { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "upstream unavailable");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn provider_fault_is_reported() {
    let server = MockServer::start().await;
    let body = json!({ "chart": { "result": null, "error": { "code": "Bad Request", "description": "Invalid input - interval=1m is not supported" } } });
    mock_chart(&server, "AAPL", 400, body).await;

    let provider = YahooProvider::new(&provider_config(&server)).unwrap();
    let err = provider.fetch_series(&request("AAPL")).await.unwrap_err();
    assert!(matches!(err, FetchError::Provider { ref code, .. } if code == "Bad Request"), "{:?}", err);
}

#[tokio::test]
async fn slow_provider_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chart_body("BTC-USD", &[1.0]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let provider = YahooProvider::new(&provider_config(&server)).unwrap();
    let err = provider.fetch_series(&request("BTC-USD")).await.unwrap_err();
    assert!(matches!(err, FetchError::Timeout(1)), "{:?}", err);
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>consent</html>"))
        .mount(&server)
        .await;

    let provider = YahooProvider::new(&provider_config(&server)).unwrap();
    let err = provider.fetch_series(&request("TSLA")).await.unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)), "{:?}", err);
}
