#![allow(dead_code)]

use aethelgard_terminal::config::{AppConfig, ProviderConfig};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn provider_config(server: &MockServer) -> ProviderConfig {
    ProviderConfig {
        base_url: server.uri(),
        timeout_seconds: 1,
        ..ProviderConfig::default()
    }
}

pub fn app_config(server: &MockServer) -> AppConfig {
    AppConfig {
        provider: provider_config(server),
        ..AppConfig::default()
    }
}

/// Chart body with one-minute bars whose closes are `closes`.
pub fn chart_body(symbol: &str, closes: &[f64]) -> Value {
    let timestamps: Vec<i64> = (0..closes.len() as i64).map(|i| 1_700_000_000 + 60 * i).collect();
    let opens: Vec<f64> = closes.iter().map(|c| c - 0.25).collect();
    let highs: Vec<f64> = closes.iter().map(|c| c + 0.5).collect();
    let lows: Vec<f64> = closes.iter().map(|c| c - 0.5).collect();
    let volumes: Vec<u64> = closes.iter().map(|_| 1_000).collect();
    json!({
        "chart": {
            "result": [{
                "meta": { "symbol": symbol, "currency": "USD" },
                "timestamp": timestamps,
                "indicators": { "quote": [{
                    "open": opens,
                    "high": highs,
                    "low": lows,
                    "close": closes,
                    "volume": volumes
                }] }
            }],
            "error": null
        }
    })
}

pub fn not_found_body() -> Value {
    json!({
        "chart": {
            "result": null,
            "error": { "code": "Not Found", "description": "No data found, symbol may be delisted" }
        }
    })
}

pub async fn mock_chart(server: &MockServer, symbol: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/v8/finance/chart/{}", symbol)))
        .and(query_param("range", "2d"))
        .and(query_param("interval", "1m"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}
