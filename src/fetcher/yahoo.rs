use crate::config::ProviderConfig;
use crate::fetcher::traits::MarketDataProvider;
use crate::model::{FetchError, PriceSeries, SeriesRequest};
use crate::normalizer::normalize_series;
use crate::parser::chart_parser::{ChartBody, ChartParser, Parser};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info, warn};

const NOT_FOUND_CODE: &str = "Not Found";

/// Yahoo Finance `v8/finance/chart` client.
pub struct YahooProvider {
    client: Client,
    base_url: String,
    timeout_seconds: u64,
    parser: ChartParser,
}

impl YahooProvider {
    pub fn new(cfg: &ProviderConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(cfg.user_agent.as_str())
            .timeout(Duration::from_secs(cfg.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            timeout_seconds: cfg.timeout_seconds,
            parser: ChartParser::new(),
        })
    }

    fn build_url(&self, req: &SeriesRequest) -> String {
        format!("{}/v8/finance/chart/{}", self.base_url, req.symbol)
    }

    fn map_send_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout(self.timeout_seconds)
        } else {
            FetchError::Request(e)
        }
    }
}

#[async_trait::async_trait]
impl MarketDataProvider for YahooProvider {
    async fn fetch_series(&self, req: &SeriesRequest) -> Result<PriceSeries, FetchError> {
        let url = self.build_url(req);
        debug!("GET {} range={} interval={}", url, req.range, req.interval);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("range", req.range.as_str()),
                ("interval", req.interval.as_str()),
                ("includePrePost", "false"),
            ])
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_send_error(e))?;

        if status == StatusCode::NOT_FOUND {
            info!("Provider has no data for {}", req.symbol);
            return Err(FetchError::NoData(req.symbol.clone()));
        }

        if !status.is_success() {
            warn!("Provider responded [{}] for {}", status, req.symbol);
            // Prefer the provider's own error report when the body carries one.
            if let Ok(ChartBody::Fault { code, description }) = self.parser.parse(&body, &req.symbol) {
                return Err(FetchError::Provider { code, description });
            }
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: truncate(&body, 200),
            });
        }

        match self.parser.parse(&body, &req.symbol)? {
            ChartBody::Fault { code, .. } if code == NOT_FOUND_CODE => {
                Err(FetchError::NoData(req.symbol.clone()))
            }
            ChartBody::Fault { code, description } => Err(FetchError::Provider { code, description }),
            ChartBody::Series(mut series) => {
                normalize_series(&mut series);
                info!("Fetched {} bars for {}", series.len(), series.symbol);
                Ok(series)
            }
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_chart_url_without_double_slash() {
        let cfg = ProviderConfig {
            base_url: "http://localhost:9999/".into(),
            ..ProviderConfig::default()
        };
        let provider = YahooProvider::new(&cfg).unwrap();
        let req = SeriesRequest {
            symbol: "BTC-USD".into(),
            range: "2d".into(),
            interval: "1m".into(),
        };
        assert_eq!(provider.build_url(&req), "http://localhost:9999/v8/finance/chart/BTC-USD");
    }

    #[test]
    fn truncates_long_bodies() {
        assert_eq!(truncate("abcdef", 3), "abc…");
        assert_eq!(truncate("abc", 3), "abc");
    }
}
