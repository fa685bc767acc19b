use crate::analyzer::{Analyzer, AnalyzerImpl, Snapshot};
use crate::config::AppConfig;
use crate::fetcher::MarketDataProvider;
use crate::model::{DecisionError, FetchError, SeriesRequest};
use std::sync::Arc;
use tracing::{error, info, warn};

/// What one refresh cycle produced.
#[derive(Debug)]
pub enum Frame {
    /// No bars available yet (market closed, unknown symbol or empty window).
    Waiting { symbol: String, reason: String },
    Ready(Box<Snapshot>),
    Alert { symbol: String, message: String },
}

/// Runs the fetch -> derive -> decide pipeline once per refresh.
pub struct Dashboard {
    provider: Arc<dyn MarketDataProvider>,
    analyzer: AnalyzerImpl,
    config: Arc<AppConfig>,
}

impl Dashboard {
    pub fn new(provider: Arc<dyn MarketDataProvider>, config: Arc<AppConfig>) -> Self {
        Self {
            provider,
            analyzer: AnalyzerImpl::new(&config.indicators),
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub async fn refresh(&self, symbol: &str) -> Frame {
        info!("Refreshing {}...", symbol);
        let request = SeriesRequest {
            symbol: symbol.to_string(),
            range: self.config.provider.range.clone(),
            interval: self.config.provider.interval.clone(),
        };

        let series = match self.provider.fetch_series(&request).await {
            Ok(series) => series,
            Err(FetchError::NoData(_)) => {
                return Frame::Waiting {
                    symbol: symbol.to_string(),
                    reason: "market closed or symbol unavailable".into(),
                };
            }
            Err(e) => {
                warn!("Fetch failed for {}: {}", symbol, e);
                return Frame::Alert {
                    symbol: symbol.to_string(),
                    message: e.to_string(),
                };
            }
        };

        let Some(snapshot) = self.analyzer.analyze(series) else {
            info!("No bars yet for {}", symbol);
            return Frame::Waiting {
                symbol: symbol.to_string(),
                reason: "no bars in the current window".into(),
            };
        };

        if let Err(e @ DecisionError::NonFinite { .. }) = &snapshot.decision {
            error!("Computation defect for {}: {}", symbol, e);
            return Frame::Alert {
                symbol: symbol.to_string(),
                message: "internal computation error, see logs".into(),
            };
        }

        match &snapshot.decision {
            Ok(rec) => info!("{}: {} ({})", symbol, rec.signal.label(), rec.rationale),
            Err(e) => info!("{}: {}", symbol, e),
        }
        Frame::Ready(Box::new(snapshot))
    }
}
