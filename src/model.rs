// Core structs: PriceBar, PriceSeries, Recommendation and the error types
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct PriceBar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PriceBar {
    pub fn is_rising(&self) -> bool {
        self.close >= self.open
    }

    pub fn is_finite(&self) -> bool {
        self.open.is_finite() && self.high.is_finite() && self.low.is_finite() && self.close.is_finite()
    }
}

/// Bars for one symbol, ordered by timestamp. Replaced wholesale on every refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    pub symbol: String,
    pub bars: Vec<PriceBar>,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>, bars: Vec<PriceBar>) -> Self {
        Self { symbol: symbol.into(), bars }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }
}

#[derive(Debug, Clone)]
pub struct SeriesRequest {
    pub symbol: String,
    pub range: String,
    pub interval: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Buy,
    Sell,
    Avoid,
}

impl Signal {
    pub fn label(&self) -> &'static str {
        match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::Avoid => "AVOID",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub signal: Signal,
    pub rationale: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Upward,
    Downward,
}

impl Trend {
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Upward => "UPWARD",
            Trend::Downward => "DOWNWARD",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed chart body: {0}")]
    Json(#[from] serde_json::Error),
    #[error("chart body has no {0} section")]
    MissingSection(&'static str),
    #[error("column {column} has {actual} values, expected {expected}")]
    LengthMismatch {
        column: &'static str,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("request timed out after {0}s")]
    Timeout(u64),
    #[error("provider responded {status}: {body}")]
    Status { status: u16, body: String },
    #[error("no data for {0} (market closed or unknown symbol)")]
    NoData(String),
    #[error("provider error {code}: {description}")]
    Provider { code: String, description: String },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecisionError {
    #[error("insufficient data: {0} not yet available")]
    InsufficientData(String),
    #[error("non-finite input to decision rule: price={price}, sma={sma}, rsi={rsi}")]
    NonFinite { price: f64, sma: f64, rsi: f64 },
}
