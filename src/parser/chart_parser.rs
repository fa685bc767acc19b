// Yahoo chart-API JSON parsing
use crate::model::{ParseError, PriceBar, PriceSeries};
use crate::utils::from_unix_seconds;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartFault>,
}

#[derive(Debug, Deserialize)]
struct ChartFault {
    code: String,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Option<ChartIndicators>,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Quote {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<f64>>,
}

/// What the provider put in a chart body: either bars or its own error report.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartBody {
    Series(PriceSeries),
    Fault { code: String, description: String },
}

pub trait Parser {
    fn parse(&self, body: &str, symbol: &str) -> Result<ChartBody, ParseError>;
}

pub struct ChartParser;

impl ChartParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ChartParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for ChartParser {
    fn parse(&self, body: &str, symbol: &str) -> Result<ChartBody, ParseError> {
        let envelope: ChartEnvelope = serde_json::from_str(body)?;

        if let Some(fault) = envelope.chart.error {
            return Ok(ChartBody::Fault {
                code: fault.code,
                description: fault.description.unwrap_or_default(),
            });
        }

        let result = match envelope.chart.result.and_then(|r| r.into_iter().next()) {
            Some(r) => r,
            None => return Ok(ChartBody::Series(PriceSeries::new(symbol, Vec::new()))),
        };

        let rows = result.timestamp.len();
        if rows == 0 {
            return Ok(ChartBody::Series(PriceSeries::new(symbol, Vec::new())));
        }

        let quote = result
            .indicators
            .and_then(|i| i.quote.into_iter().next())
            .ok_or(ParseError::MissingSection("indicators.quote"))?;

        for (column, values) in [
            ("open", &quote.open),
            ("high", &quote.high),
            ("low", &quote.low),
            ("close", &quote.close),
        ] {
            check_len(column, rows, values.len())?;
        }
        if !quote.volume.is_empty() {
            check_len("volume", rows, quote.volume.len())?;
        }

        let mut bars = Vec::with_capacity(rows);
        let mut skipped = 0usize;
        for i in 0..rows {
            let ohlc = (quote.open[i], quote.high[i], quote.low[i], quote.close[i]);
            let (Some(open), Some(high), Some(low), Some(close)) = ohlc else {
                skipped += 1;
                continue;
            };
            let Some(timestamp) = from_unix_seconds(result.timestamp[i]) else {
                skipped += 1;
                continue;
            };
            bars.push(PriceBar {
                timestamp,
                open,
                high,
                low,
                close,
                volume: quote.volume.get(i).copied().flatten().unwrap_or(0.0),
            });
        }

        if skipped > 0 {
            debug!("Skipped {} incomplete rows for {}", skipped, symbol);
        }

        Ok(ChartBody::Series(PriceSeries::new(symbol, bars)))
    }
}

fn check_len(column: &'static str, expected: usize, actual: usize) -> Result<(), ParseError> {
    if actual != expected {
        return Err(ParseError::LengthMismatch { column, expected, actual });
    }
    Ok(())
}
