use crate::analyzer::decision::DecisionRule;
use crate::analyzer::market_indicators::MarketAnalyzer;
use crate::config::IndicatorConfig;
use crate::model::{DecisionError, PriceBar, PriceSeries, Recommendation, Trend};
use tracing::debug;

/// Trait defining the interface for a series analyzer.
pub trait Analyzer {
    /// Derives the indicator series; `None` for an empty series.
    fn derive(&self, series: &PriceSeries) -> Option<DerivedSeries>;
    /// Builds the snapshot shown in one frame; `None` for an empty series.
    fn analyze(&self, series: PriceSeries) -> Option<Snapshot>;
}

/// Per-bar indicator values aligned by index with the price series.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedSeries {
    pub rsi: Vec<Option<f64>>,
    pub sma: Vec<Option<f64>>,
}

impl DerivedSeries {
    pub fn latest_rsi(&self) -> Option<f64> {
        self.rsi.last().copied().flatten()
    }

    pub fn latest_sma(&self) -> Option<f64> {
        self.sma.last().copied().flatten()
    }
}

/// Everything a frame shows, computed once per refresh.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub series: PriceSeries,
    pub derived: DerivedSeries,
    pub price: f64,
    pub sma: Option<f64>,
    pub rsi: Option<f64>,
    pub trend: Option<Trend>,
    pub decision: Result<Recommendation, DecisionError>,
}

impl Snapshot {
    pub fn latest_bar(&self) -> &PriceBar {
        // Snapshots are only built from non-empty series.
        &self.series.bars[self.series.bars.len() - 1]
    }
}

/// Implementation of the series analyzer.
pub struct AnalyzerImpl {
    cfg: IndicatorConfig,
    rule: DecisionRule,
}

impl AnalyzerImpl {
    pub fn new(cfg: &IndicatorConfig) -> Self {
        Self {
            cfg: cfg.clone(),
            rule: DecisionRule::from_config(cfg),
        }
    }
}

impl Analyzer for AnalyzerImpl {
    fn derive(&self, series: &PriceSeries) -> Option<DerivedSeries> {
        if series.is_empty() {
            return None;
        }
        let closes = series.closes();
        Some(DerivedSeries {
            rsi: MarketAnalyzer::compute_rsi(&closes, self.cfg.rsi_period),
            sma: MarketAnalyzer::moving_average(&closes, self.cfg.sma_period),
        })
    }

    fn analyze(&self, series: PriceSeries) -> Option<Snapshot> {
        let derived = self.derive(&series)?;
        let price = series.last()?.close;
        let sma = derived.latest_sma();
        let rsi = derived.latest_rsi();

        let trend = sma.map(|m| if price > m { Trend::Upward } else { Trend::Downward });
        let decision = self.rule.evaluate(price, sma, rsi);

        debug!(
            "{}: price={:.4} sma={:?} rsi={:?} decision={:?}",
            series.symbol, price, sma, rsi, decision
        );

        Some(Snapshot {
            series,
            derived,
            price,
            sma,
            rsi,
            trend,
            decision,
        })
    }
}
