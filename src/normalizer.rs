use crate::model::{PriceBar, PriceSeries};
use tracing::debug;

/// Orders bars by time, keeps the last bar seen for a repeated timestamp and
/// drops bars with non-finite prices.
pub fn normalize_series(series: &mut PriceSeries) {
    let before = series.bars.len();

    series.bars.retain(PriceBar::is_finite);
    // Stable sort keeps arrival order within equal timestamps.
    series.bars.sort_by_key(|b| b.timestamp);

    let mut deduped: Vec<PriceBar> = Vec::with_capacity(series.bars.len());
    for bar in series.bars.drain(..) {
        match deduped.last_mut() {
            Some(prev) if prev.timestamp == bar.timestamp => *prev = bar,
            _ => deduped.push(bar),
        }
    }
    series.bars = deduped;

    if series.bars.len() != before {
        debug!(
            "Normalized {}: {} -> {} bars",
            series.symbol,
            before,
            series.bars.len()
        );
    }
}

/// Resolves user input against the configured symbol list, ignoring case and
/// surrounding whitespace.
pub fn resolve_symbol<'a>(input: &str, symbols: &'a [String]) -> Option<&'a str> {
    let wanted = input.trim();
    if wanted.is_empty() {
        return None;
    }
    symbols
        .iter()
        .find(|s| s.eq_ignore_ascii_case(wanted))
        .map(String::as_str)
}
