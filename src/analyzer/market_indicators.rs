//! Rolling indicators over a close-price series.
//!
//! Every series returned here has the same length as its input and is
//! aligned by index; `None` marks bars without enough history.

pub struct MarketAnalyzer;

impl MarketAnalyzer {
    /// Signed change from the previous close. `None` for the first bar.
    pub fn changes(closes: &[f64]) -> Vec<Option<f64>> {
        let mut out = Vec::with_capacity(closes.len());
        if closes.is_empty() {
            return out;
        }
        out.push(None);
        out.extend(closes.windows(2).map(|w| Some(w[1] - w[0])));
        out
    }

    /// Splits changes into non-negative gains and losses.
    pub fn gains_losses(changes: &[Option<f64>]) -> (Vec<Option<f64>>, Vec<Option<f64>>) {
        changes
            .iter()
            .map(|c| match c {
                Some(d) if *d > 0.0 => (Some(*d), Some(0.0)),
                Some(d) if *d < 0.0 => (Some(0.0), Some(-d)),
                Some(_) => (Some(0.0), Some(0.0)),
                None => (None, None),
            })
            .unzip()
    }

    /// Simple mean of the last `window` values; `None` until `window`
    /// defined values end at the current index.
    pub fn rolling_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
        if window == 0 {
            return vec![None; values.len()];
        }
        (0..values.len())
            .map(|i| {
                if i + 1 < window {
                    return None;
                }
                let slice = &values[i + 1 - window..=i];
                let sum = slice.iter().try_fold(0.0, |acc, v| v.map(|v| acc + v))?;
                Some(sum / window as f64)
            })
            .collect()
    }

    /// Simple moving average of closes over `window` bars.
    pub fn moving_average(closes: &[f64], window: usize) -> Vec<Option<f64>> {
        let values: Vec<Option<f64>> = closes.iter().copied().map(Some).collect();
        Self::rolling_mean(&values, window)
    }

    /// RSI-style oscillator on a 0–100 scale using simple rolling means of
    /// gains and losses over `window` changes.
    pub fn compute_rsi(closes: &[f64], window: usize) -> Vec<Option<f64>> {
        let changes = Self::changes(closes);
        let (gains, losses) = Self::gains_losses(&changes);
        let avg_gain = Self::rolling_mean(&gains, window);
        let avg_loss = Self::rolling_mean(&losses, window);

        avg_gain
            .into_iter()
            .zip(avg_loss)
            .map(|(g, l)| Some(Self::rsi_from_averages(g?, l?)))
            .collect()
    }

    /// Oscillator value from average gain and loss.
    ///
    /// A window with no losses reads 100; a window with neither gains nor
    /// losses reads 50.
    pub fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
        if avg_loss == 0.0 {
            return if avg_gain == 0.0 { 50.0 } else { 100.0 };
        }
        let rs = avg_gain / avg_loss;
        100.0 - (100.0 / (1.0 + rs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: [f64; 7] = [100.0, 102.0, 101.0, 105.0, 107.0, 106.0, 110.0];

    fn assert_close(actual: &[Option<f64>], expected: &[Option<f64>]) {
        assert_eq!(actual.len(), expected.len(), "length: {:?}", actual);
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            match (a, e) {
                (Some(a), Some(e)) => assert!((a - e).abs() < 1e-9, "index {}: {} != {}", i, a, e),
                (None, None) => {}
                _ => panic!("index {}: {:?} != {:?}", i, a, e),
            }
        }
    }

    #[test]
    fn fixture_changes_gains_losses() {
        let changes = MarketAnalyzer::changes(&FIXTURE);
        assert_close(
            &changes,
            &[None, Some(2.0), Some(-1.0), Some(4.0), Some(2.0), Some(-1.0), Some(4.0)],
        );
        let (gains, losses) = MarketAnalyzer::gains_losses(&changes);
        assert_close(&gains, &[None, Some(2.0), Some(0.0), Some(4.0), Some(2.0), Some(0.0), Some(4.0)]);
        assert_close(&losses, &[None, Some(0.0), Some(1.0), Some(0.0), Some(0.0), Some(1.0), Some(0.0)]);
    }

    #[test]
    fn fixture_rolling_averages_of_gains_and_losses() {
        let (gains, losses) = MarketAnalyzer::gains_losses(&MarketAnalyzer::changes(&FIXTURE));
        assert_close(
            &MarketAnalyzer::rolling_mean(&gains, 2),
            &[None, None, Some(1.0), Some(2.0), Some(3.0), Some(1.0), Some(2.0)],
        );
        assert_close(
            &MarketAnalyzer::rolling_mean(&losses, 2),
            &[None, None, Some(0.5), Some(0.5), Some(0.0), Some(0.5), Some(0.5)],
        );
    }

    #[test]
    fn fixture_rsi_window_two() {
        let rsi = MarketAnalyzer::compute_rsi(&FIXTURE, 2);
        let two_thirds = 100.0 - 100.0 / 3.0;
        assert_close(
            &rsi,
            &[None, None, Some(two_thirds), Some(80.0), Some(100.0), Some(two_thirds), Some(80.0)],
        );
    }

    #[test]
    fn fixture_sma_window_three() {
        let sma = MarketAnalyzer::moving_average(&FIXTURE, 3);
        assert_close(
            &sma,
            &[
                None,
                None,
                Some(101.0),
                Some(308.0 / 3.0),
                Some(313.0 / 3.0),
                Some(106.0),
                Some(323.0 / 3.0),
            ],
        );
    }

    #[test]
    fn rsi_undefined_before_fourteen_changes() {
        let closes: Vec<f64> = (0..14).map(|i| 100.0 + (i % 3) as f64).collect();
        let rsi = MarketAnalyzer::compute_rsi(&closes, 14);
        assert!(rsi.iter().all(Option::is_none));

        let closes: Vec<f64> = (0..15).map(|i| 100.0 + (i % 3) as f64).collect();
        let rsi = MarketAnalyzer::compute_rsi(&closes, 14);
        assert!(rsi[..14].iter().all(Option::is_none));
        assert!(rsi[14].is_some());
    }

    #[test]
    fn sma_undefined_before_twenty_bars() {
        let closes: Vec<f64> = (0..19).map(|i| i as f64).collect();
        assert!(MarketAnalyzer::moving_average(&closes, 20).iter().all(Option::is_none));

        let closes: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let sma = MarketAnalyzer::moving_average(&closes, 20);
        assert_eq!(sma[19], Some(9.5));
    }

    #[test]
    fn flat_series_never_yields_nan() {
        let closes = vec![250.0; 40];
        let rsi = MarketAnalyzer::compute_rsi(&closes, 14);
        for v in rsi.iter().flatten() {
            assert!(v.is_finite());
            assert_eq!(*v, 50.0);
        }
        assert_eq!(rsi.iter().flatten().count(), 40 - 14);
    }

    #[test]
    fn rising_series_pins_rsi_at_hundred() {
        let closes: Vec<f64> = (0..34).map(|i| 100.0 + i as f64).collect();
        let rsi = MarketAnalyzer::compute_rsi(&closes, 14);
        assert_eq!(rsi.last().copied().flatten(), Some(100.0));
        let sma = MarketAnalyzer::moving_average(&closes, 20);
        let latest_sma = sma.last().copied().flatten().unwrap();
        assert!(latest_sma < *closes.last().unwrap());
    }

    #[test]
    fn ratio_edge_cases() {
        assert_eq!(MarketAnalyzer::rsi_from_averages(1.0, 0.0), 100.0);
        assert_eq!(MarketAnalyzer::rsi_from_averages(0.0, 0.0), 50.0);
        assert_eq!(MarketAnalyzer::rsi_from_averages(0.0, 1.0), 0.0);
        assert_eq!(MarketAnalyzer::rsi_from_averages(1.0, 1.0), 50.0);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(MarketAnalyzer::changes(&[]).is_empty());
        assert!(MarketAnalyzer::compute_rsi(&[], 14).is_empty());
        assert!(MarketAnalyzer::moving_average(&[], 20).is_empty());
    }
}
