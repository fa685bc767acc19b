use crate::config::IndicatorConfig;
use crate::model::{DecisionError, Recommendation, Signal};

/// Maps the latest price, moving average and oscillator to a recommendation.
#[derive(Debug, Clone)]
pub struct DecisionRule {
    pub sma_period: usize,
    pub overbought: f64,
}

impl DecisionRule {
    pub fn from_config(cfg: &IndicatorConfig) -> Self {
        Self {
            sma_period: cfg.sma_period,
            overbought: cfg.overbought,
        }
    }

    /// Both `sma` and `rsi` must be present; nothing is compared otherwise.
    pub fn evaluate(
        &self,
        price: f64,
        sma: Option<f64>,
        rsi: Option<f64>,
    ) -> Result<Recommendation, DecisionError> {
        let (sma, rsi) = match (sma, rsi) {
            (Some(s), Some(r)) => (s, r),
            (None, None) => {
                return Err(DecisionError::InsufficientData(format!(
                    "SMA{} and RSI",
                    self.sma_period
                )));
            }
            (None, Some(_)) => {
                return Err(DecisionError::InsufficientData(format!("SMA{}", self.sma_period)));
            }
            (Some(_), None) => return Err(DecisionError::InsufficientData("RSI".into())),
        };

        if !(price.is_finite() && sma.is_finite() && rsi.is_finite()) {
            return Err(DecisionError::NonFinite { price, sma, rsi });
        }

        let recommendation = if price > sma && rsi < self.overbought {
            Recommendation {
                signal: Signal::Buy,
                rationale: format!(
                    "Price is above SMA{}. RSI ({:.1}) shows growth potential.",
                    self.sma_period, rsi
                ),
            }
        } else if rsi > self.overbought {
            Recommendation {
                signal: Signal::Sell,
                rationale: format!("Market is overbought (RSI: {:.1}). Correction likely.", rsi),
            }
        } else {
            Recommendation {
                signal: Signal::Avoid,
                rationale: format!("Price is below SMA{} or momentum is bearish.", self.sma_period),
            }
        };
        Ok(recommendation)
    }
}

impl Default for DecisionRule {
    fn default() -> Self {
        Self::from_config(&IndicatorConfig::default())
    }
}
