use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use tracing::warn;

pub const CONFIG_ENV: &str = "AETHELGARD_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CapitalConfig {
    pub fiat_balance: f64,
    pub fiat_currency: String,
    /// Fiat units per one stable coin.
    pub fiat_per_stable: f64,
    pub stable_currency: String,
}

impl Default for CapitalConfig {
    fn default() -> Self {
        Self {
            fiat_balance: 300_000.0,
            fiat_currency: "IRT".into(),
            fiat_per_stable: 70_000.0,
            stable_currency: "USDT".into(),
        }
    }
}

impl CapitalConfig {
    pub fn stable_balance(&self) -> f64 {
        self.fiat_balance / self.fiat_per_stable
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub base_url: String,
    pub range: String,
    pub interval: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://query1.finance.yahoo.com".into(),
            range: "2d".into(),
            interval: "1m".into(),
            timeout_seconds: 10,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AethelgardTerminal/0.1".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub rsi_period: usize,
    pub sma_period: usize,
    pub overbought: f64,
    pub oversold: f64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            sma_period: 20,
            overbought: 70.0,
            oversold: 30.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub bars: usize,
    pub candle_height: usize,
    pub oscillator_height: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            bars: 100,
            candle_height: 16,
            oscillator_height: 8,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub symbols: Vec<String>,
    pub default_symbol: String,
    pub capital: CapitalConfig,
    pub provider: ProviderConfig,
    pub indicators: IndicatorConfig,
    pub chart: ChartConfig,
    pub refresh_interval_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            symbols: ["BTC-USD", "NVDA", "AAPL", "TSLA", "ETH-USD"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            default_symbol: "BTC-USD".into(),
            capital: CapitalConfig::default(),
            provider: ProviderConfig::default(),
            indicators: IndicatorConfig::default(),
            chart: ChartConfig::default(),
            refresh_interval_seconds: 60,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| -> Result<(), ConfigError> { Err(ConfigError::Invalid(msg.to_string())) };

        if self.symbols.is_empty() {
            return invalid("symbols must not be empty");
        }
        if !self.symbols.iter().any(|s| s == &self.default_symbol) {
            return Err(ConfigError::Invalid(format!(
                "default_symbol {} is not in symbols",
                self.default_symbol
            )));
        }
        if self.indicators.rsi_period == 0 || self.indicators.sma_period == 0 {
            return invalid("indicator windows must be non-zero");
        }
        let ind = &self.indicators;
        if !(0.0 <= ind.oversold && ind.oversold < ind.overbought && ind.overbought <= 100.0) {
            return invalid("thresholds must satisfy 0 <= oversold < overbought <= 100");
        }
        if !(self.capital.fiat_per_stable > 0.0) {
            return invalid("capital.fiat_per_stable must be positive");
        }
        if self.chart.bars == 0 || self.chart.candle_height < 2 || self.chart.oscillator_height < 2 {
            return invalid("chart sizes too small");
        }
        if self.provider.timeout_seconds == 0 {
            return invalid("provider.timeout_seconds must be non-zero");
        }
        if self.refresh_interval_seconds == 0 {
            return invalid("refresh_interval_seconds must be non-zero");
        }
        Ok(())
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Config {} not found, using built-in defaults", path);
            return Ok(AppConfig::default());
        }
        Err(e) => return Err(e.into()),
    };
    let config: AppConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Config path from `AETHELGARD_CONFIG`, falling back to `config.json`.
pub fn config_path() -> String {
    std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}
