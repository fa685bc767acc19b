// console/render.rs

use crate::analyzer::Snapshot;
use crate::config::AppConfig;
use crate::console::chart::{candlestick_chart, oscillator_chart};
use crate::dashboard::Frame;
use crate::model::{DecisionError, Signal};
use crate::utils::{format_thousands, format_usd};
use std::fmt::Write;

pub const TITLE: &str = "🏛️  Aethelgard Intelligence Unit";
pub const WAITING_TEXT: &str = "Waiting for market data...";
const RULE: &str = "────────────────────────────────────────────────────────────";

/// Renders one full frame as text.
pub fn render_frame(frame: &Frame, cfg: &AppConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", TITLE);
    let _ = writeln!(out, "{}", RULE);
    out.push_str(&render_wallet(cfg));
    let _ = writeln!(out, "{}", RULE);

    match frame {
        Frame::Waiting { symbol, reason } => {
            let _ = writeln!(out, "⏳ {} [{}] {}", WAITING_TEXT, symbol, reason);
        }
        Frame::Alert { symbol, message } => {
            let _ = writeln!(out, "⚠️  System Alert [{}]: {}", symbol, message);
        }
        Frame::Ready(snapshot) => out.push_str(&render_snapshot(snapshot, cfg)),
    }
    out
}

pub fn render_wallet(cfg: &AppConfig) -> String {
    let capital = &cfg.capital;
    format!(
        "💼 Strategic Wallet  Your Capital: {} {}  (${} {})\n",
        format_thousands(capital.fiat_balance, 0),
        capital.fiat_currency,
        format_thousands(capital.stable_balance(), 2),
        capital.stable_currency,
    )
}

fn render_snapshot(snapshot: &Snapshot, cfg: &AppConfig) -> String {
    let mut out = String::new();
    out.push_str(&render_header(snapshot));
    let _ = writeln!(out);

    let bars = &snapshot.series.bars;
    let start = bars.len().saturating_sub(cfg.chart.bars);

    let _ = writeln!(out, "📈 {} · last {} bars", snapshot.series.symbol, bars.len() - start);
    for line in candlestick_chart(&bars[start..], cfg.chart.candle_height) {
        let _ = writeln!(out, "{}", line);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "💓 Market Heartbeat (RSI)");
    let rsi_lines = oscillator_chart(
        &snapshot.derived.rsi[start..],
        cfg.chart.oscillator_height,
        cfg.indicators.overbought,
        cfg.indicators.oversold,
    );
    if rsi_lines.is_empty() {
        let _ = writeln!(out, "   (not enough history yet)");
    }
    for line in rsi_lines {
        let _ = writeln!(out, "{}", line);
    }

    let _ = writeln!(out, "{}", RULE);
    out.push_str(&render_recommendation(snapshot));
    out
}

fn render_header(snapshot: &Snapshot) -> String {
    let trend = snapshot.trend.map(|t| t.label()).unwrap_or("N/A");
    let heartbeat = snapshot
        .rsi
        .map(|r| format!("{:.1}", r))
        .unwrap_or_else(|| "N/A".to_string());
    let price_label = format!("{} LIVE PRICE", snapshot.series.symbol);

    let as_of = snapshot.latest_bar().timestamp.format("%Y-%m-%d %H:%M UTC");

    format!(
        "{:<22}{:<26}{}\n{:<22}{:<26}{}\nas of {}\n",
        "TREND",
        price_label,
        "MARKET HEARTBEAT",
        trend,
        format_usd(snapshot.price),
        heartbeat,
        as_of,
    )
}

pub fn render_recommendation(snapshot: &Snapshot) -> String {
    match &snapshot.decision {
        Ok(rec) => {
            let marker = match rec.signal {
                Signal::Buy => "🟢",
                Signal::Sell => "🟡",
                Signal::Avoid => "🔴",
            };
            format!("{} RECOMMENDATION: {}\n   {}\n", marker, rec.signal.label(), rec.rationale)
        }
        Err(DecisionError::InsufficientData(missing)) => format!(
            "⏳ RECOMMENDATION: INSUFFICIENT DATA\n   {} not yet available ({} bars so far).\n",
            missing,
            snapshot.series.len()
        ),
        // Frames carrying this are turned into alerts before rendering.
        Err(e @ DecisionError::NonFinite { .. }) => format!("⚠️  {}\n", e),
    }
}
