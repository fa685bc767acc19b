// console/chart.rs

use crate::model::PriceBar;
use crate::utils::format_thousands;

const AXIS_WIDTH: usize = 12;
const WICK: char = '│';
const RISING_BODY: char = '█';
const FALLING_BODY: char = '░';
const POINT: char = '•';
const REFERENCE: char = '┄';

/// Text candlestick chart, one column per bar, `height` rows.
pub fn candlestick_chart(bars: &[PriceBar], height: usize) -> Vec<String> {
    if bars.is_empty() || height == 0 {
        return Vec::new();
    }

    let mut min = bars.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
    let mut max = bars.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
    if max - min <= f64::EPSILON * max.abs().max(1.0) {
        let pad = (max.abs() * 0.001).max(1e-9);
        min -= pad;
        max += pad;
    }
    let step = (max - min) / height as f64;

    let mut lines = Vec::with_capacity(height + 1);
    for row in 0..height {
        let top = max - row as f64 * step;
        let bottom = top - step;

        let label = if row == 0 || row == height / 2 || row + 1 == height {
            format_thousands((top + bottom) / 2.0, 2)
        } else {
            String::new()
        };
        let mut line = format!("{:>width$} ┤", label, width = AXIS_WIDTH);

        for bar in bars {
            let body_lo = bar.open.min(bar.close);
            let body_hi = bar.open.max(bar.close);
            let cell = if body_lo <= top && body_hi >= bottom {
                if bar.is_rising() { RISING_BODY } else { FALLING_BODY }
            } else if bar.low <= top && bar.high >= bottom {
                WICK
            } else {
                ' '
            };
            line.push(cell);
        }
        lines.push(line.trim_end().to_string());
    }

    lines.push(time_axis(bars));
    lines
}

fn time_axis(bars: &[PriceBar]) -> String {
    let indent = " ".repeat(AXIS_WIDTH + 2);
    let first = bars[0].timestamp.format("%H:%M").to_string();
    if bars.len() == 1 {
        return format!("{}{}", indent, first);
    }
    let last = bars[bars.len() - 1].timestamp.format("%H:%M").to_string();
    let gap = bars.len().saturating_sub(first.len() + last.len()).max(1);
    format!("{}{}{}{}", indent, first, " ".repeat(gap), last)
}

/// Oscillator line on a fixed 0–100 scale with dashed reference lines.
/// `None` values are skipped, so the line covers defined points only.
pub fn oscillator_chart(values: &[Option<f64>], height: usize, overbought: f64, oversold: f64) -> Vec<String> {
    let points: Vec<f64> = values.iter().flatten().copied().collect();
    if points.is_empty() || height < 2 {
        return Vec::new();
    }

    let row_of = |v: f64| -> usize {
        let clamped = v.clamp(0.0, 100.0);
        (((100.0 - clamped) / 100.0) * (height - 1) as f64).round() as usize
    };
    let upper_row = row_of(overbought);
    let lower_row = row_of(oversold);
    let point_rows: Vec<usize> = points.iter().map(|&v| row_of(v)).collect();

    (0..height)
        .map(|row| {
            let label = if row == upper_row {
                format!("{:.0}", overbought)
            } else if row == lower_row {
                format!("{:.0}", oversold)
            } else if row == 0 {
                "100".to_string()
            } else if row + 1 == height {
                "0".to_string()
            } else {
                String::new()
            };
            let mut line = format!("{:>width$} ┤", label, width = AXIS_WIDTH);
            let is_reference = row == upper_row || row == lower_row;
            for &p in &point_rows {
                line.push(if p == row {
                    POINT
                } else if is_reference {
                    REFERENCE
                } else {
                    ' '
                });
            }
            line.trim_end().to_string()
        })
        .collect()
}
