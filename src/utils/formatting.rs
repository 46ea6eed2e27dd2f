//! Formatting utilities used for CLI and dashboard outputs.

use unicode_width::UnicodeWidthStr;

/// Pad on the right to `width` display columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Pad on the left to `width` display columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", " ".repeat(width.saturating_sub(w)), s)
}

/// Minutes with two decimals, trailing zeros dropped (`12.5`, `3`, `0.25`).
pub fn format_mins(mins: f64) -> String {
    let s = format!("{:.2}", mins);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// `02h 25m` style rendering of a minute count.
pub fn mins2readable(mins: f64) -> String {
    let total = mins.round() as i64;
    let abs_m = total.abs();
    let sign = if total < 0 { "-" } else { "" };
    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}
