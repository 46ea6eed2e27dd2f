/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const CYAN: &str = "\x1b[36m";

/// Shading characters from empty to full, used by the text heatmap.
pub const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];

/// Pick a shade for `value` relative to `max` (0 → blank, max → full block).
pub fn shade_for(value: f64, max: f64) -> char {
    if value <= 0.0 || max <= 0.0 {
        return SHADES[0];
    }
    let ratio = (value / max).clamp(0.0, 1.0);
    let idx = 1 + ((ratio * 3.0).round() as usize).min(3);
    SHADES[idx]
}
