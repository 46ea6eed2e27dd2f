use ratatui::style::Color;

/// Light or dark palette, switchable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Light,
    Dark,
}

impl ThemeKind {
    /// Parse the `theme` config value; anything but "dark" is light.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("dark") {
            ThemeKind::Dark
        } else {
            ThemeKind::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeKind::Light => ThemeKind::Dark,
            ThemeKind::Dark => ThemeKind::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeKind::Light => "Light",
            ThemeKind::Dark => "Dark",
        }
    }
}

/// Parsed color theme for the dashboard
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub textbox: Color,
    pub dim: Color,
    pub bar: Color,
    pub warning: Color,
    /// Heatmap gradient, from no time to the busiest day
    pub heat_low: (u8, u8, u8),
    pub heat_high: (u8, u8, u8),
}

impl Theme {
    pub fn for_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Light => Theme {
                background: Color::Rgb(0xF7, 0xF9, 0xFC),
                text: Color::Rgb(0x00, 0x00, 0x00),
                accent: Color::Rgb(0x3A, 0x6E, 0xA5),
                textbox: Color::Rgb(0xFF, 0xFF, 0xFF),
                dim: Color::Rgb(0x7A, 0x84, 0x90),
                bar: Color::Rgb(0x4E, 0xA8, 0xDE),
                warning: Color::Rgb(0xC0, 0x39, 0x2B),
                heat_low: (0xF7, 0xFB, 0xFF),
                heat_high: (0x08, 0x30, 0x6B),
            },
            ThemeKind::Dark => Theme {
                background: Color::Rgb(0x1E, 0x1E, 0x1E),
                text: Color::Rgb(0xFF, 0xFF, 0xFF),
                accent: Color::Rgb(0x4E, 0xA8, 0xDE),
                textbox: Color::Rgb(0x2C, 0x2C, 0x2C),
                dim: Color::Rgb(0x8A, 0x8A, 0x8A),
                bar: Color::Rgb(0xFF, 0xDD, 0x57),
                warning: Color::Rgb(0xFF, 0x66, 0x66),
                heat_low: (0x0D, 0x08, 0x87),
                heat_high: (0xF0, 0xF9, 0x21),
            },
        }
    }

    /// Heatmap color for `value` on a 0..=`max` scale.
    pub fn heat_color(&self, value: f64, max: f64) -> Color {
        let t = if max > 0.0 {
            (value / max).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        let (lr, lg, lb) = self.heat_low;
        let (hr, hg, hb) = self.heat_high;
        Color::Rgb(lerp(lr, hr), lerp(lg, hg), lerp(lb, hb))
    }
}
