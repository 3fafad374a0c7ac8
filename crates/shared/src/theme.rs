//! Named color palettes and their CSS custom-property rendering.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("invalid hex color '{0}', expected #rrggbb")]
    InvalidColor(String),
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),
    #[error("theme list is empty")]
    NoThemes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: String,
    pub background: String,
    pub foreground: String,
    pub card: String,
    pub card_foreground: String,
    pub popover: String,
    pub popover_foreground: String,
    pub primary: String,
    pub primary_foreground: String,
    pub secondary: String,
    pub secondary_foreground: String,
    pub muted: String,
    pub muted_foreground: String,
    pub accent: String,
    pub accent_foreground: String,
    pub border: String,
    pub input: String,
    pub ring: String,
    pub card_colors: Vec<String>,
}

impl Theme {
    /// Pairs of (css variable, hsl triple) for every token, in the order they
    /// are written to the document root.
    fn tokens(&self) -> [(&'static str, &str); 17] {
        [
            ("--background", &self.background),
            ("--foreground", &self.foreground),
            ("--card", &self.card),
            ("--card-foreground", &self.card_foreground),
            ("--popover", &self.popover),
            ("--popover-foreground", &self.popover_foreground),
            ("--primary", &self.primary),
            ("--primary-foreground", &self.primary_foreground),
            ("--secondary", &self.secondary),
            ("--secondary-foreground", &self.secondary_foreground),
            ("--muted", &self.muted),
            ("--muted-foreground", &self.muted_foreground),
            ("--accent", &self.accent),
            ("--accent-foreground", &self.accent_foreground),
            ("--border", &self.border),
            ("--input", &self.input),
            ("--ring", &self.ring),
        ]
    }

    /// Custom properties for this palette. Tokens are rendered as HSL so the
    /// stylesheet can apply alpha; card colors are passed through as hex.
    pub fn css_variables(&self) -> Result<Vec<(String, String)>, ThemeError> {
        let mut vars = Vec::with_capacity(17 + self.card_colors.len());
        for (name, hex) in self.tokens() {
            vars.push((name.to_string(), hex_to_hsl(hex)?));
        }
        for (index, color) in self.card_colors.iter().enumerate() {
            vars.push((format!("--card-color-{}", index + 1), color.clone()));
        }
        Ok(vars)
    }

    /// Stable identifier derived from the display name, e.g. "cool-mint".
    pub fn slug(&self) -> String {
        self.name
            .split_whitespace()
            .map(str::to_ascii_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// Converts `#rrggbb` into the `"H S% L%"` form used by the stylesheet.
pub fn hex_to_hsl(hex: &str) -> Result<String, ThemeError> {
    let invalid = || ThemeError::InvalidColor(hex.to_string());
    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map(|v| f64::from(v) / 255.0)
            .map_err(|_| invalid())
    };
    let (r, g, b) = (channel(0..2)?, channel(2..4)?, channel(4..6)?);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let (mut h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h, s)
    };
    h /= 6.0;

    Ok(format!(
        "{} {}% {}%",
        (h * 360.0).round(),
        (s * 100.0).round(),
        (l * 100.0).round()
    ))
}

struct Palette {
    name: &'static str,
    // background, foreground, card, card fg, popover, popover fg, primary,
    // primary fg, secondary, secondary fg, muted, muted fg, accent,
    // accent fg, border, input, ring
    tokens: [&'static str; 17],
    card_colors: [&'static str; 6],
}

const PALETTES: [Palette; 5] = [
    Palette {
        name: "Warm Beige",
        tokens: [
            "#ede6d3", "#1a1a1a", "#ffffff", "#1a1a1a", "#ffffff", "#1a1a1a", "#ff6b35",
            "#ffffff", "#e8dcc4", "#1a1a1a", "#b8a890", "#5a5a5a", "#ff6b35", "#ffffff",
            "#d9ceb8", "#d9ceb8", "#ff6b35",
        ],
        card_colors: ["#b8d4b8", "#adc3e0", "#e8a598", "#c4a7d8", "#f0d674", "#98d4c4"],
    },
    Palette {
        name: "Cool Mint",
        tokens: [
            "#e8f5f0", "#0a2818", "#ffffff", "#0a2818", "#ffffff", "#0a2818", "#00a86b",
            "#ffffff", "#d4ebe2", "#0a2818", "#a8c0a8", "#4a6a4a", "#00a86b", "#ffffff",
            "#c0d8c0", "#c0d8c0", "#00a86b",
        ],
        card_colors: ["#a8d5ba", "#b3d4f0", "#ffc0a9", "#d4b3f0", "#ffe4a1", "#a1e4d4"],
    },
    Palette {
        name: "Soft Pink",
        tokens: [
            "#fef0f0", "#2d1810", "#ffffff", "#2d1810", "#ffffff", "#2d1810", "#e75480",
            "#ffffff", "#fde0e0", "#2d1810", "#e0c0c0", "#6a4a4a", "#e75480", "#ffffff",
            "#f0d0d0", "#f0d0d0", "#e75480",
        ],
        card_colors: ["#ffc4d1", "#c4d1ff", "#ffd4a3", "#e4c4ff", "#fff4c4", "#c4ffe4"],
    },
    Palette {
        name: "Ocean Blue",
        tokens: [
            "#e0f2fe", "#0c2a3d", "#ffffff", "#0c2a3d", "#ffffff", "#0c2a3d", "#0077be",
            "#ffffff", "#cce7f5", "#0c2a3d", "#a0c8e0", "#4a6a8a", "#0077be", "#ffffff",
            "#b0d8f0", "#b0d8f0", "#0077be",
        ],
        card_colors: ["#a3d5ff", "#ffa3d5", "#a3ffd5", "#ffd5a3", "#d5a3ff", "#a3a3ff"],
    },
    Palette {
        name: "Dark Mode",
        tokens: [
            "#1a1a1a", "#f0f0f0", "#2a2a2a", "#f0f0f0", "#2a2a2a", "#f0f0f0", "#ff6b35",
            "#1a1a1a", "#3a3a3a", "#f0f0f0", "#4a4a4a", "#a0a0a0", "#ff6b35", "#1a1a1a",
            "#3a3a3a", "#3a3a3a", "#ff6b35",
        ],
        card_colors: ["#4a5a4a", "#4a5a6a", "#6a4a4a", "#5a4a6a", "#6a6a4a", "#4a6a6a"],
    },
];

impl From<&Palette> for Theme {
    fn from(p: &Palette) -> Self {
        let [background, foreground, card, card_foreground, popover, popover_foreground, primary, primary_foreground, secondary, secondary_foreground, muted, muted_foreground, accent, accent_foreground, border, input, ring] =
            p.tokens.map(String::from);
        Self {
            name: p.name.to_string(),
            background,
            foreground,
            card,
            card_foreground,
            popover,
            popover_foreground,
            primary,
            primary_foreground,
            secondary,
            secondary_foreground,
            muted,
            muted_foreground,
            accent,
            accent_foreground,
            border,
            input,
            ring,
            card_colors: p.card_colors.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// The built-in palettes. The first entry is the default selection.
pub fn default_themes() -> Vec<Theme> {
    PALETTES.iter().map(Theme::from).collect()
}

#[cfg(test)]
#[path = "tests/theme_tests.rs"]
mod tests;
