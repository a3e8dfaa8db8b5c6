//! Static mapping from OpenWeather condition codes to display icons.
//!
//! The table is many-to-one (day and night variants of a code share an
//! icon, as do the various cloud-cover codes) and is never mutated after
//! startup. A code the table does not know falls back to [`DEFAULT_ICON`].

use serde::{Deserialize, Serialize};

/// A display icon for a weather condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Clear,
    Clouds,
    Rain,
    Snow,
    Drizzle,
}

/// Icon used when a condition code has no table entry.
pub const DEFAULT_ICON: Icon = Icon::Clear;

/// Condition code → icon, in OpenWeather's `NNd`/`NNn` code scheme.
const CODE_TABLE: &[(&str, Icon)] = &[
    ("01d", Icon::Clear),
    ("01n", Icon::Clear),
    ("02d", Icon::Clouds),
    ("02n", Icon::Clouds),
    ("03d", Icon::Clouds),
    ("03n", Icon::Clouds),
    ("04d", Icon::Clouds),
    ("04n", Icon::Clouds),
    ("09d", Icon::Rain),
    ("09n", Icon::Rain),
    ("10d", Icon::Rain),
    ("10n", Icon::Rain),
    ("11d", Icon::Rain),
    ("11n", Icon::Rain),
    ("13d", Icon::Snow),
    ("13n", Icon::Snow),
    ("50d", Icon::Drizzle),
    ("50n", Icon::Drizzle),
];

impl Icon {
    /// Resolve a condition code, falling back to [`DEFAULT_ICON`] on a miss.
    pub fn for_code(code: &str) -> Icon {
        CODE_TABLE
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, icon)| *icon)
            .unwrap_or(DEFAULT_ICON)
    }

    /// Terminal glyph standing in for the widget's image asset.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Clear => "\u{2600}",    // ☀
            Icon::Clouds => "\u{2601}",   // ☁
            Icon::Rain => "\u{1f327}",    // 🌧
            Icon::Snow => "\u{2744}",     // ❄
            Icon::Drizzle => "\u{1f326}", // 🌦
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Icon::Clear => "clear",
            Icon::Clouds => "clouds",
            Icon::Rain => "rain",
            Icon::Snow => "snow",
            Icon::Drizzle => "drizzle",
        }
    }
}
