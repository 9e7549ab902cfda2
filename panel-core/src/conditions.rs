//! Interpretation of WMO weather codes as reported by Open-Meteo.
//!
//! Both mappings are total: a code outside the documented table
//! resolves to [`Icon::Unknown`] / `"Code {n}"` rather than an error.

/// Renderable icon asset for a condition. Fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Sun,
    Cloud,
    Fog,
    Rain,
    Snow,
    Storm,
    Unknown,
}

impl Icon {
    /// Select the icon for a weather code.
    pub fn for_code(code: u16) -> Self {
        match code {
            0 | 1 => Icon::Sun,
            2 | 3 => Icon::Cloud,
            45 | 48 => Icon::Fog,
            51 | 53 | 55 | 61 | 63 | 65 | 80 | 81 | 82 => Icon::Rain,
            71 | 73 | 75 => Icon::Snow,
            95 => Icon::Storm,
            _ => Icon::Unknown,
        }
    }

    /// Single-glyph rendition for text surfaces.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Sun => "☀",
            Icon::Cloud => "☁",
            Icon::Fog => "≡",
            Icon::Rain => "☂",
            Icon::Snow => "❄",
            Icon::Storm => "⚡",
            Icon::Unknown => "?",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Icon::Sun => "sun",
            Icon::Cloud => "cloud",
            Icon::Fog => "fog",
            Icon::Rain => "rain",
            Icon::Snow => "snow",
            Icon::Storm => "storm",
            Icon::Unknown => "unknown",
        }
    }
}

/// All codes with a dedicated description. Anything else is reported
/// numerically.
pub const MAPPED_CODES: &[u16] = &[
    0, 1, 2, 3, 45, 48, 51, 53, 55, 61, 63, 65, 71, 73, 75, 80, 81, 82, 95,
];

/// Human text for a weather code.
pub fn describe(code: u16) -> String {
    let text = match code {
        0 => "Clear",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Rime fog",
        51 => "Light drizzle",
        53 => "Drizzle",
        55 => "Heavy drizzle",
        61 => "Light rain",
        63 => "Rain",
        65 => "Heavy rain",
        71 => "Light snow",
        73 => "Snow",
        75 => "Heavy snow",
        80 | 81 => "Rain showers",
        82 => "Violent showers",
        95 => "Thunderstorm",
        _ => return format!("Code {code}"),
    };

    text.to_string()
}
