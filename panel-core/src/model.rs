use chrono::NaiveDateTime;

/// A place resolved to coordinates. Built once at startup and
/// immutable for the life of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub place_name: String,
    pub country_code: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// One observation of current conditions. Replaced wholesale each poll
/// cycle; no history is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    /// In the configured unit (°C or °F).
    pub temperature: f64,

    /// WMO weather code as reported by the API.
    pub condition_code: u16,

    /// Human-readable condition text derived from the code.
    pub description: String,

    /// Observation time in the location's local timezone, when the API
    /// supplied a parseable one.
    pub observed_at: Option<NaiveDateTime>,

    /// Today's maximum precipitation probability, percent.
    pub rain_chance: Option<u8>,
}
