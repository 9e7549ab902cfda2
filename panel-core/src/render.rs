//! The frame model and the surface the physical display hides behind.
//!
//! A [`Frame`] is the complete visible state of the panel, composed in
//! full before anything is drawn. A surface receives it in a single
//! [`DrawSurface::draw`] call, so the display never shows a partially
//! updated reading.

use anyhow::Result;

use crate::conditions::Icon;
use crate::config::TemperatureUnit;
use crate::model::WeatherReading;

/// Everything the panel shows for one reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Resolved place name, shown as the title.
    pub title: String,

    /// Formatted temperature ("15°C"), or `None` when no reading is
    /// available.
    pub temperature: Option<String>,

    pub description: String,

    pub icon: Icon,

    /// Today's maximum precipitation probability, percent.
    pub rain_chance: Option<u8>,

    /// "HH:MM" label for the footer.
    pub updated: Option<String>,
}

impl Frame {
    /// Build the full frame for a reading. Pure: composing the same
    /// reading twice yields equal frames.
    pub fn compose(title: &str, reading: &WeatherReading, unit: TemperatureUnit) -> Self {
        Self {
            title: title.to_string(),
            temperature: Some(format!("{:.0}{}", reading.temperature, unit.symbol())),
            description: reading.description.clone(),
            icon: Icon::for_code(reading.condition_code),
            rain_chance: reading.rain_chance,
            updated: reading.observed_at.map(|t| t.format("%H:%M").to_string()),
        }
    }
}

/// A drawing surface the renderer targets. Implementations present the
/// whole frame atomically; returning `Ok` means the frame is fully
/// visible.
pub trait DrawSurface {
    fn draw(&mut self, frame: &Frame) -> Result<()>;
}

/// Test double that records every frame it is handed.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub frames: Vec<Frame>,
}

#[cfg(test)]
impl DrawSurface for RecordingSurface {
    fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}
