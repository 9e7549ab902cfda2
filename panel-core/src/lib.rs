//! Core library for the weather panel.
//!
//! This crate defines:
//! - Configuration handling
//! - Geocoding and the weather source abstraction
//! - Condition-code interpretation and icon selection
//! - The frame/surface rendering model and the poll loop
//!
//! It is used by `panel-cli`, but can also be reused by other binaries
//! targeting a different display surface.

pub mod conditions;
pub mod config;
pub mod geocode;
pub mod model;
pub mod poll;
pub mod render;
pub mod source;

pub use conditions::Icon;
pub use config::{Config, TemperatureUnit};
pub use model::{Location, WeatherReading};
pub use poll::{CycleOutcome, Poller};
pub use render::{DrawSurface, Frame};
pub use source::{FetchError, OpenMeteoSource, WeatherSource};
