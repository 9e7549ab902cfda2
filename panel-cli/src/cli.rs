use clap::Parser;
use panel_core::{Config, TemperatureUnit};
use std::path::PathBuf;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-panel", version, about = "Weather panel daemon")]
pub struct Cli {
    /// Place name to geocode (overrides config).
    #[arg(long)]
    pub place: Option<String>,

    /// Two-letter country code (overrides config).
    #[arg(long)]
    pub country: Option<String>,

    /// Temperature unit: "celsius" or "fahrenheit" (overrides config).
    #[arg(long)]
    pub unit: Option<String>,

    /// Seconds between poll cycles (overrides config).
    #[arg(long)]
    pub interval: Option<u64>,

    /// Run a single fetch-render cycle and exit.
    #[arg(long)]
    pub once: bool,

    /// Explicit config file path.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Fold the command-line overrides into the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) -> anyhow::Result<()> {
        if let Some(place) = &self.place {
            config.place_name = place.clone();
        }
        if let Some(country) = &self.country {
            config.country_code = country.clone();
        }
        if let Some(unit) = &self.unit {
            config.temperature_unit = TemperatureUnit::try_from(unit.as_str())?;
        }
        if let Some(interval) = self.interval {
            config.refresh_seconds = interval;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_leave_the_config_alone() {
        let cli = Cli::parse_from(["weather-panel"]);
        let mut config = Config::default();

        cli.apply_overrides(&mut config).expect("no overrides to apply");

        assert_eq!(config.place_name, "London");
        assert_eq!(config.country_code, "GB");
        assert_eq!(config.refresh_seconds, 600);
    }

    #[test]
    fn flags_override_the_config() {
        let cli = Cli::parse_from([
            "weather-panel",
            "--place",
            "Chicago",
            "--country",
            "US",
            "--unit",
            "fahrenheit",
            "--interval",
            "120",
        ]);
        let mut config = Config::default();

        cli.apply_overrides(&mut config).expect("valid overrides");

        assert_eq!(config.place_name, "Chicago");
        assert_eq!(config.country_code, "US");
        assert_eq!(config.temperature_unit, TemperatureUnit::Fahrenheit);
        assert_eq!(config.refresh_seconds, 120);
    }

    #[test]
    fn bad_unit_is_rejected() {
        let cli = Cli::parse_from(["weather-panel", "--unit", "kelvin"]);
        let mut config = Config::default();

        let err = cli.apply_overrides(&mut config).unwrap_err();
        assert!(err.to_string().contains("Unknown temperature unit"));
    }

    #[test]
    fn once_defaults_to_false() {
        let cli = Cli::parse_from(["weather-panel"]);
        assert!(!cli.once);

        let cli = Cli::parse_from(["weather-panel", "--once"]);
        assert!(cli.once);
    }
}
