//! Car configuration
//!
//! Stored as JSON. Every field falls back to its default when missing, so an
//! empty object `{}` describes the stock car.
//!
//! ```json
//! {
//!   "fuel_level": 40.0,
//!   "max_acceleration": 20,
//!   "range_window_secs": 100,
//!   "units": "imperial"
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::computer::DEFAULT_RANGE_WINDOW_SECS;
use crate::error::ConfigError;
use crate::vehicle::{DEFAULT_ACCELERATION, DEFAULT_FUEL_LEVEL};

/// Units used by reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnits {
    /// km, km/h, liters, L/100km
    #[default]
    Metric,
    /// miles, mph, US gallons, mpg
    Imperial,
}

/// Construction parameters of a car
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarConfig {
    /// Initial fuel in liters, clamped to the tank size
    pub fuel_level: f64,
    /// km/h gained per second, clamped to `[5, 20]`
    pub max_acceleration: i32,
    /// Seconds of history behind the range estimate, capped at
    /// [`MAX_RANGE_WINDOW_SECS`](crate::computer::MAX_RANGE_WINDOW_SECS)
    pub range_window_secs: usize,
    /// Units for reports
    pub units: DisplayUnits,
}

impl Default for CarConfig {
    fn default() -> Self {
        Self {
            fuel_level: DEFAULT_FUEL_LEVEL,
            max_acceleration: DEFAULT_ACCELERATION,
            range_window_secs: DEFAULT_RANGE_WINDOW_SECS,
            units: DisplayUnits::Metric,
        }
    }
}

impl CarConfig {
    /// Parse a configuration from JSON text
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        debug!(path = %path.display(), ?config, "loaded car config");
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
