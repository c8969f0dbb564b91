//! Driver actions and drive scripts
//!
//! A drive script is a JSON array of actions:
//!
//! ```json
//! ["engine_start", "running_idle", {"accelerate": 30}, {"brake_by": 10}, "free_wheel"]
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// One driver input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveAction {
/// Start the engine
    EngineStart,
/// Stop the engine
    EngineStop,
    /// Accelerate toward the target speed in km/h
    Accelerate(i32),
    /// Brake by the given km/h
    BrakeBy(i32),
/// Roll for one second
    FreeWheel,
/// Idle for one second
    RunningIdle,
    /// Add liters to the tank
    Refuel(f64),
/// Start a new trip
    TripReset,
/// Clear the total counters
    TotalReset,
}

impl DriveAction {
    /// Parse a drive script from JSON text
    pub fn parse_script(content: &str) -> Result<Vec<DriveAction>, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a drive script file
    pub fn load_script<P: AsRef<Path>>(path: P) -> Result<Vec<DriveAction>, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse_script(&content)
    }

    /// Write a drive script as pretty-printed JSON
    pub fn save_script<P: AsRef<Path>>(path: P, actions: &[DriveAction]) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(actions)?;
        fs::write(path, content)?;
        Ok(())
    }
}
