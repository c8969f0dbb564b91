//! Engine on/off state

use super::FuelSource;

/// Combustion engine
///
/// Only runs while there is fuel. Consumption is delegated to whatever
/// [`FuelSource`] the caller hands in.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    is_running: bool,
}

impl Engine {
    /// Create a stopped engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the engine is running
    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Try to start; fails silently on an empty source
    pub fn start(&mut self, fuel: &impl FuelSource) {
        self.is_running = !fuel.is_empty();
    }

    /// Stop the engine
    pub fn stop(&mut self) {
        self.is_running = false;
    }

    /// Burn `liters` from the fuel source
    pub fn consume(&self, fuel: &mut impl FuelSource, liters: f64) {
        fuel.consume(liters);
    }
}
