//! Fuel tank
//!
//! Holds the fuel level, clamped to `[0, MAXIMUM_FUEL_LEVEL]`.

/// Tank capacity in liters
pub const MAXIMUM_FUEL_LEVEL: f64 = 60.0;

/// Fill level of a new car in liters
pub const DEFAULT_FUEL_LEVEL: f64 = 20.0;

/// The reserve light turns on at or below this level
pub const RESERVE_FUEL_LEVEL: f64 = 5.0;

/// Anything that can hand out fuel
///
/// Implemented by [`FuelTank`]. The engine and the on-board computer only see
/// this capability, never the concrete tank.
pub trait FuelSource {
    /// Current fill level in liters
    fn fill_level(&self) -> f64;

    /// Take `liters` out of the source
    fn consume(&mut self, liters: f64);

    /// Whether the source has run dry
    fn is_empty(&self) -> bool {
        self.fill_level() <= 0.0
    }
}

/// Fuel tank with a clamped fill level
#[derive(Debug, Clone, PartialEq)]
pub struct FuelTank {
    fill_level: f64,
}

impl FuelTank {
    /// Create a tank, clamping `fuel_level` into the tank's capacity
    pub fn new(fuel_level: f64) -> Self {
        let fill_level = if fuel_level.is_nan() {
            0.0
        } else {
            fuel_level.clamp(0.0, MAXIMUM_FUEL_LEVEL)
        };
        Self { fill_level }
    }

    /// Whether the level is at or below the reserve mark
    pub fn is_on_reserve(&self) -> bool {
        self.fill_level <= RESERVE_FUEL_LEVEL
    }

    /// Whether the tank is full
    pub fn is_complete(&self) -> bool {
        self.fill_level == MAXIMUM_FUEL_LEVEL
    }

    /// Add fuel, capped at capacity
    ///
    /// Non-positive amounts are ignored. Returns the liters that actually
    /// went into the tank.
    pub fn refuel(&mut self, liters: f64) -> f64 {
        if liters.is_nan() || liters <= 0.0 {
            return 0.0;
        }
        let before = self.fill_level;
        self.fill_level = (before + liters).min(MAXIMUM_FUEL_LEVEL);
        self.fill_level - before
    }
}

impl Default for FuelTank {
    fn default() -> Self {
        Self::new(DEFAULT_FUEL_LEVEL)
    }
}

impl FuelSource for FuelTank {
    fn fill_level(&self) -> f64 {
        self.fill_level
    }

    fn consume(&mut self, liters: f64) {
        if self.fill_level <= 0.0 {
            return;
        }
        self.fill_level = (self.fill_level - liters).max(0.0);
    }
}
