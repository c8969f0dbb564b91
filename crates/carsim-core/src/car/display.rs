//! Dashboard displays for the tank and the speedometer

use crate::unit_conversion::round_to;
use crate::vehicle::{FuelSource, FuelTank, SpeedController};

/// Fuel gauge
///
/// Takes the concrete [`FuelTank`] because reserve and full-tank state are
/// tank properties, not part of [`FuelSource`].
pub struct FuelTankDisplay<'a> {
    tank: &'a FuelTank,
}

impl<'a> FuelTankDisplay<'a> {
    /// Borrow the tank
    pub fn new(tank: &'a FuelTank) -> Self {
        Self { tank }
    }

    /// Fill level in liters, rounded to 2 decimals
    pub fn fill_level(&self) -> f64 {
        round_to(self.tank.fill_level(), 2)
    }

    /// True at or below the reserve level
    pub fn is_on_reserve(&self) -> bool {
        self.tank.is_on_reserve()
    }

    /// True when the tank is full
    pub fn is_complete(&self) -> bool {
        self.tank.is_complete()
    }
}

/// Speedometer
pub struct DrivingInformationDisplay<'a, S> {
    processor: &'a S,
}

impl<'a, S: SpeedController> DrivingInformationDisplay<'a, S> {
    /// Borrow the speed controller
    pub fn new(processor: &'a S) -> Self {
        Self { processor }
    }

    /// Current speed in km/h
    pub fn actual_speed(&self) -> u32 {
        self.processor.actual_speed()
    }
}
