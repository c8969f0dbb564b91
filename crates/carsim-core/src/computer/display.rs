//! Read-only view of the on-board computer

use super::onboard::{OnBoardComputer, Period};
use super::report::{PeriodReport, TripReport};
use crate::config::DisplayUnits;
use crate::unit_conversion::round_to;
use crate::vehicle::{FuelSource, SpeedController};

/// Borrowed display of the on-board computer
///
/// Combines the computer's tallies with the live fuel level and speed.
pub struct OnBoardComputerDisplay<'a, F, S> {
    computer: &'a OnBoardComputer,
    fuel: &'a F,
    processor: &'a S,
}

impl<'a, F: FuelSource, S: SpeedController> OnBoardComputerDisplay<'a, F, S> {
    /// Borrow the computer together with the tank and processor it reads
    pub fn new(computer: &'a OnBoardComputer, fuel: &'a F, processor: &'a S) -> Self {
        Self {
            computer,
            fuel,
            processor,
        }
    }

    /// Seconds since the trip started
    pub fn trip_real_time(&self) -> u64 {
        self.computer.real_time(Period::Trip)
    }

    /// Seconds driven above standstill in this trip
    pub fn trip_driving_time(&self) -> u64 {
        self.computer.driving_time(Period::Trip)
    }

    /// Trip distance in km, two decimals
    pub fn trip_driven_distance(&self) -> f64 {
        self.computer.driven_distance(Period::Trip)
    }

    /// Seconds since the last total reset
    pub fn total_real_time(&self) -> u64 {
        self.computer.real_time(Period::Total)
    }

    /// Seconds driven above standstill since the last total reset
    pub fn total_driving_time(&self) -> u64 {
        self.computer.driving_time(Period::Total)
    }

    /// Total distance in km, two decimals
    pub fn total_driven_distance(&self) -> f64 {
        self.computer.driven_distance(Period::Total)
    }

    /// Current speed in km/h
    pub fn actual_speed(&self) -> u32 {
        self.processor.actual_speed()
    }

    /// Mean trip speed in km/h over driving seconds
    pub fn trip_average_speed(&self) -> f64 {
        self.computer.average_speed(Period::Trip)
    }

    /// Mean total speed in km/h over driving seconds
    pub fn total_average_speed(&self) -> f64 {
        self.computer.average_speed(Period::Total)
    }

    /// Liters burned in the last second
    pub fn actual_consumption_by_time(&self) -> f64 {
        self.computer.actual_consumption_by_time()
    }

    /// L/100km of the last second, NaN at standstill
    pub fn actual_consumption_by_distance(&self) -> f64 {
        self.computer.actual_consumption_by_distance()
    }

    /// Liters per second burned on this trip
    pub fn trip_average_consumption_by_time(&self) -> f64 {
        self.computer
            .average_consumption_by_time(Period::Trip, self.fuel)
    }

    /// Liters per second burned since the last total reset
    pub fn total_average_consumption_by_time(&self) -> f64 {
        self.computer
            .average_consumption_by_time(Period::Total, self.fuel)
    }

    /// Mean trip L/100km over driving seconds
    pub fn trip_average_consumption_by_distance(&self) -> f64 {
        self.computer.average_consumption_by_distance(Period::Trip)
    }

    /// Mean total L/100km over driving seconds
    pub fn total_average_consumption_by_distance(&self) -> f64 {
        self.computer.average_consumption_by_distance(Period::Total)
    }

    /// Remaining km at the recent consumption rate
    pub fn estimated_range(&self) -> u32 {
        self.computer.estimated_range(self.fuel)
    }

    /// Snapshot of every value on the display
    pub fn report(&self, units: DisplayUnits) -> TripReport {
        let by_distance = self.actual_consumption_by_distance();
        TripReport {
            units: DisplayUnits::Metric,
            actual_speed: f64::from(self.actual_speed()),
            actual_consumption_by_time: self.actual_consumption_by_time(),
            actual_consumption_by_distance: (!by_distance.is_nan()).then_some(by_distance),
            estimated_range: f64::from(self.estimated_range()),
            fuel_level: round_to(self.fuel.fill_level(), 2),
            trip: self.period_report(Period::Trip),
            total: self.period_report(Period::Total),
        }
        .into_units(units)
    }

    fn period_report(&self, period: Period) -> PeriodReport {
        PeriodReport {
            real_time: self.computer.real_time(period),
            driving_time: self.computer.driving_time(period),
            driven_distance: self.computer.driven_distance(period),
            average_speed: self.computer.average_speed(period),
            average_consumption_by_time: self
                .computer
                .average_consumption_by_time(period, self.fuel),
            average_consumption_by_distance: self.computer.average_consumption_by_distance(period),
        }
    }
}
