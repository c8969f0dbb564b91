//! On-board computer
//!
//! Advances the trip and total tallies once per simulated second and derives
//! every statistic the driver can read off the display.

use tracing::debug;

use super::tally::Tally;
use super::window::ConsumptionWindow;
use crate::unit_conversion::{distance_units_to_km, round_to};
use crate::vehicle::{FuelSource, SpeedController};

/// What happened during the last simulated second
#[derive(Debug, Clone, Copy, PartialEq)]
struct SecondSample {
    speed: u32,
    liters: f64,
}

/// Selects one of the two statistics periods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// Since the last trip reset or engine start
    Trip,
    /// Since the car was built or the last total reset
    Total,
}

/// Trip computer with independent trip and total periods
#[derive(Debug, Clone)]
pub struct OnBoardComputer {
    trip: Tally,
    total: Tally,
    last_second: Option<SecondSample>,
    range_window: ConsumptionWindow,
}

impl OnBoardComputer {
    /// Create a computer for a tank currently holding `fuel_level` liters
    pub fn new(fuel_level: f64) -> Self {
        Self::with_range_window(fuel_level, ConsumptionWindow::default())
    }

    /// Create a computer with a custom range-estimate window
    pub fn with_range_window(fuel_level: f64, range_window: ConsumptionWindow) -> Self {
        Self {
            trip: Tally::new(fuel_level),
            total: Tally::new(fuel_level),
            last_second: None,
            range_window,
        }
    }

    /// Raw counters of a period
    pub fn tally(&self, period: Period) -> &Tally {
        match period {
            Period::Trip => &self.trip,
            Period::Total => &self.total,
        }
    }

    /// Account for one simulated second
    ///
    /// Must run after the speed update and the fuel burn of that second.
    pub fn elapse_second(&mut self, processor: &impl SpeedController) {
        let speed = processor.actual_speed();
        let liters = processor.actual_consumption();
        // one second at v km/h covers exactly v distance units
        let distance_units = u64::from(speed);

        for tally in [&mut self.trip, &mut self.total] {
            tally.add_second();
            if speed > 0 {
                tally.add_driving_second();
                tally.add_distance(distance_units);
                tally.add_consumption_reading(consumption_per_100km(liters, distance_units));
            }
            tally.set_actual_speed(speed);
        }

        self.last_second = Some(SecondSample { speed, liters });
        self.range_window.push(liters, distance_units);
    }

    /// Start a new trip at the current fuel level
    pub fn trip_reset(&mut self, fuel: &impl FuelSource) {
        debug!(seconds = self.trip.seconds(), "trip reset");
        self.trip = Tally::new(fuel.fill_level());
    }

    /// Start a new total period at the current fuel level
    pub fn total_reset(&mut self, fuel: &impl FuelSource) {
        debug!(seconds = self.total.seconds(), "total reset");
        self.total = Tally::new(fuel.fill_level());
        self.range_window.clear();
    }

    /// A new driving session begins
    ///
    /// The trip restarts and the start itself counts as one elapsed second
    /// for both periods.
    pub fn on_engine_start(&mut self, fuel: &impl FuelSource) {
        self.trip = Tally::new(fuel.fill_level());
        self.total.add_second();
        self.trip.add_second();
        self.last_second = None;
    }

    /// Engine stopped; the tallies are left as they are
    pub fn on_engine_stop(&mut self) {}

    /// Fuel was added to the tank
    pub fn on_refuel(&mut self, liters: f64) {
        self.trip.credit_refuel(liters);
        self.total.credit_refuel(liters);
    }

    /// Seconds elapsed in the period
    pub fn real_time(&self, period: Period) -> u64 {
        self.tally(period).seconds()
    }

    /// Seconds spent moving in the period
    pub fn driving_time(&self, period: Period) -> u64 {
        self.tally(period).driving_seconds()
    }

    /// Distance in km, rounded to 2 decimals
    pub fn driven_distance(&self, period: Period) -> f64 {
        round_to(self.tally(period).distance_km(), 2)
    }

    /// Mean of the nonzero speed readings in km/h, rounded to 1 decimal
    pub fn average_speed(&self, period: Period) -> f64 {
        round_to(self.tally(period).average_speed(), 1)
    }

    /// Liters burned during the last second, rounded to 5 decimals
    ///
    /// 0 until a second has elapsed since construction or engine start.
    pub fn actual_consumption_by_time(&self) -> f64 {
        match self.last_second {
            Some(sample) => round_to(sample.liters, 5),
            None => 0.0,
        }
    }

    /// Last second's consumption in L/100km, rounded to 1 decimal
    ///
    /// NaN when the car did not move during the last second.
    pub fn actual_consumption_by_distance(&self) -> f64 {
        match self.last_second {
            Some(sample) if sample.speed > 0 => round_to(
                consumption_per_100km(sample.liters, u64::from(sample.speed)),
                1,
            ),
            _ => f64::NAN,
        }
    }

    /// Liters per second over the period, rounded to 5 decimals
    pub fn average_consumption_by_time(&self, period: Period, fuel: &impl FuelSource) -> f64 {
        round_to(
            self.tally(period)
                .average_consumption_by_time(fuel.fill_level()),
            5,
        )
    }

    /// Mean L/100km over the period's driving seconds, rounded to 1 decimal
    pub fn average_consumption_by_distance(&self, period: Period) -> f64 {
        round_to(self.tally(period).average_consumption_by_distance(), 1)
    }

    /// Kilometers left at the recent consumption rate
    ///
    /// Extrapolates the distance per liter of the range window over the
    /// remaining fuel. 0 while the window holds no distance or no burned fuel.
    pub fn estimated_range(&self, fuel: &impl FuelSource) -> u32 {
        match self.range_window.km_per_liter() {
            // float to int casts saturate
            Some(km_per_liter) => (fuel.fill_level() * km_per_liter).round() as u32,
            None => 0,
        }
    }

    /// The window behind [`Self::estimated_range`]
    pub fn range_window(&self) -> &ConsumptionWindow {
        &self.range_window
    }
}

/// L/100km for burning `liters` over `distance_units`
fn consumption_per_100km(liters: f64, distance_units: u64) -> f64 {
    liters / distance_units_to_km(distance_units) * 100.0
}
