//! Running counters for one statistics period

use crate::unit_conversion::distance_units_to_km;

/// Counters for a trip or total period
///
/// All counters only grow. A reset replaces the whole tally.
#[derive(Debug, Clone, PartialEq)]
pub struct Tally {
    seconds: u64,
    driving_seconds: u64,
    distance_units: u64,
    actual_speed: u32,
    speed_reading_sum: u64,
    speed_reading_count: u64,
    consumption_reading_sum: f64,
    consumption_reading_count: u64,
    start_fuel_level: f64,
}

impl Tally {
    /// Start a period at the given fuel level
    pub fn new(start_fuel_level: f64) -> Self {
        Self {
            seconds: 0,
            driving_seconds: 0,
            distance_units: 0,
            actual_speed: 0,
            speed_reading_sum: 0,
            speed_reading_count: 0,
            consumption_reading_sum: 0.0,
            consumption_reading_count: 0,
            start_fuel_level,
        }
    }

    /// Count one elapsed second
    pub fn add_second(&mut self) {
        self.seconds += 1;
    }

    /// Count one second spent above standstill
    pub fn add_driving_second(&mut self) {
        self.driving_seconds += 1;
    }

    /// Add fixed-point distance units
    pub fn add_distance(&mut self, units: u64) {
        self.distance_units += units;
    }

    /// Record the speed of the current second
    ///
    /// Standstill readings are left out of the average.
    pub fn set_actual_speed(&mut self, speed: u32) {
        self.actual_speed = speed;
        if speed > 0 {
            self.speed_reading_sum += u64::from(speed);
            self.speed_reading_count += 1;
        }
    }

    /// Record one driving second's consumption in L/100km
    pub fn add_consumption_reading(&mut self, l_per_100km: f64) {
        self.consumption_reading_sum += l_per_100km;
        self.consumption_reading_count += 1;
    }

    /// Account for fuel put into the tank during this period
    pub fn credit_refuel(&mut self, liters: f64) {
        self.start_fuel_level += liters;
    }

    /// Elapsed seconds
    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Seconds spent above standstill
    pub fn driving_seconds(&self) -> u64 {
        self.driving_seconds
    }

    /// Distance in 1/3600 km units
    pub fn distance_units(&self) -> u64 {
        self.distance_units
    }

    /// Latest recorded speed
    pub fn actual_speed(&self) -> u32 {
        self.actual_speed
    }

    /// Fuel level at the start, plus any refuels
    pub fn start_fuel_level(&self) -> f64 {
        self.start_fuel_level
    }

    /// Distance in km, unrounded
    pub fn distance_km(&self) -> f64 {
        distance_units_to_km(self.distance_units)
    }

    /// Liters burned since the period started
    pub fn fuel_used(&self, current_fuel_level: f64) -> f64 {
        self.start_fuel_level - current_fuel_level
    }

    /// Mean of the nonzero speed readings, 0 without any
    pub fn average_speed(&self) -> f64 {
        if self.speed_reading_count == 0 {
            return 0.0;
        }
        self.speed_reading_sum as f64 / self.speed_reading_count as f64
    }

    /// Liters per second over the whole period, 0 before the first second
    pub fn average_consumption_by_time(&self, current_fuel_level: f64) -> f64 {
        if self.seconds == 0 {
            return 0.0;
        }
        self.fuel_used(current_fuel_level) / self.seconds as f64
    }

    /// Mean of the driving seconds' L/100km readings, 0 without any
    pub fn average_consumption_by_distance(&self) -> f64 {
        if self.consumption_reading_count == 0 {
            return 0.0;
        }
        self.consumption_reading_sum / self.consumption_reading_count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tally_is_empty() {
        let tally = Tally::new(20.0);
        assert_eq!(tally.seconds(), 0);
        assert_eq!(tally.driving_seconds(), 0);
        assert_eq!(tally.distance_units(), 0);
        assert_eq!(tally.average_speed(), 0.0);
        assert_eq!(tally.average_consumption_by_time(20.0), 0.0);
        assert_eq!(tally.average_consumption_by_distance(), 0.0);
    }

    #[test]
    fn test_zero_speed_excluded_from_average() {
        let mut tally = Tally::new(20.0);
        tally.set_actual_speed(0);
        tally.set_actual_speed(10);
        tally.set_actual_speed(0);
        tally.set_actual_speed(30);
        assert_eq!(tally.average_speed(), 20.0);
        assert_eq!(tally.actual_speed(), 30);
    }

    #[test]
    fn test_fuel_used_reads_live_level() {
        let mut tally = Tally::new(20.0);
        assert_eq!(tally.fuel_used(18.5), 1.5);
        tally.credit_refuel(10.0);
        assert_eq!(tally.fuel_used(28.5), 1.5);
    }

    #[test]
    fn test_distance_in_km() {
        let mut tally = Tally::new(20.0);
        tally.add_distance(1800);
        tally.add_distance(1800);
        assert_eq!(tally.distance_km(), 1.0);
    }
}
