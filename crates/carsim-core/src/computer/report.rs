//! Trip report snapshot
//!
//! A serializable copy of everything the on-board display shows, in metric
//! or imperial units.

use serde::{Deserialize, Serialize};

use crate::config::DisplayUnits;
use crate::unit_conversion::{
    km_to_miles, kmh_to_mph, l_per_100km_to_mpg_us, liters_to_gallons_us, round_to,
};

/// Statistics of one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodReport {
    /// Elapsed seconds
    pub real_time: u64,
    /// Seconds spent moving
    pub driving_time: u64,
    /// km or miles
    pub driven_distance: f64,
    /// km/h or mph
    pub average_speed: f64,
    /// L/s or US gal/s
    pub average_consumption_by_time: f64,
    /// L/100km or US mpg
    pub average_consumption_by_distance: f64,
}

/// Snapshot of the on-board display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripReport {
    /// Units of every value below
    pub units: DisplayUnits,
    /// km/h or mph
    pub actual_speed: f64,
    /// L/s or US gal/s
    pub actual_consumption_by_time: f64,
    /// L/100km or US mpg; `None` while standing still
    pub actual_consumption_by_distance: Option<f64>,
    /// km or miles
    pub estimated_range: f64,
    /// Liters or US gallons
    pub fuel_level: f64,
    /// Since the last trip reset or engine start
    pub trip: PeriodReport,
    /// Since the last total reset
    pub total: PeriodReport,
}

impl PeriodReport {
    fn to_imperial(&self) -> Self {
        Self {
            real_time: self.real_time,
            driving_time: self.driving_time,
            driven_distance: round_to(km_to_miles(self.driven_distance), 2),
            average_speed: round_to(kmh_to_mph(self.average_speed), 1),
            average_consumption_by_time: round_to(
                liters_to_gallons_us(self.average_consumption_by_time),
                5,
            ),
            average_consumption_by_distance: round_to(
                l_per_100km_to_mpg_us(self.average_consumption_by_distance),
                1,
            ),
        }
    }
}

impl TripReport {
    /// Convert a metric report into `units`
    ///
    /// Reports already in `units`, or not metric, are returned unchanged.
    pub fn into_units(self, units: DisplayUnits) -> Self {
        match (self.units, units) {
            (DisplayUnits::Metric, DisplayUnits::Imperial) => Self {
                units,
                actual_speed: round_to(kmh_to_mph(self.actual_speed), 1),
                actual_consumption_by_time: round_to(
                    liters_to_gallons_us(self.actual_consumption_by_time),
                    5,
                ),
                actual_consumption_by_distance: self
                    .actual_consumption_by_distance
                    .map(|c| round_to(l_per_100km_to_mpg_us(c), 1)),
                estimated_range: km_to_miles(self.estimated_range).round(),
                fuel_level: round_to(liters_to_gallons_us(self.fuel_level), 2),
                trip: self.trip.to_imperial(),
                total: self.total.to_imperial(),
            },
            _ => self,
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_period() -> PeriodReport {
        PeriodReport {
            real_time: 120,
            driving_time: 100,
            driven_distance: 10.0,
            average_speed: 100.0,
            average_consumption_by_time: 0.0014,
            average_consumption_by_distance: 5.0,
        }
    }

    fn sample_report() -> TripReport {
        TripReport {
            units: DisplayUnits::Metric,
            actual_speed: 100.0,
            actual_consumption_by_time: 0.0014,
            actual_consumption_by_distance: None,
            estimated_range: 393.0,
            fuel_level: 20.0,
            trip: sample_period(),
            total: sample_period(),
        }
    }

    #[test]
    fn test_imperial_conversion() {
        let report = sample_report().into_units(DisplayUnits::Imperial);

        assert_eq!(report.units, DisplayUnits::Imperial);
        assert_eq!(report.actual_speed, 62.1);
        assert_eq!(report.estimated_range, 244.0);
        assert_eq!(report.fuel_level, 5.28);
        assert_eq!(report.actual_consumption_by_distance, None);
        assert_eq!(report.trip.driven_distance, 6.21);
        assert_eq!(report.trip.average_consumption_by_distance, 47.0);
        assert_eq!(report.trip.real_time, 120);
    }

    #[test]
    fn test_same_units_unchanged() {
        let report = sample_report();
        assert_eq!(report.clone().into_units(DisplayUnits::Metric), report);
    }

    #[test]
    fn test_json_contains_periods() {
        let json = sample_report().to_json().unwrap();
        assert!(json.contains("\"trip\""));
        assert!(json.contains("\"units\": \"metric\""));
    }
}
