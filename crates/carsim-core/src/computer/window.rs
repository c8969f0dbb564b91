//! Rolling consumption window
//!
//! Keeps the fuel burned and distance driven over the most recent seconds so
//! the range estimate follows the current driving style.

use std::collections::VecDeque;

use crate::unit_conversion::distance_units_to_km;

/// Seconds covered by the range estimate
pub const DEFAULT_RANGE_WINDOW_SECS: usize = 100;

/// Longest window accepted; larger configured values are capped
pub const MAX_RANGE_WINDOW_SECS: usize = 3600;

#[derive(Debug, Clone, Copy, PartialEq)]
struct WindowEntry {
    liters: f64,
    distance_units: u64,
}

/// Fixed-length history of per-second fuel burn and distance
#[derive(Debug, Clone)]
pub struct ConsumptionWindow {
    capacity: usize,
    entries: VecDeque<WindowEntry>,
    liters: f64,
    distance_units: u64,
    burning_seconds: usize,
}

impl ConsumptionWindow {
    /// Create a window over `capacity` seconds, clamped to
    /// `[1, MAX_RANGE_WINDOW_SECS]`
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, MAX_RANGE_WINDOW_SECS);
        Self {
            capacity,
            entries: VecDeque::new(),
            liters: 0.0,
            distance_units: 0,
            burning_seconds: 0,
        }
    }

    /// Record one elapsed second
    pub fn push(&mut self, liters: f64, distance_units: u64) {
        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.entries.pop_front() {
                self.liters -= oldest.liters;
                self.distance_units -= oldest.distance_units;
                if oldest.liters > 0.0 {
                    self.burning_seconds -= 1;
                }
            }
        }
        self.entries.push_back(WindowEntry {
            liters,
            distance_units,
        });
        self.liters += liters;
        self.distance_units += distance_units;
        if liters > 0.0 {
            self.burning_seconds += 1;
        }
        // running float sum must not leave residue once no burning second remains
        if self.burning_seconds == 0 {
            self.liters = 0.0;
        }
    }

    /// Drop every recorded second
    pub fn clear(&mut self) {
        self.entries.clear();
        self.liters = 0.0;
        self.distance_units = 0;
        self.burning_seconds = 0;
    }

    /// Seconds currently recorded
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True before the first second is recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Seconds the window can hold
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Fuel burned inside the window
    pub fn liters(&self) -> f64 {
        self.liters
    }

    /// Distance driven inside the window in km
    pub fn distance_km(&self) -> f64 {
        distance_units_to_km(self.distance_units)
    }

    /// Kilometers per liter inside the window
    ///
    /// `None` while the window holds no distance or no burned fuel.
    pub fn km_per_liter(&self) -> Option<f64> {
        if self.distance_units == 0 || self.liters <= 0.0 {
            return None;
        }
        Some(self.distance_km() / self.liters)
    }
}

impl Default for ConsumptionWindow {
    fn default() -> Self {
        Self::new(DEFAULT_RANGE_WINDOW_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_drops_oldest() {
        let mut window = ConsumptionWindow::new(3);
        window.push(1.0, 10);
        window.push(2.0, 20);
        window.push(3.0, 30);
        window.push(4.0, 40);

        assert_eq!(window.len(), 3);
        assert_eq!(window.liters(), 9.0);
        assert_eq!(window.distance_km(), 90.0 / 3600.0);
    }

    #[test]
    fn test_capacity_is_bounded() {
        assert_eq!(ConsumptionWindow::new(0).capacity(), 1);
        assert_eq!(ConsumptionWindow::new(250).capacity(), 250);
        assert_eq!(
            ConsumptionWindow::new(usize::MAX).capacity(),
            MAX_RANGE_WINDOW_SECS
        );
    }

    #[test]
    fn test_fuel_free_window_has_no_rate() {
        let mut window = ConsumptionWindow::new(2);
        window.push(0.0014, 100);
        window.push(0.0, 99);
        window.push(0.0, 98);

        assert_eq!(window.liters(), 0.0);
        assert_eq!(window.km_per_liter(), None);
    }

    #[test]
    fn test_rate_needs_distance_and_fuel() {
        let mut window = ConsumptionWindow::default();
        assert_eq!(window.km_per_liter(), None);

        window.push(0.0003, 0);
        assert_eq!(window.km_per_liter(), None);

        window.push(0.0, 3600);
        assert_eq!(window.km_per_liter(), Some(1.0 / 0.0003));

        window.clear();
        assert!(window.is_empty());
    }
}
