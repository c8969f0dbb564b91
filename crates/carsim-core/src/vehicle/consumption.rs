//! Fuel consumption rates
//!
//! Maps the current speed band to the liters burned per simulated second.

/// Liters per second while the engine runs at standstill
pub const IDLE_CONSUMPTION_RATE: f64 = 0.0003;

/// Liters burned per second at the given integer speed (km/h)
///
/// | speed (km/h) | rate (L/s) |
/// |---|---|
/// | < 1 | 0.0003 |
/// | 1..=60 | 0.0020 |
/// | 61..=100 | 0.0014 |
/// | 101..=140 | 0.0020 |
/// | 141..=200 | 0.0025 |
/// | >= 201 | 0.0030 |
pub fn consumption_rate_by_speed(speed: u32) -> f64 {
    match speed {
        0 => IDLE_CONSUMPTION_RATE,
        1..=60 => 0.0020,
        61..=100 => 0.0014,
        101..=140 => 0.0020,
        141..=200 => 0.0025,
        _ => 0.0030,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_rate() {
        assert_eq!(consumption_rate_by_speed(0), IDLE_CONSUMPTION_RATE);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(consumption_rate_by_speed(1), 0.0020);
        assert_eq!(consumption_rate_by_speed(60), 0.0020);
        assert_eq!(consumption_rate_by_speed(61), 0.0014);
        assert_eq!(consumption_rate_by_speed(100), 0.0014);
        assert_eq!(consumption_rate_by_speed(101), 0.0020);
        assert_eq!(consumption_rate_by_speed(140), 0.0020);
        assert_eq!(consumption_rate_by_speed(141), 0.0025);
        assert_eq!(consumption_rate_by_speed(200), 0.0025);
        assert_eq!(consumption_rate_by_speed(201), 0.0030);
        assert_eq!(consumption_rate_by_speed(250), 0.0030);
    }
}
