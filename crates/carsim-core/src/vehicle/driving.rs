//! Driving processor
//!
//! Integrates the car's speed one simulated second at a time, bounded by the
//! acceleration and braking limits, and reports what that second burned.

use super::consumption::consumption_rate_by_speed;

/// Top speed in km/h
pub const MAX_SPEED: i32 = 250;

/// Lower bound for the configured acceleration (km/h per second)
pub const MIN_ACCELERATION: i32 = 5;

/// Upper bound for the configured acceleration (km/h per second)
pub const MAX_ACCELERATION: i32 = 20;

/// Acceleration used when none is configured (km/h per second)
pub const DEFAULT_ACCELERATION: i32 = 10;

/// Strongest braking per second in km/h
pub const MAX_BRAKING: i32 = 10;

/// What the last simulated second did to the speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriveMode {
    /// No input, speed held
    #[default]
    Steady,
    /// Throttle applied
    Accelerating,
    /// Braking or rolling; fuel is cut off while the wheels still turn
    Coasting,
}

/// Speed control capability used by the on-board computer
pub trait SpeedController {
    /// Current speed truncated to whole km/h
    fn actual_speed(&self) -> u32;

    /// Liters burned during the last simulated second
    fn actual_consumption(&self) -> f64;
}

/// Per-second speed integrator
#[derive(Debug, Clone)]
pub struct DrivingProcessor {
    max_acceleration: i32,
    current_speed: f64,
    mode: DriveMode,
}

impl DrivingProcessor {
    /// Create a processor at standstill
    ///
    /// `max_acceleration` is clamped into
    /// `[MIN_ACCELERATION, MAX_ACCELERATION]`.
    pub fn new(max_acceleration: i32) -> Self {
        Self {
            max_acceleration: max_acceleration.clamp(MIN_ACCELERATION, MAX_ACCELERATION),
            current_speed: 0.0,
            mode: DriveMode::Steady,
        }
    }

    /// Effective acceleration after clamping
    pub fn max_acceleration(&self) -> i32 {
        self.max_acceleration
    }

    /// Exact current speed in km/h
    pub fn current_speed(&self) -> f64 {
        self.current_speed
    }

    /// Mode of the last simulated second
    pub fn mode(&self) -> DriveMode {
        self.mode
    }

    /// Accelerate for one second toward `target` km/h
    ///
    /// Never overshoots the target and never exceeds [`MAX_SPEED`]. A target
    /// below the current speed is taken immediately. At top speed the call
    /// leaves the speed alone whatever the target; the throttle stays open,
    /// so the second still burns the top-speed rate.
    pub fn increase_speed_to(&mut self, target: i32) {
        let target = f64::from(target.clamp(0, MAX_SPEED));
        self.mode = DriveMode::Accelerating;
        if self.current_speed >= f64::from(MAX_SPEED) {
            return;
        }

        let candidate = final_velocity(self.current_speed, f64::from(self.max_acceleration), 1);
        self.current_speed = candidate.min(target);
    }

    /// Brake for one second by `delta` km/h, at most [`MAX_BRAKING`]
    pub fn reduce_speed(&mut self, delta: i32) {
        let delta = f64::from(delta.clamp(0, MAX_BRAKING));
        self.mode = DriveMode::Coasting;

        let candidate = final_velocity(self.current_speed, -delta, 1);
        self.current_speed = candidate.max(0.0);
    }

    /// Spend one second without touching the speed
    pub fn hold_speed(&mut self) {
        self.mode = DriveMode::Steady;
    }

    /// Forget the last second's mode, e.g. after the engine restarts
    pub fn reset_mode(&mut self) {
        self.mode = DriveMode::Steady;
    }
}

impl Default for DrivingProcessor {
    fn default() -> Self {
        Self::new(DEFAULT_ACCELERATION)
    }
}

impl SpeedController for DrivingProcessor {
    fn actual_speed(&self) -> u32 {
        // speed is always within [0, MAX_SPEED]
        self.current_speed.trunc() as u32
    }

    fn actual_consumption(&self) -> f64 {
        let speed = self.actual_speed();
        match self.mode {
            DriveMode::Coasting if speed > 0 => 0.0,
            _ => consumption_rate_by_speed(speed),
        }
    }
}

/// `v = v0 + a * t` in km/h, with `a` in km/h per second
fn final_velocity(initial_kmh: f64, acceleration: f64, seconds: u32) -> f64 {
    initial_kmh + acceleration * f64::from(seconds)
}
