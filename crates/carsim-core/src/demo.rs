//! Demo Mode - Random drive cycle generator
//!
//! Produces plausible driver input for exercising the car without a scripted
//! route: idle at the lights, pull away to a random target speed, cruise,
//! coast, brake back to a stop, and repeat.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::car::{Car, DriveAction};

/// Random driver that reacts to the car's current speed
pub struct DemoDriver {
    /// Current phase of the drive cycle
    phase: DrivePhase,
    /// Random number generator
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DrivePhase {
    /// Standing still with the engine running
    Idle { remaining: u32 },
    /// Pulling away toward the target speed
    PullAway { target: i32 },
    /// Holding the target speed
    Cruise { target: i32, remaining: u32 },
    /// Rolling without throttle
    Coast { remaining: u32 },
    /// Braking until the car stops
    Brake { strength: i32 },
}

impl Default for DemoDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoDriver {
    /// Create a driver with a random seed
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Create a reproducible driver
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let remaining = rng.gen_range(1..5);
        Self {
            phase: DrivePhase::Idle { remaining },
            rng,
        }
    }

    /// Choose the next action for a car currently at `speed` km/h
    pub fn next_action(&mut self, speed: u32) -> DriveAction {
        self.advance_phase(speed);

        match self.phase {
            DrivePhase::Idle { .. } => DriveAction::RunningIdle,
            DrivePhase::PullAway { target } | DrivePhase::Cruise { target, .. } => {
                DriveAction::Accelerate(target)
            }
            DrivePhase::Coast { .. } => DriveAction::FreeWheel,
            DrivePhase::Brake { strength } => DriveAction::BrakeBy(strength),
        }
    }

    /// Drive `car` for `seconds` simulated seconds, starting the engine first
    ///
    /// Stops early if the engine dies. Returns the actions taken.
    pub fn drive(&mut self, car: &mut Car, seconds: u32) -> Vec<DriveAction> {
        let mut actions = vec![DriveAction::EngineStart];
        car.apply(DriveAction::EngineStart);

        for _ in 0..seconds {
            if !car.engine_is_running() {
                break;
            }
            let speed = car.driving_information_display().actual_speed();
            let action = self.next_action(speed);
            car.apply(action);
            actions.push(action);
        }
        actions
    }

    /// Move to the next phase once the current one is done
    fn advance_phase(&mut self, speed: u32) {
        self.phase = match self.phase {
            DrivePhase::Idle { remaining } if remaining > 1 => DrivePhase::Idle {
                remaining: remaining - 1,
            },
            DrivePhase::Idle { .. } => DrivePhase::PullAway {
                target: self.rng.gen_range(3..=13) * 10,
            },
            DrivePhase::PullAway { target } if (speed as i32) < target => {
                DrivePhase::PullAway { target }
            }
            DrivePhase::PullAway { target } => DrivePhase::Cruise {
                target,
                remaining: self.rng.gen_range(10..60),
            },
            DrivePhase::Cruise { target, remaining } if remaining > 1 => DrivePhase::Cruise {
                target,
                remaining: remaining - 1,
            },
            DrivePhase::Cruise { .. } => DrivePhase::Coast {
                remaining: self.rng.gen_range(2..10),
            },
            DrivePhase::Coast { remaining } if remaining > 1 && speed > 0 => DrivePhase::Coast {
                remaining: remaining - 1,
            },
            DrivePhase::Coast { .. } => DrivePhase::Brake {
                strength: self.rng.gen_range(3..=10),
            },
            DrivePhase::Brake { strength } if speed > 0 => DrivePhase::Brake { strength },
            DrivePhase::Brake { .. } => DrivePhase::Idle {
                remaining: self.rng.gen_range(1..8),
            },
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_cycle() {
        let mut first = Car::new();
        let mut second = Car::new();
        let a = DemoDriver::with_seed(7).drive(&mut first, 300);
        let b = DemoDriver::with_seed(7).drive(&mut second, 300);
        assert_eq!(a, b);
    }

    #[test]
    fn test_cycle_starts_with_engine_and_moves() {
        let mut car = Car::new();
        let actions = DemoDriver::with_seed(42).drive(&mut car, 200);

        assert_eq!(actions[0], DriveAction::EngineStart);
        assert_eq!(actions.len(), 201);
        assert!(actions.iter().any(|a| matches!(a, DriveAction::Accelerate(_))));
        assert!(car.on_board_computer_display().total_driving_time() > 0);
    }
}
