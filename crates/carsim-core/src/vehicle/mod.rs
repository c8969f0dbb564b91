//! Vehicle Model
//!
//! The physical side of the car: fuel tank, engine and the driving processor
//! that turns pedal input into speed and fuel burn.

mod consumption;
mod driving;
mod engine;
mod fuel_tank;

pub use consumption::{consumption_rate_by_speed, IDLE_CONSUMPTION_RATE};
pub use driving::{
    DriveMode, DrivingProcessor, SpeedController, DEFAULT_ACCELERATION, MAX_ACCELERATION,
    MAX_BRAKING, MAX_SPEED, MIN_ACCELERATION,
};
pub use engine::Engine;
pub use fuel_tank::{
    FuelSource, FuelTank, DEFAULT_FUEL_LEVEL, MAXIMUM_FUEL_LEVEL, RESERVE_FUEL_LEVEL,
};
