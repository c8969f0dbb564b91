//! # CarSim Core Library
//!
//! Core functionality for the CarSim driving simulation.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - Fuel tank and engine model
//! - Driving processor integrating speed one second at a time
//! - On-board computer with trip and total statistics
//! - Car configuration and drive scripts (JSON)
//! - Demo mode with random drive cycles
//!
//! ## Example
//!
//! ```rust
//! use carsim_core::prelude::*;
//!
//! let mut car = Car::with_fuel_and_acceleration(40.0, 20);
//! car.engine_start();
//! for _ in 0..5 {
//!     car.accelerate(100);
//! }
//!
//! let display = car.on_board_computer_display();
//! assert_eq!(display.actual_consumption_by_time(), 0.0014);
//! assert_eq!(display.actual_consumption_by_distance(), 5.0);
//! ```

pub mod car;
pub mod computer;
pub mod config;
pub mod demo;
pub mod error;
pub mod unit_conversion;
pub mod vehicle;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::car::{Car, DriveAction};
    pub use crate::computer::{OnBoardComputer, OnBoardComputerDisplay, Period, TripReport};
    pub use crate::config::{CarConfig, DisplayUnits};
    pub use crate::demo::DemoDriver;
    pub use crate::error::ConfigError;
    pub use crate::vehicle::{DrivingProcessor, Engine, FuelSource, FuelTank, SpeedController};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
