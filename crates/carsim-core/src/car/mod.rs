//! Car
//!
//! The vehicle façade. Owns the fuel tank, engine, driving processor and
//! on-board computer and wires them together. Every driving action is one
//! simulated second: speed update, then fuel burn, then the computer's tick.
//!
//! ## Example
//!
//! ```rust
//! use carsim_core::car::Car;
//!
//! let mut car = Car::new();
//! car.engine_start();
//! car.accelerate(30);
//! car.accelerate(30);
//!
//! let display = car.on_board_computer_display();
//! assert_eq!(display.trip_real_time(), 3);
//! assert_eq!(display.trip_average_speed(), 15.0);
//! ```

mod action;
mod display;

pub use action::DriveAction;
pub use display::{DrivingInformationDisplay, FuelTankDisplay};

use tracing::{debug, info, warn};

use crate::computer::{ConsumptionWindow, OnBoardComputer, OnBoardComputerDisplay, TripReport};
use crate::config::{CarConfig, DisplayUnits};
use crate::vehicle::{
    DrivingProcessor, Engine, FuelSource, FuelTank, SpeedController, DEFAULT_ACCELERATION,
    DEFAULT_FUEL_LEVEL,
};

/// A drivable car with trip computer
#[derive(Debug, Clone)]
pub struct Car {
    fuel_tank: FuelTank,
    engine: Engine,
    driving_processor: DrivingProcessor,
    on_board_computer: OnBoardComputer,
    units: DisplayUnits,
}

impl Car {
    /// Stock car: 20 liters, acceleration 10 km/h/s
    pub fn new() -> Self {
        Self::with_fuel_and_acceleration(DEFAULT_FUEL_LEVEL, DEFAULT_ACCELERATION)
    }

    /// Stock car with a custom initial fuel level
    pub fn with_fuel(fuel_level: f64) -> Self {
        Self::with_fuel_and_acceleration(fuel_level, DEFAULT_ACCELERATION)
    }

    /// Car with a custom fuel level and acceleration; both are clamped
    pub fn with_fuel_and_acceleration(fuel_level: f64, max_acceleration: i32) -> Self {
        Self::from_config(&CarConfig {
            fuel_level,
            max_acceleration,
            ..CarConfig::default()
        })
    }

    /// Build a car from its configuration
    pub fn from_config(config: &CarConfig) -> Self {
        let fuel_tank = FuelTank::new(config.fuel_level);
        let on_board_computer = OnBoardComputer::with_range_window(
            fuel_tank.fill_level(),
            ConsumptionWindow::new(config.range_window_secs),
        );
        Self {
            fuel_tank,
            engine: Engine::new(),
            driving_processor: DrivingProcessor::new(config.max_acceleration),
            on_board_computer,
            units: config.units,
        }
    }

    /// True while the engine runs
    pub fn engine_is_running(&self) -> bool {
        self.engine.is_running()
    }

    /// Start the engine; a start on an empty tank does nothing
    pub fn engine_start(&mut self) {
        if self.engine.is_running() {
            return;
        }
        self.engine.start(&self.fuel_tank);
        if !self.engine.is_running() {
            warn!("engine start refused: tank is empty");
            return;
        }
        info!(fuel_level = self.fuel_tank.fill_level(), "engine started");
        self.driving_processor.reset_mode();
        self.on_board_computer.on_engine_start(&self.fuel_tank);
    }

    /// Stop the engine; the car keeps its speed
    pub fn engine_stop(&mut self) {
        if !self.engine.is_running() {
            return;
        }
        self.engine.stop();
        self.on_board_computer.on_engine_stop();
        info!(speed = self.driving_processor.actual_speed(), "engine stopped");
    }

    /// Accelerate for one second toward `speed` km/h
    pub fn accelerate(&mut self, speed: i32) {
        if !self.engine.is_running() {
            return;
        }
        self.driving_processor.increase_speed_to(speed);
        self.finish_second();
    }

    /// Brake for one second by `speed` km/h (at most 10)
    pub fn brake_by(&mut self, speed: i32) {
        if !self.engine.is_running() {
            return;
        }
        self.driving_processor.reduce_speed(speed);
        self.finish_second();
    }

    /// Roll for one second, losing 1 km/h; idles at standstill
    pub fn free_wheel(&mut self) {
        if self.driving_processor.actual_speed() == 0 {
            self.running_idle();
        } else {
            self.brake_by(1);
        }
    }

    /// Idle for one second; rolls if the car is still moving
    pub fn running_idle(&mut self) {
        if !self.engine.is_running() {
            return;
        }
        if self.driving_processor.actual_speed() > 0 {
            self.brake_by(1);
            return;
        }
        self.driving_processor.hold_speed();
        self.finish_second();
    }

    /// Add fuel to the tank
    pub fn refuel(&mut self, liters: f64) {
        let added = self.fuel_tank.refuel(liters);
        if added > 0.0 {
            self.on_board_computer.on_refuel(added);
        }
        debug!(added, fuel_level = self.fuel_tank.fill_level(), "refuel");
    }

    /// Start a new trip; totals are kept
    pub fn trip_reset(&mut self) {
        self.on_board_computer.trip_reset(&self.fuel_tank);
    }

    /// Clear the total counters and the range history; the trip is kept
    pub fn total_reset(&mut self) {
        self.on_board_computer.total_reset(&self.fuel_tank);
    }

    /// Perform a single driver action
    pub fn apply(&mut self, action: DriveAction) {
        match action {
            DriveAction::EngineStart => self.engine_start(),
            DriveAction::EngineStop => self.engine_stop(),
            DriveAction::Accelerate(speed) => self.accelerate(speed),
            DriveAction::BrakeBy(speed) => self.brake_by(speed),
            DriveAction::FreeWheel => self.free_wheel(),
            DriveAction::RunningIdle => self.running_idle(),
            DriveAction::Refuel(liters) => self.refuel(liters),
            DriveAction::TripReset => self.trip_reset(),
            DriveAction::TotalReset => self.total_reset(),
        }
    }

    /// Perform actions in order
    pub fn run<'a>(&mut self, actions: impl IntoIterator<Item = &'a DriveAction>) {
        for action in actions {
            self.apply(*action);
        }
    }

    /// Fuel gauge view
    pub fn fuel_tank_display(&self) -> FuelTankDisplay<'_> {
        FuelTankDisplay::new(&self.fuel_tank)
    }

    /// Speedometer view
    pub fn driving_information_display(&self) -> DrivingInformationDisplay<'_, DrivingProcessor> {
        DrivingInformationDisplay::new(&self.driving_processor)
    }

    /// Trip computer view
    pub fn on_board_computer_display(
        &self,
    ) -> OnBoardComputerDisplay<'_, FuelTank, DrivingProcessor> {
        OnBoardComputerDisplay::new(
            &self.on_board_computer,
            &self.fuel_tank,
            &self.driving_processor,
        )
    }

    /// Snapshot of the display in the configured units
    pub fn report(&self) -> TripReport {
        self.on_board_computer_display().report(self.units)
    }

    /// Burn the second's fuel and tick the computer
    fn finish_second(&mut self) {
        let liters = self.driving_processor.actual_consumption();
        self.engine.consume(&mut self.fuel_tank, liters);
        self.on_board_computer.elapse_second(&self.driving_processor);

        if self.fuel_tank.is_empty() {
            warn!("tank ran dry, engine stopped");
            self.engine.stop();
            self.on_board_computer.on_engine_stop();
        }
    }
}

impl Default for Car {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_ignored_with_engine_off() {
        let mut car = Car::new();
        car.accelerate(30);
        car.brake_by(10);
        car.running_idle();
        car.free_wheel();

        let display = car.on_board_computer_display();
        assert_eq!(display.total_real_time(), 0);
        assert_eq!(car.driving_information_display().actual_speed(), 0);
        assert_eq!(car.fuel_tank_display().fill_level(), 20.0);
    }

    #[test]
    fn test_engine_refuses_empty_tank() {
        let mut car = Car::with_fuel(0.0);
        car.engine_start();
        assert!(!car.engine_is_running());
        assert_eq!(car.on_board_computer_display().total_real_time(), 0);
    }

    #[test]
    fn test_second_start_is_ignored() {
        let mut car = Car::new();
        car.engine_start();
        car.engine_start();
        assert_eq!(car.on_board_computer_display().total_real_time(), 1);
    }

    #[test]
    fn test_engine_stops_when_tank_runs_dry() {
        let mut car = Car::with_fuel(0.0005);
        car.engine_start();
        car.running_idle();
        assert!(car.engine_is_running());
        car.running_idle();
        assert!(!car.engine_is_running());
        assert_eq!(car.fuel_tank_display().fill_level(), 0.0);
    }

    #[test]
    fn test_idle_while_moving_rolls() {
        let mut car = Car::new();
        car.engine_start();
        car.accelerate(30);
        car.running_idle();
        assert_eq!(car.driving_information_display().actual_speed(), 9);
    }

    #[test]
    fn test_free_wheel_at_standstill_idles() {
        let mut car = Car::new();
        car.engine_start();
        car.free_wheel();
        let display = car.on_board_computer_display();
        assert_eq!(display.actual_consumption_by_time(), 0.0003);
        assert_eq!(display.trip_real_time(), 2);
    }
}
