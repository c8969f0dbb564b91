//! Invariants of the trip computer over random drive cycles

use carsim_core::prelude::*;
use carsim_core::vehicle::MAX_SPEED;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn random_action(rng: &mut StdRng) -> DriveAction {
    match rng.gen_range(0..100) {
        0 => DriveAction::EngineStop,
        1..=3 => DriveAction::EngineStart,
        4 => DriveAction::TripReset,
        5 => DriveAction::Refuel(rng.gen_range(0.0..5.0)),
        6..=40 => DriveAction::Accelerate(rng.gen_range(-20..300)),
        41..=65 => DriveAction::BrakeBy(rng.gen_range(-5..20)),
        66..=80 => DriveAction::FreeWheel,
        _ => DriveAction::RunningIdle,
    }
}

#[test]
fn test_driving_time_never_exceeds_real_time() {
    init_tracing();
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut car = Car::new();
        car.engine_start();

        for _ in 0..500 {
            car.apply(random_action(&mut rng));
            let display = car.on_board_computer_display();
            assert!(display.trip_driving_time() <= display.trip_real_time());
            assert!(display.total_driving_time() <= display.total_real_time());
        }
    }
}

#[test]
fn test_total_real_time_is_monotonic() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(99);
    let mut car = Car::new();
    let mut last = 0;

    for _ in 0..1000 {
        car.apply(random_action(&mut rng));
        let now = car.on_board_computer_display().total_real_time();
        assert!(now >= last, "total real time went from {} to {}", last, now);
        last = now;
    }

    car.total_reset();
    assert_eq!(car.on_board_computer_display().total_real_time(), 0);
}

#[test]
fn test_distance_is_monotonic_within_period() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut car = Car::with_fuel(60.0);
    car.engine_start();
    let mut last = 0.0;

    for _ in 0..800 {
        let action = match random_action(&mut rng) {
            DriveAction::TripReset => DriveAction::RunningIdle,
            other => other,
        };
        car.apply(action);
        let distance = car.on_board_computer_display().total_driven_distance();
        assert!(distance >= last);
        last = distance;
    }
}

#[test]
fn test_trip_reset_keeps_total_average_speed() {
    let mut car = Car::new();
    let mut driver = DemoDriver::with_seed(3);
    driver.drive(&mut car, 120);

    let before = car.on_board_computer_display().total_average_speed();
    car.trip_reset();

    let display = car.on_board_computer_display();
    assert_eq!(display.trip_real_time(), 0);
    assert_eq!(display.trip_average_speed(), 0.0);
    assert_eq!(display.total_average_speed(), before);
}

#[test]
fn test_speed_stays_within_limits() {
    let mut processor = DrivingProcessor::new(20);
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..1000 {
        let target = rng.gen_range(-50..400);
        let was_at_max = processor.actual_speed() >= MAX_SPEED as u32;
        processor.increase_speed_to(target);
        if !was_at_max {
            assert!(processor.actual_speed() <= target.clamp(0, MAX_SPEED) as u32);
        }
        assert!(processor.actual_speed() <= MAX_SPEED as u32);

        processor.reduce_speed(rng.gen_range(-10..30));
        assert!(processor.current_speed() >= 0.0);
    }
}

#[test]
fn test_top_speed_held_against_lower_target() {
    let mut car = Car::with_fuel_and_acceleration(60.0, 20);
    car.engine_start();
    for _ in 0..13 {
        car.accelerate(MAX_SPEED);
    }
    assert_eq!(car.driving_information_display().actual_speed(), 250);

    car.accelerate(100);
    let display = car.on_board_computer_display();
    assert_eq!(display.actual_speed(), 250);
    assert_eq!(display.actual_consumption_by_time(), 0.003);
}

#[test]
fn test_averages_are_always_defined() {
    let mut rng = StdRng::seed_from_u64(1234);
    let mut car = Car::new();

    for _ in 0..600 {
        car.apply(random_action(&mut rng));
        let display = car.on_board_computer_display();
        assert!(display.trip_average_speed().is_finite());
        assert!(display.total_average_consumption_by_time().is_finite());
        assert!(display.total_average_consumption_by_distance().is_finite());
        assert!(display.actual_consumption_by_time().is_finite());
    }
}

#[test]
fn test_report_matches_display() {
    let mut car = Car::new();
    DemoDriver::with_seed(21).drive(&mut car, 180);

    let report = car.report();
    let display = car.on_board_computer_display();

    assert_eq!(report.units, DisplayUnits::Metric);
    assert_eq!(report.trip.real_time, display.trip_real_time());
    assert_eq!(report.total.driven_distance, display.total_driven_distance());
    assert_eq!(report.estimated_range, f64::from(display.estimated_range()));
    assert_eq!(report.actual_speed, f64::from(display.actual_speed()));
}
