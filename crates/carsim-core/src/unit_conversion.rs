//! Unit Conversion Functions
//!
//! Provides conversion and rounding helpers for the trip computer:
//! - Display rounding to a fixed number of decimals
//! - Distance: fixed-point distance units ↔ km, km ↔ miles
//! - Speed: km/h ↔ mph
//! - Volume: Liters ↔ US Gallons
//! - Consumption: L/100km ↔ US mpg

/// Fixed-point distance units per kilometer
///
/// One unit is the distance covered by holding 1 km/h for one second, so a
/// second at `v` km/h adds exactly `v` units.
pub const DISTANCE_UNITS_PER_KM: u64 = 3600;

/// Round half away from zero to `decimals` places
///
/// NaN and infinities are passed through unchanged.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Convert fixed-point distance units to kilometers
pub fn distance_units_to_km(units: u64) -> f64 {
    units as f64 / DISTANCE_UNITS_PER_KM as f64
}

/// Convert km/h to mph
pub fn kmh_to_mph(kmh: f64) -> f64 {
    kmh * 0.62137119223733
}

/// Convert mph to km/h
pub fn mph_to_kmh(mph: f64) -> f64 {
    mph / 0.62137119223733
}

/// Convert kilometers to miles
pub fn km_to_miles(km: f64) -> f64 {
    km * 0.62137119223733
}

/// Convert Liters to US Gallons
pub fn liters_to_gallons_us(liters: f64) -> f64 {
    liters * 0.26417205235815
}

/// Convert US Gallons to Liters
pub fn gallons_us_to_liters(gallons: f64) -> f64 {
    gallons / 0.26417205235815
}

/// Convert L/100km to US miles per gallon
///
/// Zero consumption maps to 0 mpg; NaN stays NaN.
pub fn l_per_100km_to_mpg_us(l_per_100km: f64) -> f64 {
    if l_per_100km.is_nan() {
        return f64::NAN;
    }
    if l_per_100km <= 0.0 {
        return 0.0;
    }
    235.214583 / l_per_100km
}
