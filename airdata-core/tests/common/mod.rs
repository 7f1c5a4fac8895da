//! Shared reference data for integration tests
//!
//! Reference points come from published ISA tables and from the reference
//! values the air data library has always been checked against.

#![allow(dead_code)]

pub mod scenarios;

/// Absolute tolerance check with a readable failure message
#[track_caller]
pub fn assert_near(actual: f64, expected: f64, tolerance: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{what}: expected {expected} ± {tolerance}, got {actual}"
    );
}

/// Same as [`assert_near`] for single precision results
#[track_caller]
pub fn assert_near_f32(actual: f32, expected: f64, tolerance: f64, what: &str) {
    assert_near(actual as f64, expected, tolerance, what);
}
