//! Input Floors for the Clamp Policy
//!
//! Every formula in this crate returns a number for every input. These
//! floors define where an input stops being used as-is and is either clamped
//! or mapped to a zero result.

/// Smallest static pressure accepted by the equivalent airspeed relation (Pa).
///
/// `dp / sp` is evaluated inside the compressible flow term, so static
/// pressure below this floor yields an equivalent airspeed of zero instead of
/// an unbounded ratio.
pub const MIN_STATIC_PRESSURE_PA: f64 = 0.1;

/// Floor applied to absolute temperature before it is used as a divisor (K).
///
/// Density altitude and air density both divide by absolute temperature.
pub const MIN_TEMPERATURE_K: f64 = 1.0;

/// Floor applied to pressures before they enter a power law (Pa).
///
/// A negative base to a fractional power has no real result.
pub const MIN_PRESSURE_PA: f64 = 0.0;

/// Airspeed returned for inputs outside the physical domain (m/s).
pub const ZERO_AIRSPEED_MPS: f64 = 0.0;
