//! Constants for the Air Data Model
//!
//! Centralized, documented constants used by every formula in the crate.
//! Use these instead of magic numbers.
//!
//! ## Organization
//!
//! - **Atmosphere**: ISA sea level reference values and gas properties
//! - **Limits**: input floors that implement the clamp policy

/// ISA standard day constants for the troposphere.
pub mod atmosphere;

/// Input floors used when clamping physically invalid readings.
pub mod limits;

// Re-export commonly used constants for convenience
pub use atmosphere::{
    SEA_LEVEL_SPEED_OF_SOUND_MPS, SEA_LEVEL_PRESSURE_PA,
    SEA_LEVEL_TEMPERATURE_C, SEA_LEVEL_TEMPERATURE_K,
    LAPSE_RATE_KPM, GAS_CONSTANT_JPKGMOL, LEGACY_GAS_CONSTANT_JPKGMOL,
    MOLECULAR_MASS_AIR_KGPMOL, GRAVITY_MPS2, KELVIN_OFFSET,
};

pub use limits::{
    MIN_STATIC_PRESSURE_PA, MIN_TEMPERATURE_K, MIN_PRESSURE_PA,
    ZERO_AIRSPEED_MPS,
};
