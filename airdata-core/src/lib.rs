//! Air data computations for flight controllers
//!
//! Converts raw pitot-static readings (differential pressure, static
//! pressure, static air temperature) into airspeed, altitude and density
//! using the ICAO standard atmosphere, troposphere layer only.
//!
//! Key constraints:
//! - No heap allocation, no I/O, no state beyond physical constants
//! - Every function returns a number for every input; invalid readings are
//!   clamped or mapped to zero, never reported as errors
//! - Generic over `f32` and `f64` through [`AirDataFloat`]
//!
//! ```
//! use airdata_core::{indicated_airspeed_mps, pressure_altitude_m, true_airspeed_mps};
//!
//! let ias = indicated_airspeed_mps(500.0f32);          // ≈ 28.55 m/s
//! let tas = true_airspeed_mps(ias, 10.0);              // 10 °C outside
//! let altitude = pressure_altitude_m(101_325.0f32);    // ≈ 0 m
//!
//! assert!(tas < ias);
//! assert!(altitude.abs() < 1e-3);
//! ```
//!
//! The free functions use [`StandardAtmosphere::ISA`]. For another constant
//! set call the same-named methods on a [`StandardAtmosphere`].

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

mod logging;

pub mod airspeed;
pub mod altitude;
pub mod atmosphere;
pub mod constants;
pub mod density;
pub mod errors;
pub mod float;
pub mod solution;
pub mod temperature;

// Public API
pub use airspeed::{equivalent_airspeed_mps, indicated_airspeed_mps, true_airspeed_mps};
pub use altitude::{agl_altitude_m, density_altitude_m, msl_altitude_m, pressure_altitude_m};
pub use atmosphere::{AtmosphereBuilder, StandardAtmosphere};
pub use density::air_density_kgpm3;
pub use errors::{AirDataError, AirDataResult};
pub use float::AirDataFloat;
pub use solution::{solve, AirDataSolution, GroundReference, PitotStaticSample};
pub use temperature::{celsius_to_kelvin, estimated_oat_c, kelvin_to_celsius};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
