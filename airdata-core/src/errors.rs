//! Error Types for Atmosphere Configuration
//!
//! ## Where errors can occur
//!
//! The air data formulas themselves never fail. A flight computer calling them
//! at 100+ Hz needs a number back for every input, so physically invalid
//! readings are clamped or mapped to zero instead (see each function's docs).
//!
//! The only fallible operation is assembling a custom constant set with
//! [`AtmosphereBuilder`](crate::atmosphere::AtmosphereBuilder). A bad constant
//! there would silently poison every later result, so it is rejected once, up
//! front, at configuration time.
//!
//! ## Embedded constraints
//!
//! Errors follow the same rules as the rest of the crate:
//!
//! 1. **No Heap Allocation**: only `&'static str` for names.
//! 2. **Copy Semantics**: cheap to return and to store.
//!
//! ```rust
//! use airdata_core::{AirDataError, StandardAtmosphere};
//!
//! let result = StandardAtmosphere::builder()
//!     .lapse_rate_kpm(-0.0065)
//!     .build();
//!
//! match result {
//!     Ok(_) => {}
//!     Err(AirDataError::InvalidConstant { name, .. }) => assert_eq!(name, "lapse_rate_kpm"),
//!     Err(AirDataError::DegenerateExponent { .. }) => unreachable!(),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for configuration operations
pub type AirDataResult<T> = Result<T, AirDataError>;

/// Configuration errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AirDataError {
    /// A physical constant is not finite or not strictly positive
    #[error("Constant {name} = {value} must be finite and positive")]
    InvalidConstant {
        /// Name of the rejected constant, matching its builder setter
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// `M·G − L·R` is not positive, so the density altitude exponent is undefined
    #[error("Density altitude exponent undefined: M*G - L*R = {denominator}")]
    DegenerateExponent {
        /// The computed value of `M·G − L·R`
        denominator: f64,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for AirDataError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidConstant { name, value } =>
                defmt::write!(fmt, "Constant {} = {} invalid", name, value),
            Self::DegenerateExponent { denominator } =>
                defmt::write!(fmt, "Degenerate exponent, M*G - L*R = {}", denominator),
        }
    }
}
