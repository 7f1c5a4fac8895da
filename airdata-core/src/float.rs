//! Working precision for the air data formulas
//!
//! Flight controllers with a single-precision FPU run the model in `f32`;
//! ground tools and log replay usually want `f64`. Every formula is written
//! once against [`AirDataFloat`] and instantiated for both.
//!
//! ## Why libm?
//!
//! `powf` and `sqrt` on `f32`/`f64` are not available in `core`. We route
//! both through `libm` in every configuration, which keeps the crate `no_std`
//! and gives bit-identical results on host and target for the same input.

use core::ops::{Add, Div, Mul, Neg, Sub};

/// Scalar type the air data model can be evaluated in
pub trait AirDataFloat:
    Copy
    + PartialOrd
    + core::fmt::Debug
    + core::fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity
    const ZERO: Self;

    /// Multiplicative identity
    const ONE: Self;

    /// Narrow (or pass through) a constant stored as `f64`
    fn from_f64(value: f64) -> Self;

    /// Widen to `f64` for logging and configuration checks
    fn to_f64(self) -> f64;

    /// `self` raised to a real power
    fn pow(self, exponent: Self) -> Self;

    /// Square root
    fn sqrt(self) -> Self;

    /// `floor` when `self` is below it, `self` otherwise.
    ///
    /// NaN is never below anything, so it passes through unchanged.
    #[inline]
    fn at_least(self, floor: Self) -> Self {
        if self < floor {
            floor
        } else {
            self
        }
    }
}

impl AirDataFloat for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn pow(self, exponent: Self) -> Self {
        libm::powf(self, exponent)
    }

    #[inline]
    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }
}

impl AirDataFloat for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn pow(self, exponent: Self) -> Self {
        libm::pow(self, exponent)
    }

    #[inline]
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_least_clamps_below_floor() {
        assert_eq!((-5.0f32).at_least(0.0), 0.0);
        assert_eq!(3.0f32.at_least(0.0), 3.0);
        assert_eq!(1.0f64.at_least(1.0), 1.0);
    }

    #[test]
    fn at_least_passes_nan_through() {
        assert!(f32::NAN.at_least(0.0).is_nan());
        assert!(f64::NAN.at_least(1.0).is_nan());
    }

    #[test]
    fn narrowing_matches_cast() {
        assert_eq!(<f32 as AirDataFloat>::from_f64(288.15), 288.15f32);
        assert_eq!(<f64 as AirDataFloat>::from_f64(288.15), 288.15f64);
    }

    #[test]
    fn libm_backed_math() {
        assert_eq!(AirDataFloat::sqrt(16.0f32), 4.0);
        assert_eq!(AirDataFloat::pow(2.0f64, 10.0), 1024.0);
        // Exact at the pressure altitude reference point
        assert_eq!(AirDataFloat::pow(1.0f32, 0.190_263), 1.0);
        assert_eq!(AirDataFloat::pow(0.0f32, 0.190_263), 0.0);
    }
}
