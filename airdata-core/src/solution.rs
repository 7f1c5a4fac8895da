//! One-shot air data evaluation for a sensor frame
//!
//! Flight software usually wants every derived quantity for the same frame
//! of pitot-static readings. [`StandardAtmosphere::solve`] evaluates them all
//! with the same clamp policy as the individual functions, in dependency
//! order:
//!
//! ```text
//! dp ──► IAS
//! dp, sp ──► EAS ──► TAS ◄── t
//! sp ──► pressure altitude ──► AGL ──► MSL
//!                               │
//!                        t ──► OAT
//! sp, t ──► density altitude, air density
//! ```
//!
//! ```rust
//! use airdata_core::{solve, GroundReference, PitotStaticSample};
//!
//! let sample = PitotStaticSample {
//!     diff_pressure_pa: 500.0f32,
//!     static_pressure_pa: 90_000.0,
//!     temperature_c: 10.0,
//! };
//!
//! let air = solve(&sample, &GroundReference::SEA_LEVEL);
//! assert!((air.eas_mps - 28.543).abs() < 0.01);
//! ```

use crate::{atmosphere::StandardAtmosphere, float::AirDataFloat};

/// One frame of raw pitot-static readings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PitotStaticSample<F> {
    /// Differential (impact) pressure (Pa)
    pub diff_pressure_pa: F,
    /// Static pressure (Pa)
    pub static_pressure_pa: F,
    /// Static air temperature (°C)
    pub temperature_c: F,
}

/// Ground reference captured before flight
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroundReference<F> {
    /// Pressure altitude of the field (m), subtracted to get AGL
    pub bias_m: F,
    /// Surveyed MSL elevation of the field (m), added to AGL to get MSL
    pub msl_m: F,
}

impl<F: AirDataFloat> GroundReference<F> {
    /// Field at standard sea level: zero bias, zero elevation
    pub const SEA_LEVEL: Self = Self {
        bias_m: F::ZERO,
        msl_m: F::ZERO,
    };

    /// Capture the bias from a static pressure reading taken on the ground
    pub fn from_ground_pressure(
        atmosphere: &StandardAtmosphere,
        static_pressure_pa: F,
        msl_m: F,
    ) -> Self {
        Self {
            bias_m: atmosphere.pressure_altitude_m(static_pressure_pa),
            msl_m,
        }
    }
}

impl<F: AirDataFloat> Default for GroundReference<F> {
    fn default() -> Self {
        Self::SEA_LEVEL
    }
}

/// Every derived air data quantity for one sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AirDataSolution<F> {
    /// Indicated airspeed (m/s)
    pub ias_mps: F,
    /// Equivalent airspeed (m/s)
    pub eas_mps: F,
    /// True airspeed (m/s)
    pub tas_mps: F,
    /// Pressure altitude (m)
    pub pressure_altitude_m: F,
    /// Density altitude (m)
    pub density_altitude_m: F,
    /// Height above the ground reference (m)
    pub agl_m: F,
    /// Height above mean sea level (m)
    pub msl_m: F,
    /// Air density (kg/m³)
    pub air_density_kgpm3: F,
    /// Outside air temperature extrapolated to AGL height (°C)
    pub oat_c: F,
}

impl StandardAtmosphere {
    /// Evaluate every air data quantity for `sample`
    pub fn solve<F: AirDataFloat>(
        &self,
        sample: &PitotStaticSample<F>,
        ground: &GroundReference<F>,
    ) -> AirDataSolution<F> {
        let dp = sample.diff_pressure_pa;
        let sp = sample.static_pressure_pa;
        let t = sample.temperature_c;

        let eas_mps = self.equivalent_airspeed_mps(dp, sp);
        let pressure_altitude_m = self.pressure_altitude_m(sp);
        let agl_m = pressure_altitude_m - ground.bias_m;

        AirDataSolution {
            ias_mps: self.indicated_airspeed_mps(dp),
            eas_mps,
            tas_mps: self.true_airspeed_mps(eas_mps, t),
            pressure_altitude_m,
            density_altitude_m: self.density_altitude_m(sp, t),
            agl_m,
            msl_m: crate::altitude::msl_altitude_m(agl_m, ground.msl_m),
            air_density_kgpm3: self.air_density_kgpm3(sp, t),
            oat_c: self.estimated_oat_c(t, agl_m),
        }
    }
}

/// Evaluate every air data quantity for `sample`, ISA constants.
///
/// See [`StandardAtmosphere::solve`].
pub fn solve<F: AirDataFloat>(
    sample: &PitotStaticSample<F>,
    ground: &GroundReference<F>,
) -> AirDataSolution<F> {
    StandardAtmosphere::ISA.solve(sample, ground)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        air_density_kgpm3, density_altitude_m, equivalent_airspeed_mps, estimated_oat_c,
        indicated_airspeed_mps, pressure_altitude_m, true_airspeed_mps,
    };

    fn cruise() -> PitotStaticSample<f32> {
        PitotStaticSample {
            diff_pressure_pa: 1_200.0,
            static_pressure_pa: 84_000.0,
            temperature_c: 4.0,
        }
    }

    #[test]
    fn solution_matches_individual_functions() {
        let sample = cruise();
        let ground = GroundReference { bias_m: 300.0, msl_m: 250.0 };
        let air = solve(&sample, &ground);

        let eas = equivalent_airspeed_mps(1_200.0f32, 84_000.0);
        let pa = pressure_altitude_m(84_000.0f32);

        assert_eq!(air.ias_mps, indicated_airspeed_mps(1_200.0f32));
        assert_eq!(air.eas_mps, eas);
        assert_eq!(air.tas_mps, true_airspeed_mps(eas, 4.0));
        assert_eq!(air.pressure_altitude_m, pa);
        assert_eq!(air.density_altitude_m, density_altitude_m(84_000.0f32, 4.0));
        assert_eq!(air.agl_m, pa - 300.0);
        assert_eq!(air.msl_m, pa - 300.0 + 250.0);
        assert_eq!(air.air_density_kgpm3, air_density_kgpm3(84_000.0f32, 4.0));
        assert_eq!(air.oat_c, estimated_oat_c(4.0f32, pa - 300.0));
    }

    #[test]
    fn on_the_ground_reads_zero() {
        let ground = GroundReference::from_ground_pressure(&StandardAtmosphere::ISA, 98_000.0f64, 280.0);
        let sample = PitotStaticSample {
            diff_pressure_pa: -3.0,
            static_pressure_pa: 98_000.0,
            temperature_c: 22.0,
        };

        let air = solve(&sample, &ground);
        assert_eq!(air.ias_mps, 0.0);
        assert_eq!(air.eas_mps, 0.0);
        assert_eq!(air.tas_mps, 0.0);
        assert_eq!(air.agl_m, 0.0);
        assert_eq!(air.msl_m, 280.0);
        assert_eq!(air.oat_c, 22.0);
    }

    #[test]
    fn dead_sensor_frame_stays_finite() {
        let sample = PitotStaticSample {
            diff_pressure_pa: -50.0f32,
            static_pressure_pa: -20.0,
            temperature_c: -400.0,
        };
        let air = solve(&sample, &GroundReference::default());

        assert_eq!(air.eas_mps, 0.0);
        assert_eq!(air.air_density_kgpm3, 0.0);
        assert!(air.pressure_altitude_m.is_finite());
        assert!(air.density_altitude_m.is_finite());
    }
}
