//! Air density from the ideal gas law
//!
//! ```text
//! ρ = M · p / (R · T)
//! ```
//!
//! Pressure below 0 Pa is clamped to 0 and the calculation continues. Since
//! the formula is linear in pressure this is the same as returning 0 early,
//! but it keeps one code path. Absolute temperature is clamped to at least
//! 1 K before it is used as a divisor.

use crate::{
    altitude::{clamp_pressure, clamp_temperature},
    atmosphere::StandardAtmosphere,
    float::AirDataFloat,
};

impl StandardAtmosphere {
    /// Air density (kg/m³) from static pressure (Pa) and temperature (°C).
    pub fn air_density_kgpm3<F: AirDataFloat>(&self, static_pressure_pa: F, temperature_c: F) -> F {
        let p = clamp_pressure(static_pressure_pa);
        let t = clamp_temperature(temperature_c);

        let m = F::from_f64(self.molecular_mass_kgpmol());
        let r = F::from_f64(self.gas_constant_jpkgmol());

        m * p / (r * t)
    }
}

/// Air density (kg/m³), ISA constants.
///
/// See [`StandardAtmosphere::air_density_kgpm3`].
pub fn air_density_kgpm3<F: AirDataFloat>(static_pressure_pa: F, temperature_c: F) -> F {
    StandardAtmosphere::ISA.air_density_kgpm3(static_pressure_pa, temperature_c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sea_level_density() {
        assert!((air_density_kgpm3(101_325.0f32, 15.0) - 1.225).abs() < 0.01);
        assert!((air_density_kgpm3(101_325.0f64, 15.0) - 1.224_978).abs() < 1e-5);
    }

    #[test]
    fn non_positive_pressure_is_zero_density() {
        assert_eq!(air_density_kgpm3(0.0f32, 15.0), 0.0);
        assert_eq!(air_density_kgpm3(-1_000.0f32, 15.0), 0.0);
        assert_eq!(air_density_kgpm3(-1.0f64, -300.0), 0.0);
    }

    #[test]
    fn temperature_floor_keeps_result_finite() {
        let rho = air_density_kgpm3(101_325.0f32, -400.0);
        assert!(rho.is_finite());
        assert_eq!(rho, air_density_kgpm3(101_325.0f32, -273.15));
    }

    #[test]
    fn colder_air_is_denser() {
        assert!(air_density_kgpm3(90_000.0f64, -20.0) > air_density_kgpm3(90_000.0f64, 30.0));
    }
}
