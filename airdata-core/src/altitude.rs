//! Pressure and density altitude in the ISA troposphere
//!
//! ## Physics Background
//!
//! Combining the hydrostatic equation, the ideal gas law and a linear
//! temperature profile `T = T₀ − L·h` and integrating gives the barometric
//! formula. Solved for height:
//!
//! ```text
//! Hydrostatic equation: dP/dh = −ρg
//! Ideal gas law:        P = ρRT/M
//!
//! Pressure altitude:  h_p = T₀/L · (1 − (p/p₀)^(L·R / (M·g)))
//! Density altitude:   h_ρ = T₀/L · (1 − (p/p₀ · T₀/T)^(L·R / (M·g − L·R)))
//! ```
//!
//! Pressure altitude is what an altimeter set to 1013.25 hPa reads. Density
//! altitude is the ISA height with the same air density as the current
//! pressure and temperature; it drives engine and wing performance.
//!
//! ## Domain Policy
//!
//! Both clamp and continue rather than returning early:
//! - static pressure below 0 Pa is clamped to 0 (a negative base to a
//!   fractional power has no real result)
//! - absolute temperature below 1 K is clamped to 1 K (it is a divisor)
//!
//! At 0 Pa pressure altitude evaluates to `T₀/L` ≈ 44330.77 m, the height at
//! which the linear lapse model reaches 0 K. Values above 11 km are outside
//! the troposphere and only as good as the single-layer model.
//!
//! ## AGL and MSL
//!
//! The flight software captures the pressure altitude of the field at
//! power-up as a bias. Height above ground is then pressure altitude minus
//! that bias, and MSL is AGL plus the surveyed field elevation.

use crate::{
    atmosphere::StandardAtmosphere,
    constants::limits::{MIN_PRESSURE_PA, MIN_TEMPERATURE_K},
    float::AirDataFloat,
    logging::log_trace,
    temperature::celsius_to_kelvin,
};

impl StandardAtmosphere {
    /// Pressure altitude (m) from static pressure (Pa).
    ///
    /// Negative pressure is clamped to 0 Pa.
    pub fn pressure_altitude_m<F: AirDataFloat>(&self, static_pressure_pa: F) -> F {
        let p = clamp_pressure(static_pressure_pa);

        let t0 = F::from_f64(self.sea_level_temperature_k());
        let lapse = F::from_f64(self.lapse_rate_kpm());
        let p0 = F::from_f64(self.sea_level_pressure_pa());
        let exponent = F::from_f64(self.pressure_altitude_exponent());

        t0 / lapse * (F::ONE - (p / p0).pow(exponent))
    }

    /// Density altitude (m) from static pressure (Pa) and temperature (°C).
    ///
    /// Negative pressure is clamped to 0 Pa; absolute temperature is clamped
    /// to at least 1 K.
    pub fn density_altitude_m<F: AirDataFloat>(&self, static_pressure_pa: F, temperature_c: F) -> F {
        let p = clamp_pressure(static_pressure_pa);
        let t = clamp_temperature(temperature_c);

        let t0 = F::from_f64(self.sea_level_temperature_k());
        let lapse = F::from_f64(self.lapse_rate_kpm());
        let p0 = F::from_f64(self.sea_level_pressure_pa());
        let exponent = F::from_f64(self.density_altitude_exponent());

        t0 / lapse * (F::ONE - (p / p0 * t0 / t).pow(exponent))
    }

    /// Height above ground (m) from static pressure (Pa) and the pressure
    /// altitude of the ground reference (m).
    pub fn agl_altitude_m<F: AirDataFloat>(&self, static_pressure_pa: F, bias_m: F) -> F {
        self.pressure_altitude_m(static_pressure_pa) - bias_m
    }
}

/// Static pressure with the 0 Pa floor applied
#[inline]
pub(crate) fn clamp_pressure<F: AirDataFloat>(static_pressure_pa: F) -> F {
    let floor = F::from_f64(MIN_PRESSURE_PA);
    if static_pressure_pa < floor {
        log_trace!("Static pressure {} Pa clamped to {}", static_pressure_pa, floor);
    }
    static_pressure_pa.at_least(floor)
}

/// Temperature in kelvin with the 1 K floor applied
#[inline]
pub(crate) fn clamp_temperature<F: AirDataFloat>(temperature_c: F) -> F {
    let temperature_k = celsius_to_kelvin(temperature_c);
    let floor = F::from_f64(MIN_TEMPERATURE_K);
    if temperature_k < floor {
        log_trace!("Temperature {} K clamped to {}", temperature_k, floor);
    }
    temperature_k.at_least(floor)
}

/// Pressure altitude (m) from static pressure (Pa), ISA constants.
///
/// See [`StandardAtmosphere::pressure_altitude_m`].
pub fn pressure_altitude_m<F: AirDataFloat>(static_pressure_pa: F) -> F {
    StandardAtmosphere::ISA.pressure_altitude_m(static_pressure_pa)
}

/// Density altitude (m) from static pressure (Pa) and temperature (°C), ISA constants.
///
/// See [`StandardAtmosphere::density_altitude_m`].
pub fn density_altitude_m<F: AirDataFloat>(static_pressure_pa: F, temperature_c: F) -> F {
    StandardAtmosphere::ISA.density_altitude_m(static_pressure_pa, temperature_c)
}

/// Height above ground (m), ISA constants.
///
/// See [`StandardAtmosphere::agl_altitude_m`].
pub fn agl_altitude_m<F: AirDataFloat>(static_pressure_pa: F, bias_m: F) -> F {
    StandardAtmosphere::ISA.agl_altitude_m(static_pressure_pa, bias_m)
}

/// Height above mean sea level (m) from AGL height and the MSL elevation of
/// the ground reference (m).
pub fn msl_altitude_m<F: AirDataFloat>(agl_m: F, reference_msl_m: F) -> F {
    agl_m + reference_msl_m
}
