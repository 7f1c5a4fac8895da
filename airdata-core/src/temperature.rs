//! Temperature conversion and outside air temperature estimate
//!
//! Inputs and outputs are in °C; formulas that divide by temperature convert
//! to kelvin internally. The OAT estimate extrapolates a reference reading
//! (usually taken on the ground before takeoff) along the standard lapse rate:
//!
//! ```text
//! OAT = T_ref − L · h_agl
//! ```
//!
//! No clamping: a negative height (below the reference station) or a very
//! cold reference are both physically meaningful here. There is no layer
//! switch at the tropopause.

use crate::{
    atmosphere::StandardAtmosphere,
    constants::atmosphere::KELVIN_OFFSET,
    float::AirDataFloat,
};

/// °C to K
#[inline]
pub fn celsius_to_kelvin<F: AirDataFloat>(temperature_c: F) -> F {
    temperature_c + F::from_f64(KELVIN_OFFSET)
}

/// K to °C
#[inline]
pub fn kelvin_to_celsius<F: AirDataFloat>(temperature_k: F) -> F {
    temperature_k - F::from_f64(KELVIN_OFFSET)
}

impl StandardAtmosphere {
    /// Estimated outside air temperature (°C) at `agl_m` metres above a
    /// reference reading of `temperature_c`.
    pub fn estimated_oat_c<F: AirDataFloat>(&self, temperature_c: F, agl_m: F) -> F {
        temperature_c - F::from_f64(self.lapse_rate_kpm()) * agl_m
    }
}

/// Estimated outside air temperature (°C), ISA lapse rate.
///
/// See [`StandardAtmosphere::estimated_oat_c`].
pub fn estimated_oat_c<F: AirDataFloat>(temperature_c: F, agl_m: F) -> F {
    StandardAtmosphere::ISA.estimated_oat_c(temperature_c, agl_m)
}
