//! Airspeed from Pitot-Static Pressures
//!
//! ## Physics Background
//!
//! A pitot tube facing into the airflow measures total (stagnation) pressure.
//! The static port measures ambient pressure. Their difference is the impact
//! pressure `qc`, which the differential pressure sensor reports directly.
//!
//! For subsonic compressible flow, the isentropic relation between impact
//! pressure and Mach number solved for speed gives:
//!
//! ```text
//! IAS = a₀ · √( 5 · ((qc/p₀ + 1)^(2/7) − 1) )
//! EAS = a₀ · √( 5 · p/p₀ · ((qc/p + 1)^(2/7) − 1) )
//! TAS = EAS · √( T / T₀ )
//!
//! Where:
//! - qc = differential (impact) pressure (Pa)
//! - p  = static pressure (Pa)
//! - T  = static air temperature (K)
//! - 2/7 = (γ − 1)/γ with γ = 1.4 for dry air
//! ```
//!
//! IAS uses sea level pressure in the compressibility term, which is what an
//! airspeed indicator dial is calibrated against. EAS replaces it with the
//! measured static pressure. TAS then corrects EAS for density.
//!
//! ## Domain Policy
//!
//! All three short-circuit to zero for inputs outside the physical domain.
//! Nothing is clamped and carried forward:
//!
//! | Function | Returns 0 when |
//! |---|---|
//! | IAS | `qc < 0` |
//! | EAS | `qc < 0` or `p < 0.1 Pa` |
//! | TAS | `EAS < 0` or `T < 0 K` |
//!
//! A negative differential pressure is normal on the ground (sensor offset,
//! tailwind) and must read as zero airspeed, not NaN.

use crate::{
    atmosphere::StandardAtmosphere,
    constants::limits::{MIN_STATIC_PRESSURE_PA, ZERO_AIRSPEED_MPS},
    float::AirDataFloat,
    logging::log_trace,
    temperature::celsius_to_kelvin,
};

/// `(γ − 1)/γ` for dry air
const COMPRESSIBILITY_EXPONENT: f64 = 2.0 / 7.0;

/// `2/(γ − 1)` for dry air
const COMPRESSIBILITY_FACTOR: f64 = 5.0;

impl StandardAtmosphere {
    /// Indicated airspeed (m/s) from differential pressure (Pa).
    ///
    /// Returns 0 for negative differential pressure.
    pub fn indicated_airspeed_mps<F: AirDataFloat>(&self, diff_pressure_pa: F) -> F {
        if diff_pressure_pa < F::ZERO {
            log_trace!("IAS: negative differential pressure {}, reporting 0", diff_pressure_pa);
            return F::from_f64(ZERO_AIRSPEED_MPS);
        }

        let a0 = F::from_f64(self.speed_of_sound_mps());
        let p0 = F::from_f64(self.sea_level_pressure_pa());

        a0 * compressible_term(diff_pressure_pa / p0, F::ONE)
    }

    /// Equivalent airspeed (m/s) from differential and static pressure (Pa).
    ///
    /// Returns 0 for negative differential pressure or static pressure below
    /// 0.1 Pa.
    pub fn equivalent_airspeed_mps<F: AirDataFloat>(
        &self,
        diff_pressure_pa: F,
        static_pressure_pa: F,
    ) -> F {
        if diff_pressure_pa < F::ZERO || static_pressure_pa < F::from_f64(MIN_STATIC_PRESSURE_PA) {
            log_trace!(
                "EAS: out of domain (dp = {}, sp = {}), reporting 0",
                diff_pressure_pa, static_pressure_pa
            );
            return F::from_f64(ZERO_AIRSPEED_MPS);
        }

        let a0 = F::from_f64(self.speed_of_sound_mps());
        let p0 = F::from_f64(self.sea_level_pressure_pa());

        a0 * compressible_term(diff_pressure_pa / static_pressure_pa, static_pressure_pa / p0)
    }

    /// True airspeed (m/s) from equivalent airspeed (m/s) and temperature (°C).
    ///
    /// Returns 0 for negative EAS or a temperature below absolute zero.
    pub fn true_airspeed_mps<F: AirDataFloat>(&self, eas_mps: F, temperature_c: F) -> F {
        let temperature_k = celsius_to_kelvin(temperature_c);
        if eas_mps < F::ZERO || temperature_k < F::ZERO {
            log_trace!(
                "TAS: out of domain (eas = {}, t = {} K), reporting 0",
                eas_mps, temperature_k
            );
            return F::from_f64(ZERO_AIRSPEED_MPS);
        }

        let t0 = F::from_f64(self.sea_level_temperature_k());
        eas_mps * (temperature_k / t0).sqrt()
    }
}

/// `√(5 · scale · ((ratio + 1)^(2/7) − 1))`
#[inline]
fn compressible_term<F: AirDataFloat>(pressure_ratio: F, scale: F) -> F {
    let factor = F::from_f64(COMPRESSIBILITY_FACTOR);
    let exponent = F::from_f64(COMPRESSIBILITY_EXPONENT);
    (factor * scale * ((pressure_ratio + F::ONE).pow(exponent) - F::ONE)).sqrt()
}

/// Indicated airspeed (m/s) from differential pressure (Pa), ISA constants.
///
/// See [`StandardAtmosphere::indicated_airspeed_mps`].
pub fn indicated_airspeed_mps<F: AirDataFloat>(diff_pressure_pa: F) -> F {
    StandardAtmosphere::ISA.indicated_airspeed_mps(diff_pressure_pa)
}

/// Equivalent airspeed (m/s) from differential and static pressure (Pa), ISA constants.
///
/// See [`StandardAtmosphere::equivalent_airspeed_mps`].
pub fn equivalent_airspeed_mps<F: AirDataFloat>(diff_pressure_pa: F, static_pressure_pa: F) -> F {
    StandardAtmosphere::ISA.equivalent_airspeed_mps(diff_pressure_pa, static_pressure_pa)
}

/// True airspeed (m/s) from EAS (m/s) and temperature (°C), ISA constants.
///
/// See [`StandardAtmosphere::true_airspeed_mps`].
pub fn true_airspeed_mps<F: AirDataFloat>(eas_mps: F, temperature_c: F) -> F {
    StandardAtmosphere::ISA.true_airspeed_mps(eas_mps, temperature_c)
}
