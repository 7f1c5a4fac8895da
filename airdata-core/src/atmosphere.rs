//! ISA Troposphere Constant Set
//!
//! ## Background
//!
//! Every air data formula in this crate is a closed-form expression over seven
//! standard day constants:
//!
//! ```text
//! a₀ = 340.29 m/s          sea level speed of sound
//! p₀ = 101325 Pa           sea level pressure
//! T₀ = 288.15 K            sea level temperature
//! L  = 0.0065 K/m          tropospheric lapse rate
//! R  = 8.31446261815324    molar gas constant, J/(mol·K)
//! M  = 0.0289644 kg/mol    molar mass of dry air
//! g₀ = 9.80665 m/s²        standard gravity
//! ```
//!
//! [`StandardAtmosphere`] bundles them so a single value can be handed to the
//! flight software. [`StandardAtmosphere::ISA`] is the canonical set and is
//! what the free functions at the crate root use. [`StandardAtmosphere::LEGACY`]
//! reproduces earlier releases, which used R = 8.31432.
//!
//! ## Custom constant sets
//!
//! Test rigs and simulators sometimes need a different reference day (a wind
//! tunnel at altitude, a hot-day table). [`AtmosphereBuilder`] starts from ISA
//! and validates the result once, at configuration time:
//!
//! ```rust
//! use airdata_core::StandardAtmosphere;
//!
//! let hot_day = StandardAtmosphere::builder()
//!     .sea_level_temperature_k(288.15 + 20.0)
//!     .build()?;
//!
//! let pa: f32 = hot_day.pressure_altitude_m(90_000.0);
//! assert!(pa > 0.0);
//! # Ok::<(), airdata_core::AirDataError>(())
//! ```
//!
//! With the `serde` feature the set deserializes through the same builder, so
//! a config file cannot smuggle in an invalid constant.

use crate::{
    constants::atmosphere::{
        GAS_CONSTANT_JPKGMOL, GRAVITY_MPS2, LAPSE_RATE_KPM, LEGACY_GAS_CONSTANT_JPKGMOL,
        MOLECULAR_MASS_AIR_KGPMOL, SEA_LEVEL_PRESSURE_PA, SEA_LEVEL_SPEED_OF_SOUND_MPS,
        SEA_LEVEL_TEMPERATURE_K,
    },
    errors::{AirDataError, AirDataResult},
    logging::log_warn,
};

/// Standard day constant set for the troposphere
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "AtmosphereBuilder")
)]
pub struct StandardAtmosphere {
    speed_of_sound_mps: f64,
    sea_level_pressure_pa: f64,
    sea_level_temperature_k: f64,
    lapse_rate_kpm: f64,
    gas_constant_jpkgmol: f64,
    molecular_mass_kgpmol: f64,
    gravity_mps2: f64,
}

impl StandardAtmosphere {
    /// ICAO standard atmosphere with the CODATA gas constant
    pub const ISA: Self = Self {
        speed_of_sound_mps: SEA_LEVEL_SPEED_OF_SOUND_MPS,
        sea_level_pressure_pa: SEA_LEVEL_PRESSURE_PA,
        sea_level_temperature_k: SEA_LEVEL_TEMPERATURE_K,
        lapse_rate_kpm: LAPSE_RATE_KPM,
        gas_constant_jpkgmol: GAS_CONSTANT_JPKGMOL,
        molecular_mass_kgpmol: MOLECULAR_MASS_AIR_KGPMOL,
        gravity_mps2: GRAVITY_MPS2,
    };

    /// ISA with the gas constant used by earlier releases (8.31432)
    pub const LEGACY: Self = Self {
        gas_constant_jpkgmol: LEGACY_GAS_CONSTANT_JPKGMOL,
        ..Self::ISA
    };

    /// Start a custom constant set from ISA
    pub fn builder() -> AtmosphereBuilder {
        AtmosphereBuilder::default()
    }

    /// Start a custom constant set from this one
    pub fn to_builder(&self) -> AtmosphereBuilder {
        AtmosphereBuilder::from(*self)
    }

    /// Sea level speed of sound, a₀ (m/s)
    pub const fn speed_of_sound_mps(&self) -> f64 {
        self.speed_of_sound_mps
    }

    /// Sea level pressure, p₀ (Pa)
    pub const fn sea_level_pressure_pa(&self) -> f64 {
        self.sea_level_pressure_pa
    }

    /// Sea level temperature, T₀ (K)
    pub const fn sea_level_temperature_k(&self) -> f64 {
        self.sea_level_temperature_k
    }

    /// Lapse rate, L (K/m)
    pub const fn lapse_rate_kpm(&self) -> f64 {
        self.lapse_rate_kpm
    }

    /// Molar gas constant, R (J/(mol·K))
    pub const fn gas_constant_jpkgmol(&self) -> f64 {
        self.gas_constant_jpkgmol
    }

    /// Molar mass of dry air, M (kg/mol)
    pub const fn molecular_mass_kgpmol(&self) -> f64 {
        self.molecular_mass_kgpmol
    }

    /// Standard gravity, g₀ (m/s²)
    pub const fn gravity_mps2(&self) -> f64 {
        self.gravity_mps2
    }

    /// Exponent of the pressure altitude relation, `L·R / (M·g₀)`.
    ///
    /// ≈ 0.190267 for ISA. The inverse (≈ 5.2558) is the familiar exponent of
    /// the barometric formula.
    pub fn pressure_altitude_exponent(&self) -> f64 {
        (self.lapse_rate_kpm * self.gas_constant_jpkgmol)
            / (self.molecular_mass_kgpmol * self.gravity_mps2)
    }

    /// Exponent of the density altitude relation, `L·R / (M·g₀ − L·R)`.
    ///
    /// ≈ 0.234974 for ISA.
    pub fn density_altitude_exponent(&self) -> f64 {
        let lr = self.lapse_rate_kpm * self.gas_constant_jpkgmol;
        lr / (self.molecular_mass_kgpmol * self.gravity_mps2 - lr)
    }

    /// Altitude at which the linear lapse model reaches 0 K, `T₀ / L` (m).
    ///
    /// Pressure altitude evaluates to this value at zero static pressure
    /// (≈ 44330.77 m for ISA).
    pub fn tropopause_boundary_m(&self) -> f64 {
        self.sea_level_temperature_k / self.lapse_rate_kpm
    }
}

impl Default for StandardAtmosphere {
    fn default() -> Self {
        Self::ISA
    }
}

/// Builder for a validated [`StandardAtmosphere`]
///
/// Unset constants keep their ISA value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct AtmosphereBuilder {
    speed_of_sound_mps: f64,
    sea_level_pressure_pa: f64,
    sea_level_temperature_k: f64,
    lapse_rate_kpm: f64,
    gas_constant_jpkgmol: f64,
    molecular_mass_kgpmol: f64,
    gravity_mps2: f64,
}

impl Default for AtmosphereBuilder {
    fn default() -> Self {
        Self::from(StandardAtmosphere::ISA)
    }
}

impl From<StandardAtmosphere> for AtmosphereBuilder {
    fn from(atmosphere: StandardAtmosphere) -> Self {
        Self {
            speed_of_sound_mps: atmosphere.speed_of_sound_mps,
            sea_level_pressure_pa: atmosphere.sea_level_pressure_pa,
            sea_level_temperature_k: atmosphere.sea_level_temperature_k,
            lapse_rate_kpm: atmosphere.lapse_rate_kpm,
            gas_constant_jpkgmol: atmosphere.gas_constant_jpkgmol,
            molecular_mass_kgpmol: atmosphere.molecular_mass_kgpmol,
            gravity_mps2: atmosphere.gravity_mps2,
        }
    }
}

impl AtmosphereBuilder {
    /// Sea level speed of sound (m/s)
    pub fn speed_of_sound_mps(mut self, value: f64) -> Self {
        self.speed_of_sound_mps = value;
        self
    }

    /// Sea level pressure (Pa)
    pub fn sea_level_pressure_pa(mut self, value: f64) -> Self {
        self.sea_level_pressure_pa = value;
        self
    }

    /// Sea level temperature (K)
    pub fn sea_level_temperature_k(mut self, value: f64) -> Self {
        self.sea_level_temperature_k = value;
        self
    }

    /// Lapse rate (K/m)
    pub fn lapse_rate_kpm(mut self, value: f64) -> Self {
        self.lapse_rate_kpm = value;
        self
    }

    /// Molar gas constant (J/(mol·K))
    pub fn gas_constant_jpkgmol(mut self, value: f64) -> Self {
        self.gas_constant_jpkgmol = value;
        self
    }

    /// Molar mass of dry air (kg/mol)
    pub fn molecular_mass_kgpmol(mut self, value: f64) -> Self {
        self.molecular_mass_kgpmol = value;
        self
    }

    /// Standard gravity (m/s²)
    pub fn gravity_mps2(mut self, value: f64) -> Self {
        self.gravity_mps2 = value;
        self
    }

    /// Validate and freeze the constant set.
    ///
    /// Every constant must be finite and strictly positive, and `M·g₀` must
    /// exceed `L·R` so the density altitude exponent exists.
    pub fn build(self) -> AirDataResult<StandardAtmosphere> {
        let named = [
            ("speed_of_sound_mps", self.speed_of_sound_mps),
            ("sea_level_pressure_pa", self.sea_level_pressure_pa),
            ("sea_level_temperature_k", self.sea_level_temperature_k),
            ("lapse_rate_kpm", self.lapse_rate_kpm),
            ("gas_constant_jpkgmol", self.gas_constant_jpkgmol),
            ("molecular_mass_kgpmol", self.molecular_mass_kgpmol),
            ("gravity_mps2", self.gravity_mps2),
        ];

        for (name, value) in named {
            check_positive(name, value)?;
        }

        let denominator = self.molecular_mass_kgpmol * self.gravity_mps2
            - self.lapse_rate_kpm * self.gas_constant_jpkgmol;
        if !(denominator > 0.0) {
            log_warn!("Rejected constant set: M*G - L*R = {}", denominator);
            return Err(AirDataError::DegenerateExponent { denominator });
        }

        Ok(StandardAtmosphere {
            speed_of_sound_mps: self.speed_of_sound_mps,
            sea_level_pressure_pa: self.sea_level_pressure_pa,
            sea_level_temperature_k: self.sea_level_temperature_k,
            lapse_rate_kpm: self.lapse_rate_kpm,
            gas_constant_jpkgmol: self.gas_constant_jpkgmol,
            molecular_mass_kgpmol: self.molecular_mass_kgpmol,
            gravity_mps2: self.gravity_mps2,
        })
    }
}

impl TryFrom<AtmosphereBuilder> for StandardAtmosphere {
    type Error = AirDataError;

    fn try_from(builder: AtmosphereBuilder) -> AirDataResult<Self> {
        builder.build()
    }
}

fn check_positive(name: &'static str, value: f64) -> AirDataResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        log_warn!("Rejected constant {} = {}", name, value);
        Err(AirDataError::InvalidConstant { name, value })
    }
}
