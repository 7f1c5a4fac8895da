//! Standard Day Constants
//!
//! Sea level reference values of the International Standard Atmosphere
//! (ICAO Doc 7488) used by every air data formula in this crate. Only the
//! troposphere layer is modelled, so a single constant lapse rate applies.
//!
//! Values are stored as `f64` and narrowed to the working precision through
//! [`AirDataFloat::from_f64`](crate::float::AirDataFloat::from_f64).

// ===== SEA LEVEL REFERENCE =====

/// Speed of sound at standard sea level (m/s).
///
/// Appears as the leading factor of the impact pressure airspeed relation.
///
/// Source: ICAO Standard Atmosphere, a₀ at 288.15 K
pub const SEA_LEVEL_SPEED_OF_SOUND_MPS: f64 = 340.29;

/// Standard sea level pressure (Pa).
///
/// Pressure altitude is zero at exactly this static pressure.
///
/// Source: ICAO Standard Atmosphere, p₀
pub const SEA_LEVEL_PRESSURE_PA: f64 = 101_325.0;

/// Standard sea level temperature (°C).
pub const SEA_LEVEL_TEMPERATURE_C: f64 = 15.0;

/// Standard sea level temperature (K).
///
/// Equal to [`SEA_LEVEL_TEMPERATURE_C`] + [`KELVIN_OFFSET`].
///
/// Source: ICAO Standard Atmosphere, T₀
pub const SEA_LEVEL_TEMPERATURE_K: f64 = 288.15;

// ===== TROPOSPHERE =====

/// Temperature lapse rate in the troposphere (K/m).
///
/// Temperature falls 6.5 K for every kilometre of altitude up to the
/// tropopause. Treated as constant; no layer switch is modelled.
///
/// Source: ICAO Standard Atmosphere, L₀
pub const LAPSE_RATE_KPM: f64 = 0.0065;

// ===== GAS PROPERTIES =====

/// Molar gas constant (J/(mol·K)).
///
/// Source: CODATA 2018 (exact since the 2019 SI redefinition)
pub const GAS_CONSTANT_JPKGMOL: f64 = 8.314_462_618_153_24;

/// Molar gas constant used by earlier releases (J/(mol·K)).
///
/// Pressure and density altitude differ from the CODATA value by a few
/// centimetres at typical flight levels. Kept so results can be reproduced
/// against recorded flight logs.
///
/// Source: U.S. Standard Atmosphere 1976, R*
pub const LEGACY_GAS_CONSTANT_JPKGMOL: f64 = 8.314_32;

/// Molar mass of dry air (kg/mol).
///
/// 78% N₂ (28.014) + 21% O₂ (31.998) + 1% Ar (39.948) ≈ 28.9644 g/mol
///
/// Source: ICAO Standard Atmosphere, M₀
pub const MOLECULAR_MASS_AIR_KGPMOL: f64 = 0.028_964_4;

/// Standard gravitational acceleration (m/s²).
///
/// Source: CGPM 1901, g₀
pub const GRAVITY_MPS2: f64 = 9.806_65;

// ===== UNIT CONVERSION =====

/// Offset between the Celsius and Kelvin scales.
///
/// `K = °C + KELVIN_OFFSET`
pub const KELVIN_OFFSET: f64 = 273.15;
