//! Pre-built reference scenarios
//!
//! Each scenario is one frame of pitot-static readings together with the
//! values the model must produce for it.

use airdata_core::{GroundReference, PitotStaticSample};

/// One ISA table row: geopotential altitude and the pressure found there
pub struct IsaRow {
    pub altitude_m: f64,
    pub pressure_pa: f64,
    pub density_kgpm3: f64,
    pub temperature_c: f64,
}

/// ISA troposphere, sea level to the tropopause
pub const ISA_TABLE: &[IsaRow] = &[
    IsaRow { altitude_m: 0.0, pressure_pa: 101_325.0, density_kgpm3: 1.2250, temperature_c: 15.0 },
    IsaRow { altitude_m: 1_000.0, pressure_pa: 89_874.6, density_kgpm3: 1.1117, temperature_c: 8.5 },
    IsaRow { altitude_m: 2_000.0, pressure_pa: 79_495.2, density_kgpm3: 1.0066, temperature_c: 2.0 },
    IsaRow { altitude_m: 3_000.0, pressure_pa: 70_108.5, density_kgpm3: 0.9093, temperature_c: -4.5 },
    IsaRow { altitude_m: 5_000.0, pressure_pa: 54_019.9, density_kgpm3: 0.7364, temperature_c: -17.5 },
    IsaRow { altitude_m: 8_000.0, pressure_pa: 35_599.8, density_kgpm3: 0.5258, temperature_c: -37.0 },
    IsaRow { altitude_m: 11_000.0, pressure_pa: 22_632.1, density_kgpm3: 0.3639, temperature_c: -56.5 },
];

/// A named frame with its expected outputs
pub struct FlightScenario {
    pub name: &'static str,
    pub sample: PitotStaticSample<f32>,
    pub ground: GroundReference<f32>,
    pub expected_eas_mps: f64,
    pub expected_tas_mps: f64,
}

/// Small UAV scenarios from launch to cruise
pub fn flight_profile() -> [FlightScenario; 3] {
    [
        FlightScenario {
            name: "parked, sensor offset",
            sample: PitotStaticSample {
                diff_pressure_pa: -2.5,
                static_pressure_pa: 101_325.0,
                temperature_c: 15.0,
            },
            ground: GroundReference::SEA_LEVEL,
            expected_eas_mps: 0.0,
            expected_tas_mps: 0.0,
        },
        FlightScenario {
            name: "climb-out",
            sample: PitotStaticSample {
                diff_pressure_pa: 500.0,
                static_pressure_pa: 90_000.0,
                temperature_c: 10.0,
            },
            ground: GroundReference::SEA_LEVEL,
            expected_eas_mps: 28.5428,
            expected_tas_mps: 28.2941,
        },
        FlightScenario {
            name: "standard day sea level pass",
            sample: PitotStaticSample {
                diff_pressure_pa: 1_000.0,
                static_pressure_pa: 101_325.0,
                temperature_c: 15.0,
            },
            ground: GroundReference::SEA_LEVEL,
            expected_eas_mps: 40.3348,
            expected_tas_mps: 40.3348,
        },
    ]
}
