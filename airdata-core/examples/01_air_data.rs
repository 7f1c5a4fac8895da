//! Basic Air Data Example
//!
//! Converts a short flight of pitot-static frames into airspeed and altitude,
//! the way a flight controller would at each sensor update.
//!
//! ## What You'll Learn
//!
//! - Capturing a ground reference before launch
//! - Solving a full air data frame
//! - How out-of-range readings are clamped instead of failing
//! - Choosing a different constant set
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_air_data
//! ```

use airdata_core::{
    indicated_airspeed_mps, solve, GroundReference, PitotStaticSample, StandardAtmosphere,
};

fn main() {
    println!("Air Data Example");
    println!("================\n");

    // Ground reading taken on the field before launch (elevation 250 m MSL)
    let ground_pressure_pa = 98_300.0f32;
    let ground = GroundReference::from_ground_pressure(
        &StandardAtmosphere::ISA,
        ground_pressure_pa,
        250.0,
    );
    println!("Ground reference:");
    println!("  Field pressure altitude: {:.1} m", ground.bias_m);
    println!("  Field elevation:         {:.1} m MSL\n", ground.msl_m);

    // Frames: (differential Pa, static Pa, temperature °C)
    let frames = [
        (-1.8, 98_300.0, 21.0),  // parked, sensor offset
        (180.0, 98_280.0, 21.0), // takeoff roll
        (420.0, 97_700.0, 20.6), // climb-out
        (610.0, 96_100.0, 19.5), // climb
        (700.0, 95_400.0, 19.0), // cruise
    ];

    println!("{:>8} {:>8} {:>8} {:>8} {:>9} {:>9} {:>7}", "IAS", "EAS", "TAS", "AGL", "MSL", "DA", "OAT");
    println!("{:>8} {:>8} {:>8} {:>8} {:>9} {:>9} {:>7}", "m/s", "m/s", "m/s", "m", "m", "m", "°C");
    for (dp, sp, t) in frames {
        let sample = PitotStaticSample {
            diff_pressure_pa: dp,
            static_pressure_pa: sp,
            temperature_c: t,
        };
        let air = solve(&sample, &ground);
        println!(
            "{:8.2} {:8.2} {:8.2} {:8.1} {:9.1} {:9.1} {:7.2}",
            air.ias_mps, air.eas_mps, air.tas_mps, air.agl_m, air.msl_m,
            air.density_altitude_m, air.oat_c,
        );
    }

    // Invalid readings never fail, they clamp
    println!("\nOut-of-range readings:");
    println!("  IAS(-50 Pa)       = {} m/s", indicated_airspeed_mps(-50.0f32));
    let dead = solve(
        &PitotStaticSample {
            diff_pressure_pa: -50.0f32,
            static_pressure_pa: -10.0,
            temperature_c: -400.0,
        },
        &GroundReference::SEA_LEVEL,
    );
    println!("  dead sensor frame = {:?}", dead);

    // Legacy constant set for comparing against older flight logs
    let legacy = StandardAtmosphere::LEGACY;
    println!("\nPressure altitude at 70 kPa:");
    println!("  ISA:    {:.3} m", StandardAtmosphere::ISA.pressure_altitude_m(70_000.0f64));
    println!("  Legacy: {:.3} m", legacy.pressure_altitude_m(70_000.0f64));
}
