//! Throughput of the air data formulas
//!
//! A flight controller evaluates a full frame at 100+ Hz; these track the
//! per-call cost in both precisions.

use airdata_core::{
    density_altitude_m, equivalent_airspeed_mps, indicated_airspeed_mps, pressure_altitude_m,
    solve, GroundReference, PitotStaticSample,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_airspeed(c: &mut Criterion) {
    c.bench_function("ias_f32", |b| b.iter(|| indicated_airspeed_mps(black_box(500.0f32))));
    c.bench_function("eas_f32", |b| {
        b.iter(|| equivalent_airspeed_mps(black_box(500.0f32), black_box(90_000.0f32)))
    });
    c.bench_function("eas_f64", |b| {
        b.iter(|| equivalent_airspeed_mps(black_box(500.0f64), black_box(90_000.0f64)))
    });
}

fn bench_altitude(c: &mut Criterion) {
    c.bench_function("pressure_altitude_f32", |b| {
        b.iter(|| pressure_altitude_m(black_box(90_000.0f32)))
    });
    c.bench_function("density_altitude_f32", |b| {
        b.iter(|| density_altitude_m(black_box(93_194.0f32), black_box(10.46f32)))
    });
}

fn bench_solve(c: &mut Criterion) {
    let sample = PitotStaticSample {
        diff_pressure_pa: 650.0f32,
        static_pressure_pa: 95_000.0,
        temperature_c: 12.0,
    };
    let ground = GroundReference { bias_m: 110.0f32, msl_m: 95.0 };

    c.bench_function("solve_f32", |b| {
        b.iter(|| solve(black_box(&sample), black_box(&ground)))
    });
}

criterion_group!(benches, bench_airspeed, bench_altitude, bench_solve);
criterion_main!(benches);
