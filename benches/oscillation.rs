//! Benchmarks for vacuum oscillation probability calculations
//!
//! Run with: cargo bench
//!
//! Compares:
//! - PMNS construction alone
//! - Single probability vs full 3×3 matrix
//! - Batch calculations (energy spectrum) with and without the cached VacuumBatch

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nuvac::units::{Angle, Energy, Length};
use nuvac::{
    pmns_matrix, presets, probability_matrix, Flavor, OscillationParameters, Particle, VacuumBatch,
    NU_E, NU_MU,
};

/// DUNE-like parameters for benchmarking
fn dune_params(e: f64) -> OscillationParameters {
    let mut params = presets::pdg2020();
    params.set_baseline(Length::km(1300.0));
    params.set_energy(Energy::gev(e));
    params
}

fn bench_pmns(c: &mut Criterion) {
    let p = dune_params(2.5);
    c.bench_function("pmns_matrix", |b| {
        b.iter(|| {
            pmns_matrix(
                black_box(p.theta12()),
                black_box(p.theta13()),
                black_box(p.theta23()),
                black_box(p.delta_cp()),
            )
        })
    });
}

/// Single-point vacuum probabilities
fn bench_vacuum_single(c: &mut Criterion) {
    let params = dune_params(2.5);

    c.bench_function("vacuum_single", |b| {
        b.iter(|| black_box(&params).p(Flavor::Muon, Flavor::Electron))
    });

    let mut group = c.benchmark_group("vacuum_matrix");
    for particle in [Particle::Neutrino, Particle::Antineutrino] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{particle:?}")),
            &particle,
            |b, &particle| b.iter(|| probability_matrix(black_box(&params), particle)),
        );
    }
    group.finish();
}

/// Batch calculation: 1000-point energy spectrum (DUNE-like)
fn bench_energy_spectrum(c: &mut Criterion) {
    let e_min = 0.5;
    let e_max = 5.0;
    let n_points = 1000;

    c.bench_function("vacuum_spectrum_1000", |b| {
        b.iter(|| {
            for i in 0..n_points {
                let e = e_min + (e_max - e_min) * (i as f64 / n_points as f64);
                let params = dune_params(e);
                black_box(params.p(Flavor::Muon, Flavor::Electron));
            }
        })
    });

    // Pre-computed mixing matrix
    c.bench_function("vacuum_batch_spectrum_1000", |b| {
        let batch = VacuumBatch::new(&dune_params(2.5));
        b.iter(|| {
            for i in 0..n_points {
                let e = e_min + (e_max - e_min) * (i as f64 / n_points as f64);
                black_box(batch.probability_at(NU_MU, NU_E, Length::km(1300.0), Energy::gev(e)));
            }
        })
    });

    // δCP scan rebuilds U every step
    c.bench_function("delta_cp_scan_360", |b| {
        let mut params = dune_params(2.5);
        b.iter(|| {
            for deg in 0..360 {
                params.set_delta_cp(Angle::degrees(deg as f64));
                black_box(params.p(Flavor::Muon, Flavor::Electron));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_pmns,
    bench_vacuum_single,
    bench_energy_spectrum,
);

criterion_main!(benches);
