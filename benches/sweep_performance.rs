//! Performance benchmarks for the polarization sweep
//!
//! Measures single-point evaluation cost and whole-sweep scaling with the
//! number of current density samples.
//!
//! # What We're Measuring
//!
//! 1. **Single point** (`cell_voltage`):
//!    - Two `ln` calls plus a handful of multiplications
//!    - Sets the floor for per-sample sweep cost
//!
//! 2. **Sweep scaling** (`CurrentSweep::run`):
//!    - Time should scale linearly with the sample count
//!    - Includes the validation pass and the output allocation
//!
//! 3. **Sequential vs parallel** (feature `parallel` only):
//!    - Forces each execution mode via the runtime threshold
//!    - Shows where rayon's fork/join overhead pays for itself
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all sweep benchmarks
//! cargo bench --bench sweep_performance
//!
//! # Include the sequential/parallel comparison
//! cargo bench --bench sweep_performance --features parallel
//! ```
//!
//! # Understanding Results
//!
//! The per-point model is so cheap that small sweeps are dominated by
//! allocation. Expect the parallel mode to win only for large sample
//! counts; below a few thousand samples the sequential path should be
//! faster, which is why the default threshold sits at 4096.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use pemfc_rs::model::PolarizationModel;
use pemfc_rs::physics::OperatingConfiguration;
use pemfc_rs::sweep::CurrentSweep;

// =================================================================================================
// Shared Setup
// =================================================================================================

/// Typical 80 °C PEM model used by every benchmark
fn benchmark_model() -> PolarizationModel {
    PolarizationModel::new(OperatingConfiguration::default())
        .expect("default configuration is valid")
}

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Benchmark a single cell voltage evaluation
///
/// This is the inner loop of every sweep: Nernst voltage, three loss
/// terms, clamp, power. The result sets the expected per-sample cost
/// for the scaling benchmarks below.
fn benchmark_single_point(c: &mut Criterion) {
    let model = benchmark_model();

    c.bench_function("cell_voltage/single point", |b| {
        b.iter(|| model.cell_voltage(black_box(1.0)).unwrap());
    });
}

/// Benchmark sweep execution across sample counts
///
/// # Test Configuration
///
/// - **Samples**: 100, 1 000, 10 000, 100 000
/// - **Range**: 0 to 1.99 A/cm² (inside the validity domain)
///
/// # Expected Scaling
///
/// Time should scale linearly with the sample count. With the
/// `parallel` feature enabled, the two largest sizes cross the default
/// threshold (4096) and run on the rayon pool.
fn benchmark_sweep_scaling(c: &mut Criterion) {
    let model = benchmark_model();
    let mut group = c.benchmark_group("Polarization Sweep");

    for samples in [100, 1_000, 10_000, 100_000].iter() {
        group.throughput(criterion::Throughput::Elements(*samples as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(samples),
            samples,
            |b, &samples| {
                // Setup phase (NOT measured by criterion)
                let sweep = CurrentSweep::linear(1.99, samples);

                // Measurement phase
                b.iter(|| sweep.run(black_box(&model)).unwrap());
            },
        );
    }

    group.finish();
}

/// Direct comparison of the two execution modes on the same sweep
///
/// Forces each mode by moving the runtime threshold around the sweep
/// size, so both measurements cover an identical workload. The results
/// must agree bit-for-bit; only the wall time differs.
#[cfg(feature = "parallel")]
fn benchmark_execution_modes(c: &mut Criterion) {
    use pemfc_rs::sweep::set_parallel_threshold;

    let model = benchmark_model();
    let samples = 50_000;
    let sweep = CurrentSweep::linear(1.99, samples);

    let mut group = c.benchmark_group("Execution Mode Comparison");
    group.throughput(criterion::Throughput::Elements(samples as u64));

    // Threshold above the sweep size: sequential path
    set_parallel_threshold(samples + 1);
    group.bench_function("sequential", |b| {
        b.iter(|| sweep.run(black_box(&model)).unwrap());
    });

    // Threshold below the sweep size: rayon path
    set_parallel_threshold(1);
    group.bench_function("parallel", |b| {
        b.iter(|| sweep.run(black_box(&model)).unwrap());
    });

    set_parallel_threshold(pemfc_rs::sweep::DEFAULT_PARALLEL_THRESHOLD);
    group.finish();
}

// =================================================================================================
// Criterion Entry Points
// =================================================================================================

#[cfg(feature = "parallel")]
criterion_group!(
    benches,
    benchmark_single_point,
    benchmark_sweep_scaling,
    benchmark_execution_modes,
);

#[cfg(not(feature = "parallel"))]
criterion_group!(benches, benchmark_single_point, benchmark_sweep_scaling);

criterion_main!(benches);
