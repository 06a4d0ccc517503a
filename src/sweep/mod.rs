//! Curve-generation engine
//!
//! This module drives a [`PolarizationModel`](crate::model::PolarizationModel)
//! over an ordered sequence of current-density samples and collects the
//! resulting [`CurvePoint`](crate::physics::CurvePoint)s into a
//! [`PolarizationCurve`](crate::physics::PolarizationCurve).
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! - The **model** defines WHAT is computed at each sample (the physics)
//! - The **sweep** defines HOW the curve is built: which samples, in which
//!   order, with which execution strategy
//!
//! ## Fail-fast validation
//!
//! A polarization curve with gaps is not a usable diagnostic artifact, so the
//! sweep is atomic: every sample is validated against sign, finiteness, and
//! the limiting current density *before* any point is computed, and the first
//! offending sample aborts the whole run with its error kind. The output is
//! guaranteed to have the same length and order as the input.
//!
//! # Quick Start Example
//!
//! ```rust
//! use pemfc_rs::physics::OperatingConfiguration;
//! use pemfc_rs::model::PolarizationModel;
//! use pemfc_rs::sweep::CurrentSweep;
//!
//! # fn main() -> Result<(), pemfc_rs::physics::ModelError> {
//! let model = PolarizationModel::new(OperatingConfiguration::default())?;
//!
//! // 200 evenly spaced samples over [0, 1.99], step 0.01
//! let curve = CurrentSweep::linear(2.0 - 0.01, 200).run(&model)?;
//! assert_eq!(curve.len(), 200);
//! # Ok(())
//! # }
//! ```
//!
//! # Parallel execution
//!
//! Each curve point is independent given the shared read-only configuration,
//! so with the `parallel` feature the sweep hands large sample sets to Rayon.
//! Output ordering matches input ordering in both execution modes; the
//! crossover point is runtime-configurable (see [`parallel_threshold`]).

use crate::model::PolarizationModel;
use crate::physics::{ModelError, ModelResult, PolarizationCurve};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Deciding *when* to hand work off to Rayon is an execution concern, not a
// physics concern, so it lives here rather than in the model.
//
// The threshold is stored in an AtomicUsize so that it can be changed at
// runtime (useful in benchmarks and tests) without requiring a mutex on every
// sweep. Relaxed ordering is sufficient: the value is a performance hint, not
// a synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of samples above which [`CurrentSweep::run`] switches to
/// parallel iteration.
///
/// Each curve point costs a handful of logarithms; below a few thousand
/// samples the overhead of Rayon's thread-pool dispatch outweighs the
/// per-sample work.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Runtime-configurable parallel-execution threshold.
///
/// Read via [`parallel_threshold()`], written via [`set_parallel_threshold()`].
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// [`CurrentSweep::run`] uses sequential iteration when the sweep contains
/// fewer samples than this value, and switches to Rayon when it contains
/// more — but only when the crate is compiled with the `parallel` feature.
///
/// # Example
///
/// ```rust
/// use pemfc_rs::sweep::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`. A zero-sample threshold would force
/// parallel dispatch on every single-point sweep, which is never the
/// intended behaviour.
///
/// # Example
///
/// ```rust
/// use pemfc_rs::sweep::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(2048);
/// assert_eq!(parallel_threshold(), 2048);
///
/// // Restore so other tests are not affected.
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Only compiled in test builds. Prevents one test from leaking a modified
/// threshold value into the next.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        // Bypass the public setter so that restoring to any value never panics.
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Current Sweep
// =================================================================================================

/// An ordered sequence of current-density samples to evaluate.
///
/// Construct with [`CurrentSweep::linear`] for the usual evenly spaced grid,
/// or [`CurrentSweep::from_samples`] for caller-chosen points, then call
/// [`CurrentSweep::run`] against a model.
#[derive(Debug, Clone)]
pub struct CurrentSweep {
    samples: Vec<f64>,
}

impl CurrentSweep {
    /// Evenly spaced samples over `[0, max_current]` inclusive of both ends.
    ///
    /// `steps` is the number of samples; with `steps >= 2` the spacing is
    /// `max_current / (steps - 1)`. Sample values are computed directly from
    /// the index (not accumulated) so the grid carries no compounding
    /// floating-point error and the last sample is exactly `max_current`.
    ///
    /// Callers sweeping toward the limiting current density must keep
    /// `max_current` strictly below it, typically with a small margin:
    ///
    /// ```rust
    /// use pemfc_rs::sweep::CurrentSweep;
    ///
    /// let i_lim = 1.8;
    /// let sweep = CurrentSweep::linear(i_lim - 0.05, 100);
    /// assert_eq!(sweep.samples().len(), 100);
    /// ```
    pub fn linear(max_current: f64, steps: usize) -> Self {
        let samples = match steps {
            0 => Vec::new(),
            1 => vec![0.0],
            _ => {
                let dx = max_current / (steps as f64 - 1.0);
                (0..steps).map(|k| k as f64 * dx).collect()
            }
        };
        Self { samples }
    }

    /// Caller-provided ordered samples, used as-is.
    pub fn from_samples(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    /// The sample grid, in evaluation order.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check emptiness.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Evaluate the model at every sample, in order.
    ///
    /// Fails fast: all samples are validated before any point is computed,
    /// and the first invalid sample aborts the whole sweep with its error
    /// kind — no partial curve is ever returned. On success the curve has
    /// exactly one point per sample, in input order, with run metadata
    /// attached.
    ///
    /// # Errors
    ///
    /// - [`ModelError::InvalidInput`] if any sample is negative or non-finite
    /// - [`ModelError::ExceedsLimitingCurrent`] if any sample is at or beyond
    ///   the model's limiting current density
    pub fn run(&self, model: &PolarizationModel) -> ModelResult<PolarizationCurve> {
        // ====== Step 1: Fail-fast validation ======

        self.validate_samples(model)?;

        // ====== Step 2: Point computation ======

        let points = self.compute_points(model)?;

        // ====== Step 3: Build result ======

        let mut curve = PolarizationCurve::new(points);

        // Metadata for diagnostics and reproducibility
        curve.add_metadata("model", "PEM polarization");
        curve.add_metadata("samples", &self.samples.len().to_string());
        curve.add_metadata(
            "limiting current density",
            &model.limiting_current_density().to_string(),
        );
        curve.add_metadata("execution", self.execution_mode());

        Ok(curve)
    }

    /// Check every sample against the model's validity domain.
    ///
    /// Runs before any point is computed so that a bad sample in the middle
    /// of the grid never costs a half-built curve.
    fn validate_samples(&self, model: &PolarizationModel) -> ModelResult<()> {
        let limit = model.limiting_current_density();

        for &sample in &self.samples {
            if !sample.is_finite() || sample < 0.0 {
                return Err(ModelError::InvalidInput {
                    current_density: sample,
                });
            }
            if sample >= limit {
                return Err(ModelError::ExceedsLimitingCurrent {
                    current_density: sample,
                    limiting_current_density: limit,
                });
            }
        }

        Ok(())
    }

    #[cfg(feature = "parallel")]
    fn compute_points(
        &self,
        model: &PolarizationModel,
    ) -> ModelResult<Vec<crate::physics::CurvePoint>> {
        if self.samples.len() > parallel_threshold() {
            // Rayon's indexed collect preserves input order
            self.samples
                .par_iter()
                .map(|&i| model.cell_voltage(i))
                .collect()
        } else {
            self.samples.iter().map(|&i| model.cell_voltage(i)).collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn compute_points(
        &self,
        model: &PolarizationModel,
    ) -> ModelResult<Vec<crate::physics::CurvePoint>> {
        self.samples.iter().map(|&i| model.cell_voltage(i)).collect()
    }

    #[cfg(feature = "parallel")]
    fn execution_mode(&self) -> &'static str {
        if self.samples.len() > parallel_threshold() {
            "parallel"
        } else {
            "sequential"
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn execution_mode(&self) -> &'static str {
        "sequential"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
