//! Curve points and the polarization-curve result container
//!
//! A sweep produces one [`CurvePoint`] per current-density sample, collected
//! in order inside a [`PolarizationCurve`]. The curve is the sole contract
//! with the reporting/plotting collaborators: it exposes numeric columns and
//! a small set of analysis helpers, nothing renderer-specific.

use nalgebra::DVector;
use std::collections::HashMap;

// =================================================================================================
// Curve Point
// =================================================================================================

/// All voltage quantities computed at one current-density sample.
///
/// Losses are magnitudes (≥ 0) subtracted from the Nernst voltage; the cell
/// voltage is clamped to ≥ 0 and the power density is voltage × current.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Sampled current density i \[A/cm²\]
    pub current_density: f64,

    /// Open-circuit (Nernst) voltage \[V\]; independent of i
    pub nernst_voltage: f64,

    /// Activation overpotential \[V\] (electrode kinetics, dominant at low i)
    pub activation_loss: f64,

    /// Ohmic overpotential \[V\] (membrane and contact resistance, linear in i)
    pub ohmic_loss: f64,

    /// Concentration overpotential \[V\] (mass transport, dominant near i_lim)
    pub concentration_loss: f64,

    /// Net cell voltage \[V\]: max(0, nernst − activation − ohmic − concentration)
    pub cell_voltage: f64,

    /// Power density \[W/cm²\]: cell_voltage × current_density
    pub power_density: f64,
}

impl CurvePoint {
    /// Sum of the three overpotential magnitudes \[V\]
    pub fn total_loss(&self) -> f64 {
        self.activation_loss + self.ohmic_loss + self.concentration_loss
    }
}

// =================================================================================================
// Polarization Curve
// =================================================================================================

/// Ordered sequence of curve points from one sweep, plus run metadata.
///
/// The point order matches the input sample order exactly: no reordering,
/// no dropped points. Metadata is free-form string pairs attached by the
/// sweep driver (sample count, limiting current, execution mode, ...) for
/// diagnostics and reproducibility.
#[derive(Debug, Clone)]
pub struct PolarizationCurve {
    /// Computed points, in input-sample order
    points: Vec<CurvePoint>,

    /// Diagnostic metadata attached by the sweep driver
    metadata: HashMap<String, String>,
}

impl PolarizationCurve {
    /// Create a curve from computed points.
    pub fn new(points: Vec<CurvePoint>) -> Self {
        Self {
            points,
            metadata: HashMap::new(),
        }
    }

    /// Number of points in the curve.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check emptiness.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points, in input-sample order.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Iterate over points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, CurvePoint> {
        self.points.iter()
    }

    // ====================================== Metadata ======================================

    /// Attach a metadata entry.
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Read a metadata entry.
    pub fn metadata(&self, key: &str) -> Option<&String> {
        self.metadata.get(key)
    }

    // ==================================== Column views ====================================

    /// Sampled current densities \[A/cm²\] as a vector.
    pub fn current_densities(&self) -> DVector<f64> {
        self.column(|p| p.current_density)
    }

    /// Net cell voltages \[V\] as a vector.
    pub fn cell_voltages(&self) -> DVector<f64> {
        self.column(|p| p.cell_voltage)
    }

    /// Power densities \[W/cm²\] as a vector.
    pub fn power_densities(&self) -> DVector<f64> {
        self.column(|p| p.power_density)
    }

    /// Activation losses \[V\] as a vector.
    pub fn activation_losses(&self) -> DVector<f64> {
        self.column(|p| p.activation_loss)
    }

    /// Ohmic losses \[V\] as a vector.
    pub fn ohmic_losses(&self) -> DVector<f64> {
        self.column(|p| p.ohmic_loss)
    }

    /// Concentration losses \[V\] as a vector.
    pub fn concentration_losses(&self) -> DVector<f64> {
        self.column(|p| p.concentration_loss)
    }

    fn column<F>(&self, f: F) -> DVector<f64>
    where
        F: Fn(&CurvePoint) -> f64,
    {
        DVector::from_iterator(self.points.len(), self.points.iter().map(f))
    }

    // ====================================== Analysis ======================================

    /// The point of maximum power density, if the curve is non-empty.
    ///
    /// Comparison uses the IEEE total order, so a caller-built curve with a
    /// non-finite field never panics here. Sweep-produced curves only
    /// contain finite values.
    pub fn peak_power(&self) -> Option<&CurvePoint> {
        self.points
            .iter()
            .max_by(|a, b| a.power_density.total_cmp(&b.power_density))
    }

    /// The point whose current density is closest to `target` \[A/cm²\].
    ///
    /// Used by the reporting layer for loss breakdowns at a nominal
    /// operating point (e.g. 1.0 A/cm²). NaN distances sort last under the
    /// total order, so points with a NaN current density are never selected.
    pub fn nearest(&self, target: f64) -> Option<&CurvePoint> {
        self.points.iter().min_by(|a, b| {
            (a.current_density - target)
                .abs()
                .total_cmp(&(b.current_density - target).abs())
        })
    }
}

// =================================================================================================
// Tests
// =================================================================================================
