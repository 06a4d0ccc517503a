//! Semi-empirical PEM polarization model
//!
//! Computes, for a validated [`OperatingConfiguration`] and a current density
//! `i`, the four voltage quantities of the polarization curve:
//!
//! ```text
//! V_cell(i) = max(0, E_nernst − η_act(i) − η_ohm(i) − η_conc(i))
//! ```
//!
//! with
//!
//! ```text
//! E_nernst = (E⁰ − k_T·(T − 298.15)) + (RT/2F)·ln(p_H2 · √p_O2)
//! η_act(i) = max(0, b·ln(i/i₀))            (Tafel kinetics)
//! η_ohm(i) = i·ASR                         (resistive drop)
//! η_conc(i) = −B·ln(1 − i/i_lim)           (mass transport)
//! ```
//!
//! # Validity domain
//!
//! The model is defined on `0 ≤ i < i_lim`. A sample at or beyond the
//! limiting current density is a hard [`ModelError::ExceedsLimitingCurrent`],
//! never a silent extrapolation — beyond that point the reactant supply has
//! collapsed and the equations stop meaning anything.
//!
//! # Example
//!
//! ```rust
//! use pemfc_rs::physics::OperatingConfiguration;
//! use pemfc_rs::model::PolarizationModel;
//!
//! let model = PolarizationModel::new(OperatingConfiguration::default()).unwrap();
//!
//! let point = model.cell_voltage(1.0).unwrap();
//! assert!(point.cell_voltage > 0.7 && point.cell_voltage < 0.85);
//! ```

use crate::physics::constants::{
    ELECTRONS_PER_REACTION, FARADAY_CONSTANT, GAS_CONSTANT, LOG_RATIO_EPSILON,
    STANDARD_TEMPERATURE, TEMPERATURE_COEFFICIENT,
};
use crate::physics::{CurvePoint, ModelError, ModelResult, OperatingConfiguration};

// =================================================================================================
// Polarization Model
// =================================================================================================

/// Single-cell, steady-state, isothermal PEM polarization model.
///
/// Holds a validated configuration and exposes pure functions from current
/// density to the voltage terms. Construction is the only place the
/// configuration is checked; after that every operation can assume the
/// parameters are physical.
#[derive(Debug, Clone, Copy)]
pub struct PolarizationModel {
    configuration: OperatingConfiguration,
}

impl PolarizationModel {
    /// Create a model from an operating configuration.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidConfiguration`] if any parameter is outside its
    /// physical range (see [`OperatingConfiguration::validate`]).
    ///
    /// # Example
    ///
    /// ```rust
    /// use pemfc_rs::physics::OperatingConfiguration;
    /// use pemfc_rs::model::PolarizationModel;
    ///
    /// let model = PolarizationModel::new(OperatingConfiguration::default());
    /// assert!(model.is_ok());
    /// ```
    pub fn new(configuration: OperatingConfiguration) -> ModelResult<Self> {
        configuration.validate()?;
        Ok(Self { configuration })
    }

    /// The configuration this model was built with.
    pub fn configuration(&self) -> &OperatingConfiguration {
        &self.configuration
    }

    /// Limiting current density i_lim \[A/cm²\] (strict upper bound on samples).
    pub fn limiting_current_density(&self) -> f64 {
        self.configuration.limiting_current_density
    }

    // ==================================== Voltage terms ====================================

    /// Open-circuit (Nernst) voltage \[V\].
    ///
    /// Standard reversible potential with a linearized temperature correction
    /// and the pressure (Nernst) term for the reactant partial pressures.
    /// Independent of current density.
    pub fn nernst_voltage(&self) -> f64 {
        let c = &self.configuration;

        // Reversible potential drifts down slightly above 25 °C
        let e_standard_t =
            c.reference_voltage - TEMPERATURE_COEFFICIENT * (c.temperature - STANDARD_TEMPERATURE);

        // Pressure correction: higher reactant pressure raises the voltage
        let rt_nf = GAS_CONSTANT * c.temperature / (ELECTRONS_PER_REACTION * FARADAY_CONSTANT);
        let pressure_term = rt_nf * (c.pressure_h2 * c.pressure_o2.sqrt()).ln();

        e_standard_t + pressure_term
    }

    /// Activation overpotential η_act \[V\] (Tafel kinetics).
    ///
    /// Exactly 0 at `i = 0` (no reaction, no loss) and monotone
    /// non-decreasing in `i`. The i/i₀ ratio is clamped to a small positive
    /// epsilon before the logarithm, and the result to ≥ 0, so the term never
    /// goes non-finite or negative for tiny currents.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidInput`] for negative or non-finite `i`.
    pub fn activation_loss(&self, current_density: f64) -> ModelResult<f64> {
        self.validate_current(current_density)?;

        if current_density == 0.0 {
            return Ok(0.0);
        }

        let c = &self.configuration;
        let ratio = (current_density / c.exchange_current_density).max(LOG_RATIO_EPSILON);

        // Below i0 the raw Tafel term goes negative; a loss is a magnitude
        Ok((c.tafel_slope * ratio.ln()).max(0.0))
    }

    /// Ohmic overpotential η_ohm \[V\]: `i · ASR`.
    ///
    /// Linear resistive drop, zero at `i = 0`.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidInput`] for negative or non-finite `i`.
    pub fn ohmic_loss(&self, current_density: f64) -> ModelResult<f64> {
        self.validate_current(current_density)?;
        Ok(current_density * self.configuration.area_specific_resistance)
    }

    /// Concentration overpotential η_conc \[V\]: `−B·ln(1 − i/i_lim)`.
    ///
    /// Grows without bound as `i → i_lim⁻`.
    ///
    /// # Errors
    ///
    /// - [`ModelError::InvalidInput`] for negative or non-finite `i`
    /// - [`ModelError::ExceedsLimitingCurrent`] for `i ≥ i_lim`; the model's
    ///   validity domain is strictly `[0, i_lim)`
    pub fn concentration_loss(&self, current_density: f64) -> ModelResult<f64> {
        self.validate_current(current_density)?;

        let c = &self.configuration;
        if current_density >= c.limiting_current_density {
            return Err(ModelError::ExceedsLimitingCurrent {
                current_density,
                limiting_current_density: c.limiting_current_density,
            });
        }

        if current_density == 0.0 {
            // -B * ln(1.0) is -0.0, which formats as "-0.000000" in exports
            return Ok(0.0);
        }

        let remaining = 1.0 - current_density / c.limiting_current_density;
        Ok(-c.concentration_loss_coefficient * remaining.ln())
    }

    /// Compute the full [`CurvePoint`] at one current density.
    ///
    /// Combines all four voltage terms; the cell voltage is explicitly
    /// clamped to ≥ 0 (a cell driven past its losses has failed, not gone
    /// negative). Failures from the individual terms propagate unchanged.
    pub fn cell_voltage(&self, current_density: f64) -> ModelResult<CurvePoint> {
        let nernst_voltage = self.nernst_voltage();
        let activation_loss = self.activation_loss(current_density)?;
        let ohmic_loss = self.ohmic_loss(current_density)?;
        let concentration_loss = self.concentration_loss(current_density)?;

        let cell_voltage =
            (nernst_voltage - activation_loss - ohmic_loss - concentration_loss).max(0.0);

        Ok(CurvePoint {
            current_density,
            nernst_voltage,
            activation_loss,
            ohmic_loss,
            concentration_loss,
            cell_voltage,
            power_density: cell_voltage * current_density,
        })
    }

    // ====================================== Helpers ======================================

    #[inline]
    fn validate_current(&self, current_density: f64) -> ModelResult<()> {
        if !current_density.is_finite() || current_density < 0.0 {
            return Err(ModelError::InvalidInput { current_density });
        }
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn typical_model() -> PolarizationModel {
        PolarizationModel::new(OperatingConfiguration::default()).unwrap()
    }

    // ====== Construction ======

    #[test]
    fn test_new_validates_configuration() {
        let bad = OperatingConfiguration::default().with_temperature(0.0);
        let err = PolarizationModel::new(bad).unwrap_err();
        assert!(matches!(err, ModelError::InvalidConfiguration { .. }));
    }

    // ====== Nernst voltage ======

    #[test]
    fn test_nernst_at_ambient_pressure() {
        // At 1 atm / 1 atm the pressure term vanishes:
        // E = 1.229 - 0.85e-3 * (353.15 - 298.15) = 1.18225 V
        let model = typical_model();
        let e = model.nernst_voltage();
        assert!((e - 1.18225).abs() < 1e-5, "E_nernst = {}", e);
    }

    #[test]
    fn test_nernst_increases_with_pressure() {
        let ambient = typical_model();
        let pressurized = PolarizationModel::new(
            OperatingConfiguration::default().with_pressures(3.0, 3.0),
        )
        .unwrap();

        assert!(pressurized.nernst_voltage() > ambient.nernst_voltage());
    }

    #[test]
    fn test_nernst_decreases_with_temperature() {
        let cool = PolarizationModel::new(
            OperatingConfiguration::default().with_temperature(300.0),
        )
        .unwrap();
        let hot = typical_model();

        assert!(hot.nernst_voltage() < cool.nernst_voltage());
    }

    // ====== Activation loss ======

    #[test]
    fn test_activation_loss_is_zero_at_zero_current() {
        let model = typical_model();
        assert_eq!(model.activation_loss(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_activation_loss_is_monotone() {
        let model = typical_model();
        let mut previous = 0.0;
        for k in 1..200 {
            let i = k as f64 * 0.01;
            let loss = model.activation_loss(i).unwrap();
            assert!(loss >= previous, "activation loss decreased at i = {}", i);
            previous = loss;
        }
    }

    #[test]
    fn test_activation_loss_tiny_current_stays_finite() {
        // i far below i0: the log argument would be <= 0 in f64 without the
        // ratio clamp. The loss must come back finite and >= 0.
        let model = typical_model();
        let loss = model.activation_loss(1e-300).unwrap();
        assert!(loss.is_finite());
        assert!(loss >= 0.0);
    }

    #[test]
    fn test_activation_loss_below_exchange_current_is_zero() {
        // i < i0 makes the raw Tafel term negative; losses are magnitudes
        let model = typical_model();
        let loss = model.activation_loss(1e-4).unwrap();
        assert_eq!(loss, 0.0);
    }

    #[test]
    fn test_activation_loss_rejects_negative_current() {
        let model = typical_model();
        let err = model.activation_loss(-0.5).unwrap_err();
        assert!(matches!(err, ModelError::InvalidInput { .. }));
    }

    #[test]
    fn test_activation_loss_rejects_nan() {
        let model = typical_model();
        let err = model.activation_loss(f64::NAN).unwrap_err();
        assert!(matches!(err, ModelError::InvalidInput { .. }));
    }

    // ====== Ohmic loss ======

    #[test]
    fn test_ohmic_loss_is_linear() {
        let model = typical_model();
        assert_eq!(model.ohmic_loss(0.0).unwrap(), 0.0);

        let at_one = model.ohmic_loss(1.0).unwrap();
        let at_two = model.ohmic_loss(2.0).unwrap();
        assert!((at_one - 0.2).abs() < 1e-12);
        assert!((at_two - 2.0 * at_one).abs() < 1e-12);
    }

    // ====== Concentration loss ======

    #[test]
    fn test_concentration_loss_is_zero_at_zero_current() {
        let model = typical_model();
        let loss = model.concentration_loss(0.0).unwrap();
        assert_eq!(loss, 0.0);
        // Positive zero, not the -0.0 a raw -B*ln(1.0) would give; -0.0
        // would leak into formatted output as "-0.000000".
        assert!(loss.is_sign_positive());
    }

    #[test]
    fn test_concentration_loss_diverges_near_limit() {
        let model = typical_model();
        let mid = model.concentration_loss(1.0).unwrap();
        let near = model.concentration_loss(1.999).unwrap();
        let nearer = model.concentration_loss(1.999_999).unwrap();

        assert!(near > mid);
        assert!(nearer > near);
        assert!(nearer > 0.1, "loss should blow up near i_lim, got {}", nearer);
    }

    #[test]
    fn test_concentration_loss_at_limit_fails() {
        let model = typical_model();
        let err = model.concentration_loss(2.0).unwrap_err();
        assert_eq!(
            err,
            ModelError::ExceedsLimitingCurrent {
                current_density: 2.0,
                limiting_current_density: 2.0,
            }
        );
    }

    #[test]
    fn test_concentration_loss_beyond_limit_fails() {
        let model = typical_model();
        let err = model.concentration_loss(2.5).unwrap_err();
        assert!(matches!(err, ModelError::ExceedsLimitingCurrent { .. }));
    }

    // ====== Cell voltage ======

    #[test]
    fn test_cell_voltage_at_nominal_point() {
        // Published PEM behavior: 0.7-0.85 V at 1.0 A/cm² for these parameters
        let model = typical_model();
        let point = model.cell_voltage(1.0).unwrap();

        assert!(
            point.cell_voltage > 0.7 && point.cell_voltage < 0.85,
            "V_cell(1.0) = {}",
            point.cell_voltage
        );
        assert!((point.power_density - point.cell_voltage).abs() < 1e-12);
    }

    #[test]
    fn test_cell_voltage_is_clamped_to_zero() {
        // A huge resistance drives the raw voltage negative; the point must
        // clamp to exactly 0 rather than report a negative cell voltage.
        let config = OperatingConfiguration::default().with_resistance(10.0);
        let model = PolarizationModel::new(config).unwrap();

        let point = model.cell_voltage(1.0).unwrap();
        assert_eq!(point.cell_voltage, 0.0);
        assert_eq!(point.power_density, 0.0);
        // The individual loss terms are still reported un-clamped
        assert!(point.ohmic_loss > point.nernst_voltage);
    }

    #[test]
    fn test_cell_voltage_propagates_error_kind() {
        let model = typical_model();

        let err = model.cell_voltage(-1.0).unwrap_err();
        assert!(matches!(err, ModelError::InvalidInput { .. }));

        let err = model.cell_voltage(2.0).unwrap_err();
        assert!(matches!(err, ModelError::ExceedsLimitingCurrent { .. }));
    }

    #[test]
    fn test_cell_voltage_terms_are_consistent() {
        let model = typical_model();
        let point = model.cell_voltage(0.8).unwrap();

        let reconstructed = point.nernst_voltage
            - point.activation_loss
            - point.ohmic_loss
            - point.concentration_loss;

        assert!((point.cell_voltage - reconstructed).abs() < 1e-12);
        assert!((point.power_density - point.cell_voltage * 0.8).abs() < 1e-12);
    }
}
