//! Operating configuration for the polarization model
//!
//! `OperatingConfiguration` bundles every fixed physical and operating
//! parameter of a run. It is constructed once, validated once, and never
//! mutated during a sweep — every curve point in a run is therefore computed
//! under identical conditions.
//!
//! # Validation
//!
//! Parameters are checked by [`OperatingConfiguration::validate`], which
//! returns [`ModelError::InvalidConfiguration`] naming the offending field.
//! Nothing in this crate silently substitutes a default for a bad value.
//!
//! # Example
//!
//! ```rust
//! use pemfc_rs::physics::OperatingConfiguration;
//!
//! // Typical 80 °C PEM cell, then raise the reactant pressures
//! let config = OperatingConfiguration::default()
//!     .with_pressures(3.0, 3.0);
//!
//! config.validate().expect("valid PEM parameters");
//! ```

use crate::physics::constants::{
    ELECTRONS_PER_REACTION, FARADAY_CONSTANT, GAS_CONSTANT, STANDARD_REVERSIBLE_VOLTAGE,
};
use crate::physics::error::{ModelError, ModelResult};

// =================================================================================================
// Operating Configuration
// =================================================================================================

/// Fixed physical and operating parameters of a single-cell, steady-state,
/// isothermal PEM fuel cell run.
///
/// # Units
///
/// Current densities are per unit of active area \[A/cm²\], resistances are
/// area-specific \[Ω·cm²\], so voltages come out in volts and power densities
/// in W/cm² without further conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingConfiguration {
    /// Absolute cell temperature T \[K\]
    pub temperature: f64,

    /// Hydrogen partial pressure at the anode \[atm\]
    pub pressure_h2: f64,

    /// Oxygen partial pressure at the cathode \[atm\]
    pub pressure_o2: f64,

    /// Standard reversible potential E⁰ at reference conditions \[V\]
    pub reference_voltage: f64,

    /// Exchange current density i₀ \[A/cm²\] (reaction rate at equilibrium)
    pub exchange_current_density: f64,

    /// Tafel slope b \[V\]; the activation loss is b·ln(i/i₀)
    pub tafel_slope: f64,

    /// Area-specific resistance of membrane and contacts \[Ω·cm²\]
    pub area_specific_resistance: f64,

    /// Limiting current density i_lim \[A/cm²\]; strict upper bound of the
    /// model's validity domain
    pub limiting_current_density: f64,

    /// Empirical scaling constant B of the mass-transport term \[V\]
    pub concentration_loss_coefficient: f64,
}

impl Default for OperatingConfiguration {
    /// Typical 80 °C PEM cell at ambient reactant pressures.
    ///
    /// The kinetic defaults follow the common semi-empirical choices:
    /// Tafel slope R·T/(2·α·F) with charge-transfer coefficient α = 0.5 and
    /// mass-transport coefficient R·T/(2·F), both evaluated at 353.15 K.
    fn default() -> Self {
        let temperature = 353.15;
        let rt_nf = GAS_CONSTANT * temperature / (ELECTRONS_PER_REACTION * FARADAY_CONSTANT);

        Self {
            temperature,
            pressure_h2: 1.0,
            pressure_o2: 1.0,
            reference_voltage: STANDARD_REVERSIBLE_VOLTAGE,
            exchange_current_density: 1e-3,
            // alpha = 0.5 doubles the RT/2F slope
            tafel_slope: 2.0 * rt_nf,
            area_specific_resistance: 0.2,
            limiting_current_density: 2.0,
            concentration_loss_coefficient: rt_nf,
        }
    }
}

impl OperatingConfiguration {
    /// Validate every parameter against its physical range.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidConfiguration`] naming the first offending
    /// parameter, its value, and the violated constraint.
    pub fn validate(&self) -> ModelResult<()> {
        Self::require_positive("temperature", self.temperature)?;
        Self::require_positive("pressure_h2", self.pressure_h2)?;
        Self::require_positive("pressure_o2", self.pressure_o2)?;
        Self::require_positive("reference_voltage", self.reference_voltage)?;
        Self::require_positive("exchange_current_density", self.exchange_current_density)?;
        Self::require_positive("tafel_slope", self.tafel_slope)?;
        Self::require_non_negative("area_specific_resistance", self.area_specific_resistance)?;
        Self::require_positive("limiting_current_density", self.limiting_current_density)?;
        Self::require_non_negative(
            "concentration_loss_coefficient",
            self.concentration_loss_coefficient,
        )?;
        Ok(())
    }

    fn require_positive(parameter: &'static str, value: f64) -> ModelResult<()> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ModelError::InvalidConfiguration {
                parameter,
                value,
                requirement: "finite and strictly positive",
            });
        }
        Ok(())
    }

    fn require_non_negative(parameter: &'static str, value: f64) -> ModelResult<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(ModelError::InvalidConfiguration {
                parameter,
                value,
                requirement: "finite and non-negative",
            });
        }
        Ok(())
    }

    // ====================================== Builders ======================================

    /// Builder pattern: set cell temperature \[K\]
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Builder pattern: set reactant partial pressures \[atm\]
    pub fn with_pressures(mut self, pressure_h2: f64, pressure_o2: f64) -> Self {
        self.pressure_h2 = pressure_h2;
        self.pressure_o2 = pressure_o2;
        self
    }

    /// Builder pattern: set activation kinetics (exchange current density
    /// \[A/cm²\] and Tafel slope \[V\])
    pub fn with_kinetics(mut self, exchange_current_density: f64, tafel_slope: f64) -> Self {
        self.exchange_current_density = exchange_current_density;
        self.tafel_slope = tafel_slope;
        self
    }

    /// Builder pattern: set area-specific resistance \[Ω·cm²\]
    pub fn with_resistance(mut self, area_specific_resistance: f64) -> Self {
        self.area_specific_resistance = area_specific_resistance;
        self
    }

    /// Builder pattern: set mass-transport parameters (limiting current
    /// density \[A/cm²\] and concentration-loss coefficient \[V\])
    pub fn with_mass_transport(
        mut self,
        limiting_current_density: f64,
        concentration_loss_coefficient: f64,
    ) -> Self {
        self.limiting_current_density = limiting_current_density;
        self.concentration_loss_coefficient = concentration_loss_coefficient;
        self
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = OperatingConfiguration::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_matches_typical_pem_values() {
        let config = OperatingConfiguration::default();
        assert_eq!(config.temperature, 353.15);
        assert_eq!(config.reference_voltage, 1.229);
        assert_eq!(config.limiting_current_density, 2.0);

        // RT/2F at 353.15 K is ~15.2 mV
        assert!((config.concentration_loss_coefficient - 0.01522).abs() < 1e-4);
        // alpha = 0.5 gives a ~30.4 mV Tafel slope
        assert!((config.tafel_slope - 0.03043).abs() < 1e-4);
    }

    #[test]
    fn test_negative_temperature_rejected() {
        let config = OperatingConfiguration::default().with_temperature(-10.0);
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidConfiguration { parameter: "temperature", .. }
        ));
    }

    #[test]
    fn test_zero_pressure_rejected() {
        let config = OperatingConfiguration::default().with_pressures(0.0, 1.0);
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidConfiguration { parameter: "pressure_h2", .. }
        ));
    }

    #[test]
    fn test_nan_parameter_rejected() {
        let config = OperatingConfiguration::default().with_kinetics(f64::NAN, 0.03);
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidConfiguration {
                parameter: "exchange_current_density",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_resistance_is_valid() {
        // An idealized membrane with no ohmic drop is physically admissible
        let config = OperatingConfiguration::default().with_resistance(0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_resistance_rejected() {
        let config = OperatingConfiguration::default().with_resistance(-0.1);
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidConfiguration {
                parameter: "area_specific_resistance",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_limiting_current_rejected() {
        let config = OperatingConfiguration::default().with_mass_transport(0.0, 0.015);
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidConfiguration {
                parameter: "limiting_current_density",
                ..
            }
        ));
    }

    #[test]
    fn test_builders_compose() {
        let config = OperatingConfiguration::default()
            .with_temperature(333.15)
            .with_pressures(2.0, 1.5)
            .with_resistance(0.15)
            .with_mass_transport(1.8, 0.016);

        assert_eq!(config.temperature, 333.15);
        assert_eq!(config.pressure_h2, 2.0);
        assert_eq!(config.pressure_o2, 1.5);
        assert_eq!(config.area_specific_resistance, 0.15);
        assert_eq!(config.limiting_current_density, 1.8);
        assert!(config.validate().is_ok());
    }
}
