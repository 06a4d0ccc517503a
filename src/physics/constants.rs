//! Physical constants and numerical tolerances
//!
//! Universal constants used by the electrochemical model, plus the
//! numerical-stability epsilon applied to the Tafel logarithm.

// =================================================================================================
// Universal Constants
// =================================================================================================

/// Ideal gas constant R \[J/(mol·K)\]
pub const GAS_CONSTANT: f64 = 8.314;

/// Faraday constant F \[C/mol\]
pub const FARADAY_CONSTANT: f64 = 96_485.0;

/// Electrons transferred per H₂ molecule in the overall cell reaction
pub const ELECTRONS_PER_REACTION: f64 = 2.0;

// =================================================================================================
// Standard State
// =================================================================================================

/// Standard reference temperature \[K\] (25 °C)
pub const STANDARD_TEMPERATURE: f64 = 298.15;

/// Standard reversible cell potential at 25 °C \[V\]
pub const STANDARD_REVERSIBLE_VOLTAGE: f64 = 1.229;

/// Linearized temperature coefficient of the reversible potential \[V/K\]
///
/// dE/dT for the H₂/O₂ reaction; the reversible voltage drops slightly as
/// the cell heats up.
pub const TEMPERATURE_COEFFICIENT: f64 = 0.85e-3;

// =================================================================================================
// Numerical Tolerances
// =================================================================================================

/// Lower clamp for the i/i₀ ratio inside the Tafel logarithm.
///
/// Keeps ln(i/i₀) finite when i is many orders of magnitude below the
/// exchange current density. This is a numerical-stability policy, not a
/// physical statement: the activation loss is separately clamped to ≥ 0,
/// so the clamp value never leaks into results.
pub const LOG_RATIO_EPSILON: f64 = 1e-12;

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thermal_voltage_magnitude() {
        // RT/2F at standard temperature is ~12.8 mV; a gross constant typo
        // would show up here immediately.
        let rt_2f = GAS_CONSTANT * STANDARD_TEMPERATURE
            / (ELECTRONS_PER_REACTION * FARADAY_CONSTANT);
        assert!(rt_2f > 0.012 && rt_2f < 0.014, "RT/2F = {}", rt_2f);
    }

    #[test]
    fn test_epsilon_is_small_and_positive() {
        assert!(LOG_RATIO_EPSILON > 0.0);
        assert!(LOG_RATIO_EPSILON < 1e-6);
    }
}
