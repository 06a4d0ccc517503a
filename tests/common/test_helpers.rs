//! Helper functions for integration tests

use pemfc_rs::model::PolarizationModel;
use pemfc_rs::physics::OperatingConfiguration;

/// Typical 80 °C PEM configuration used across the integration tests.
///
/// Matches the concrete scenario from published experimental PEM data:
/// reference voltage 1.229 V, temperature 353.15 K, moderate kinetic and
/// resistance parameters, limiting current density 2.0 A/cm².
pub fn typical_configuration() -> OperatingConfiguration {
    OperatingConfiguration::default()
}

/// Ready-to-use model over the typical configuration.
pub fn typical_model() -> PolarizationModel {
    PolarizationModel::new(typical_configuration()).expect("typical configuration is valid")
}

/// Relative error |actual − expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected == 0.0 {
        actual.abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}
