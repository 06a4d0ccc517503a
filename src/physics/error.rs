//! Typed error kinds for the polarization model
//!
//! Three things can go wrong in this crate, and each is its own kind so that
//! callers (and tests) can match on them rather than parse messages:
//!
//! - a physical parameter is outside its valid range ([`ModelError::InvalidConfiguration`])
//! - a current-density sample is negative or non-finite ([`ModelError::InvalidInput`])
//! - a sample sits at or beyond the limiting current density
//!   ([`ModelError::ExceedsLimitingCurrent`])
//!
//! All errors are surfaced immediately to the caller with no local recovery:
//! the model is a deterministic closed-form computation, not a system with
//! transient faults. Every variant carries the offending value so a reporting
//! layer can say exactly which sample or parameter failed.

use thiserror::Error;

/// Error kinds produced by the polarization model and the sweep driver.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A physical parameter is non-positive or non-finite where positivity
    /// is required.
    #[error("invalid configuration: {parameter} = {value} (must be {requirement})")]
    InvalidConfiguration {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Value it was given
        value: f64,
        /// Human-readable constraint (e.g. "strictly positive")
        requirement: &'static str,
    },

    /// A current-density sample is negative or non-finite.
    #[error("invalid current density {current_density} A/cm² (must be finite and >= 0)")]
    InvalidInput {
        /// The offending sample
        current_density: f64,
    },

    /// A current-density sample is at or beyond the limiting current density,
    /// outside the model's validity domain [0, i_lim).
    #[error(
        "current density {current_density} A/cm² is at or beyond the limiting \
         current density {limiting_current_density} A/cm²"
    )]
    ExceedsLimitingCurrent {
        /// The offending sample
        current_density: f64,
        /// The configured limiting current density
        limiting_current_density: f64,
    },
}

/// Crate-wide result alias.
pub type ModelResult<T> = Result<T, ModelError>;

// =================================================================================================
// Tests
// =================================================================================================
