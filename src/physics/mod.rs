//! Core physical types
//!
//! This module provides the data model shared by the rest of the crate:
//!
//! - **Operating Configuration**: immutable physical and operating parameters
//! - **Curve Point / Polarization Curve**: the computed results
//! - **Model Error**: typed failure kinds
//!
//! # Architecture
//!
//! The configuration is **separate from the model**:
//! - `OperatingConfiguration` holds the parameters (the conditions)
//! - `PolarizationModel` evaluates the electrochemistry under them
//!
//! This separation keeps every curve point in one run computed under
//! identical, never-mutated conditions, and makes the model trivially
//! testable: build a configuration, hand it to the model, compare numbers.
//!
//! # Example
//!
//! ```rust
//! use pemfc_rs::physics::OperatingConfiguration;
//!
//! let config = OperatingConfiguration::default()
//!     .with_temperature(353.15)
//!     .with_pressures(3.0, 3.0);
//!
//! assert!(config.validate().is_ok());
//! ```

// module declaration
pub mod config;
pub mod constants;
pub mod curve;
pub mod error;

// re-export commonly used types for convenience
pub use config::OperatingConfiguration;
pub use curve::{CurvePoint, PolarizationCurve};
pub use error::{ModelError, ModelResult};
