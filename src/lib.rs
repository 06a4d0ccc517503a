//! pemfc-rs: PEM Fuel Cell Polarization Simulation Framework
//!
//! A framework for computing the steady-state voltage and power output of a
//! Proton Exchange Membrane (PEM) fuel cell as a function of current density,
//! using a semi-empirical electrochemical model.
//!
//! # Architecture
//!
//! pemfc-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Sweep**
//!    - The model computes the voltage terms at one current density (the physics)
//!    - The sweep drives the model over a sample grid (the curve generation)
//!
//! 2. **Explicit validity domain**
//!    - Every physical parameter is validated up front
//!    - Current densities at or beyond the limiting value are hard errors,
//!      never silent extrapolations
//!
//! # Quick Start
//!
//! ```rust
//! use pemfc_rs::physics::OperatingConfiguration;
//! use pemfc_rs::model::PolarizationModel;
//! use pemfc_rs::sweep::CurrentSweep;
//!
//! # fn main() -> Result<(), pemfc_rs::physics::ModelError> {
//! // 1. Operating conditions (80 °C PEM cell, ambient pressure)
//! let config = OperatingConfiguration::default();
//!
//! // 2. Build the model (validates the configuration)
//! let model = PolarizationModel::new(config)?;
//!
//! // 3. Sweep current density from 0 up to and including 1.8 A/cm²
//! let curve = CurrentSweep::linear(1.8, 100).run(&model)?;
//!
//! // 4. Access results
//! println!("Curve points: {}", curve.len());
//! if let Some(peak) = curve.peak_power() {
//!     println!("Peak power: {:.4} W/cm² at {:.2} A/cm²",
//!              peak.power_density, peak.current_density);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Core types (configuration, curve points, errors)
//! - [`model`]: The electrochemical loss model (Nernst + three overpotentials)
//! - [`sweep`]: Curve-generation engine over current-density samples
//! - [`output`]: Result visualization and export

// Core modules
pub mod physics;

pub mod model;
pub mod sweep;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use pemfc_rs::prelude::*;
    //! ```
    pub use crate::physics::{CurvePoint,
                             ModelError,
                             ModelResult,
                             OperatingConfiguration,
                             PolarizationCurve};
    pub use crate::model::PolarizationModel;
    pub use crate::sweep::CurrentSweep;
}
