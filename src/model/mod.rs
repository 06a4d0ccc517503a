//! The electrochemical loss model
//!
//! [`PolarizationModel`] evaluates the semi-empirical single-cell model: the
//! open-circuit (Nernst) voltage and the three overpotential terms that are
//! subtracted from it. The sweep driver calls [`PolarizationModel::cell_voltage`]
//! once per sample — the model is responsible for the electrochemistry, the
//! sweep for the curve generation.
//!
//! # The three loss regions
//!
//! A polarization curve has three characteristic regions, each dominated by
//! one overpotential:
//!
//! - **Activation** (low i): slow electrode kinetics, logarithmic in i
//! - **Ohmic** (mid i): membrane/contact resistance, linear in i
//! - **Concentration** (i → i_lim): reactant starvation, divergent at i_lim
//!
//! Every operation is a pure function of the configuration and the current
//! density: no mutable session state, no I/O, no retry semantics.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod polarization;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use polarization::PolarizationModel;
