//! Visualization module for polarization results
//!
//! This module renders a computed curve using the `plotters` library.
//!
//! # Organization
//!
//! - **static_plots**: Static PNG/SVG images (polarization curve, power
//!   density, loss breakdown) plus the shared `PlotConfig`
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use pemfc_rs::output::visualization::{plot_polarization_curve, PlotConfig};
//!
//! // Plot with default config
//! plot_polarization_curve(&curve, "polarization.png", None)?;
//!
//! // Or with custom config
//! let mut config = PlotConfig::default();
//! config.title = "80 °C PEM Cell".to_string();
//! plot_polarization_curve(&curve, "cell.png", Some(&config))?;
//! ```
//!
//! # Which plot to use
//!
//! | Use Case | Function |
//! |----------|----------|
//! | Voltage vs current density | `plot_polarization_curve` |
//! | Power vs current density | `plot_power_density` |
//! | Where the voltage goes | `plot_loss_breakdown` |

pub mod static_plots;

pub use static_plots::{
    plot_loss_breakdown,
    plot_polarization_curve,
    plot_power_density,
    PlotConfig,
};
