//! Output module for polarization results
//!
//! This module provides tools to output a computed curve in various formats:
//! - **Visualization**: PNG/SVG plots using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots and graphics
//! │   ├── mod.rs
//! │   └── static_plots.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ## Visualization
//!
//! ```rust,ignore
//! use pemfc_rs::output::visualization::{plot_polarization_curve, PlotConfig};
//!
//! // Generate PNG plot
//! plot_polarization_curve(&curve, "polarization.png", None)?;
//! ```
//!
//! ## CSV Export
//!
//! ```rust,ignore
//! use pemfc_rs::output::export::{export_polarization_csv, CsvConfig};
//!
//! // Export to CSV
//! export_polarization_csv(&curve, "curve.csv", None)?;
//! ```
//!
//! # Design Philosophy
//!
//! The output module separates concerns:
//! - **Visualization**: For human interpretation (plots, graphs)
//! - **Export**: For programmatic analysis (CSV, spreadsheets, pandas)
//!
//! The core model never depends on a renderer: everything here consumes the
//! `PolarizationCurve` numeric columns and nothing else.

pub mod export;
pub mod visualization;

// Re-export commonly used items for convenience
pub use visualization::{
    plot_loss_breakdown,
    plot_polarization_curve,
    plot_power_density,
    PlotConfig,
};

pub use export::{export_polarization_csv, CsvConfig, CsvMetadata};
