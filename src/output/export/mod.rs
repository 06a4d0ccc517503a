//! Data export for polarization curves
//!
//! Currently CSV only. The exported file carries one row per curve point
//! with every voltage term, so the full loss breakdown can be re-analyzed
//! in external tools without re-running the model.

pub mod csv;

pub use csv::{export_polarization_csv, CsvConfig, CsvMetadata};
