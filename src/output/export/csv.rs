//! CSV export functionality for polarization curves
//!
//! This module writes a computed curve to CSV (Comma-Separated Values)
//! format, compatible with Excel, Python pandas, MATLAB, and most data
//! analysis tools.
//!
//! # Features
//!
//! - **Full loss breakdown**: one column per voltage term
//! - **Metadata support**: optional header comments with run parameters
//! - **Customizable**: delimiter, decimal separator, precision
//!
//! # Quick Example
//!
//! ```rust,ignore
//! use pemfc_rs::output::export::export_polarization_csv;
//!
//! export_polarization_csv(&curve, "curve.csv", None)?;
//! ```
//!
//! **Output** (`curve.csv`):
//! ```csv
//! Current Density (A/cm2),Nernst Voltage (V),Activation Loss (V),Ohmic Loss (V),Concentration Loss (V),Cell Voltage (V),Power Density (W/cm2)
//! 0.000000,1.182250,0.000000,0.000000,0.000000,1.182250,0.000000
//! 0.010000,1.182250,0.070064,0.002000,0.000076,1.110110,0.011101
//! ...
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! use pemfc_rs::output::export::{export_polarization_csv, CsvConfig, CsvMetadata};
//!
//! let metadata = CsvMetadata::from_configuration(model.configuration());
//! let config = CsvConfig::default().with_metadata(metadata);
//!
//! export_polarization_csv(&curve, "curve.csv", Some(&config))?;
//! ```
//!
//! **Output** (`curve.csv`):
//! ```csv
//! # PEM Fuel Cell Polarization Data
//! # Generated: 2026-08-25T15:30:00Z
//! # Temperature: 353.15 K
//! # P_H2: 1 atm
//! # P_O2: 1 atm
//! # Limiting Current Density: 2 A/cm2
//! #
//! Current Density (A/cm2),...
//! ```

use std::error::Error;
use std::fs::File;
use std::io::Write;

use crate::physics::{OperatingConfiguration, PolarizationCurve};

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     delimiter: ';',        // European CSV
///     precision: 10,         // High precision
///     ..Default::default()
/// };
/// ```
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// Create config with European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Create config with high precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional. Only non-None fields are included in the header.
#[derive(Clone, Default)]
pub struct CsvMetadata {
    /// Cell temperature (K)
    pub temperature: Option<f64>,

    /// Hydrogen partial pressure (atm)
    pub pressure_h2: Option<f64>,

    /// Oxygen partial pressure (atm)
    pub pressure_o2: Option<f64>,

    /// Area-specific resistance (Ω·cm²)
    pub area_specific_resistance: Option<f64>,

    /// Limiting current density (A/cm²)
    pub limiting_current_density: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Create metadata from an operating configuration
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let metadata = CsvMetadata::from_configuration(model.configuration());
    /// ```
    pub fn from_configuration(configuration: &OperatingConfiguration) -> Self {
        Self {
            temperature: Some(configuration.temperature),
            pressure_h2: Some(configuration.pressure_h2),
            pressure_o2: Some(configuration.pressure_o2),
            area_specific_resistance: Some(configuration.area_specific_resistance),
            limiting_current_density: Some(configuration.limiting_current_density),
            custom: Vec::new(),
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments to file
fn write_metadata_header(file: &mut File, metadata: &CsvMetadata) -> Result<(), Box<dyn Error>> {
    writeln!(file, "# PEM Fuel Cell Polarization Data")?;

    // Timestamp (current time)
    let now = chrono::Utc::now();
    writeln!(file, "# Generated: {}", now.to_rfc3339())?;

    if let Some(t) = metadata.temperature {
        writeln!(file, "# Temperature: {} K", t)?;
    }
    if let Some(p) = metadata.pressure_h2 {
        writeln!(file, "# P_H2: {} atm", p)?;
    }
    if let Some(p) = metadata.pressure_o2 {
        writeln!(file, "# P_O2: {} atm", p)?;
    }
    if let Some(r) = metadata.area_specific_resistance {
        writeln!(file, "# Area Specific Resistance: {} Ohm.cm2", r)?;
    }
    if let Some(i) = metadata.limiting_current_density {
        writeln!(file, "# Limiting Current Density: {} A/cm2", i)?;
    }

    // Custom parameters
    for (key, value) in &metadata.custom {
        writeln!(file, "# {}: {}", key, value)?;
    }

    // Separator
    writeln!(file, "#")?;

    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    // Replace decimal separator if needed
    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export a polarization curve to CSV
///
/// Writes one row per curve point with the full loss breakdown, in curve
/// order, with an optional metadata header.
///
/// # Arguments
///
/// * `curve` - Computed polarization curve
/// * `output_path` - Output file path
/// * `configuration` - Optional CSV configuration (uses default if None)
///
/// # Errors
///
/// - Empty curve
/// - File creation/write errors
///
/// # Example
///
/// ```rust,ignore
/// export_polarization_csv(&curve, "polarization.csv", None)?;
/// ```
pub fn export_polarization_csv(
    curve: &PolarizationCurve,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    if curve.is_empty() {
        return Err("Empty curve: nothing to export".into());
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Header ===========================

    let d = configuration.delimiter;
    writeln!(
        file,
        "Current Density (A/cm2){d}Nernst Voltage (V){d}Activation Loss (V){d}\
         Ohmic Loss (V){d}Concentration Loss (V){d}Cell Voltage (V){d}Power Density (W/cm2)"
    )?;

    // ============================= Write Data =============================

    for point in curve.iter() {
        let columns = [
            point.current_density,
            point.nernst_voltage,
            point.activation_loss,
            point.ohmic_loss,
            point.concentration_loss,
            point.cell_voltage,
            point.power_density,
        ];

        let row: Vec<String> = columns
            .iter()
            .map(|&value| format_number(value, configuration))
            .collect();

        writeln!(file, "{}", row.join(&d.to_string()))?;
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
