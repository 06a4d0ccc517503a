//! Static plot generation for polarization results
//!
//! This module uses the `plotters` library to generate high-quality static
//! images (PNG, SVG) of polarization curves, power-density curves, and the
//! per-region loss breakdown.
//!
//! # Features
//!
//! - **Direct PolarizationCurve support**: pass the sweep result as-is
//! - **High-quality output**: production-ready PNG and SVG images
//! - **Customizable**: PlotConfig for colors, labels, sizes
//!
//! # Example
//!
//! ```rust,ignore
//! use pemfc_rs::output::visualization::{plot_polarization_curve, plot_power_density};
//!
//! // Run sweep
//! let curve = CurrentSweep::linear(1.75, 100).run(&model)?;
//!
//! // Plot both curves
//! plot_polarization_curve(&curve, "polarization.png", None)?;
//! plot_power_density(&curve, "power.png", None)?;
//! ```
//!
//! # Example: Loss Breakdown
//!
//! ```rust,ignore
//! use pemfc_rs::output::visualization::{plot_loss_breakdown, PlotConfig};
//! use plotters::prelude::*;
//!
//! let mut config = PlotConfig::default();
//! config.title = "Where the voltage goes".to_string();
//! config.series_colors = Some(vec![RED, BLUE, GREEN]);
//!
//! plot_loss_breakdown(&curve, "losses.png", Some(&config))?;
//! ```

use plotters::prelude::*;
use std::error::Error;

// Import the result container from the physics module
use crate::physics::PolarizationCurve;

// =================================================================================================
// Configuration
// =================================================================================================

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `line_color`: Line color for single-series plots
/// - `series_colors`: Optional colors for multi-series plots (one per series)
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust,ignore
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::default();
/// config.title = "80 °C PEM Cell".to_string();
/// config.line_color = BLUE;
/// config.width = 1920;  // Full HD
/// config.height = 1080;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Polarization Curve")
    pub title: String,

    /// X-axis label (default: "Current Density (A/cm²)")
    pub xlabel: String,

    /// Y-axis label (default: "Cell Voltage (V)")
    pub ylabel: String,

    /// Line color for single-series plots (default: BLUE)
    pub line_color: RGBColor,

    /// Optional colors for multi-series plots (one per series)
    ///
    /// If None, uses default palette: [RED, BLUE, GREEN, MAGENTA, ...]
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Polarization Curve".to_string(),
            xlabel: "Current Density (A/cm²)".to_string(),
            ylabel: "Cell Voltage (V)".to_string(),
            line_color: BLUE,
            series_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

impl PlotConfig {
    /// Preset for the power-density curve
    pub fn power_density() -> Self {
        Self {
            title: "Power Density Curve".to_string(),
            ylabel: "Power Density (W/cm²)".to_string(),
            line_color: RGBColor(255, 140, 0), // Dark orange
            ..Default::default()
        }
    }

    /// Preset for the loss-breakdown plot
    pub fn loss_breakdown() -> Self {
        Self {
            title: "Overpotential Breakdown".to_string(),
            ylabel: "Voltage Loss (V)".to_string(),
            ..Default::default()
        }
    }

    /// Get color for series at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to default palette
    fn get_series_color(&self, series_index: usize) -> RGBColor {
        if let Some(ref colors) = self.series_colors {
            if series_index < colors.len() {
                return colors[series_index];
            }
        }

        // Default palette
        let default_colors = [
            RED,
            BLUE,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0), // Orange
            RGBColor(128, 0, 128), // Purple
        ];

        default_colors[series_index % default_colors.len()]
    }
}

// =================================================================================================
// Drawing Helpers
// =================================================================================================

/// Draw a single x/y series on any drawing area
fn draw_single_on_area<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    x_serie: &[f64],
    y_serie: &[f64],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    // Find ranges for axes
    let max_x = x_serie.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let max_y = y_serie.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min_y = y_serie.iter().cloned().fold(f64::INFINITY, f64::min);

    // Build margins (10% space), never below zero for voltage/power axes
    let y_range = max_y - min_y;
    let y_min = (min_y - 0.1 * y_range).max(0.0);
    let y_max = max_y + 0.1 * y_range;

    root.fill(&config.background)?;

    // Create chart
    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", 40.0).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..max_x, y_min..y_max)?;

    // Configure mesh
    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel).y_desc(&config.ylabel);

    if config.show_grid {
        mesh.draw()?;
    } else {
        mesh.disable_mesh().draw()?;
    }

    // Draw curve
    chart.draw_series(LineSeries::new(
        x_serie.iter().zip(y_serie.iter()).map(|(x, y)| (*x, *y)),
        config.line_color.stroke_width(config.line_width),
    ))?;

    root.present()?;
    Ok(())
}

/// Draw several labeled y-series over a shared x axis on any drawing area
fn draw_multi_on_area<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    x_serie: &[f64],
    y_series: &[Vec<f64>],
    series_names: &[&str],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    let n_series = y_series.len();

    // Find global ranges
    let max_x = x_serie.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let mut max_y = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;

    for serie in y_series {
        for &y in serie {
            max_y = max_y.max(y);
            min_y = min_y.min(y);
        }
    }

    let y_range = max_y - min_y;
    let y_min = (min_y - 0.1 * y_range).max(0.0);
    let y_max = max_y + 0.1 * y_range;

    root.fill(&config.background)?;

    // Create chart
    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", 40.0).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..max_x, y_min..y_max)?;

    // Configure mesh
    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel).y_desc(&config.ylabel);

    if config.show_grid {
        mesh.draw()?;
    } else {
        mesh.disable_mesh().draw()?;
    }

    // Draw lines for each series
    for i in 0..n_series {
        let color = config.get_series_color(i);
        chart
            .draw_series(LineSeries::new(
                x_serie.iter().zip(y_series[i].iter()).map(|(x, y)| (*x, *y)),
                color.stroke_width(config.line_width),
            ))?
            .label(series_names[i])
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(config.line_width))
            });
    }

    // Draw legend
    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Dispatch to PNG or SVG backend based on the output extension
fn plot_single(
    x_serie: &[f64],
    y_serie: &[f64],
    output_path: &str,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    if output_path.ends_with(".svg") {
        let root = SVGBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_single_on_area(&root, x_serie, y_serie, config)
    } else {
        let root =
            BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_single_on_area(&root, x_serie, y_serie, config)
    }
}

// =================================================================================================
// Plotting Functions
// =================================================================================================

/// Plot the polarization curve (cell voltage vs current density)
///
/// # Arguments
///
/// * `curve` - Computed polarization curve
/// * `output_path` - Output file path (.png or .svg)
/// * `config` - Optional PlotConfig (uses defaults if None)
///
/// # Errors
///
/// Returns error if the curve is empty, the file cannot be written, or
/// plotting fails.
///
/// # Example
///
/// ```rust,ignore
/// plot_polarization_curve(&curve, "polarization.png", None)?;
/// ```
pub fn plot_polarization_curve(
    curve: &PolarizationCurve,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if curve.is_empty() {
        return Err("Empty curve: nothing to plot".into());
    }

    let owned_config = config.cloned().unwrap_or_default();

    let currents = curve.current_densities();
    let voltages = curve.cell_voltages();

    plot_single(
        currents.as_slice(),
        voltages.as_slice(),
        output_path,
        &owned_config,
    )
}

/// Plot the power-density curve (power density vs current density)
///
/// # Example
///
/// ```rust,ignore
/// plot_power_density(&curve, "power.png", None)?;
/// ```
pub fn plot_power_density(
    curve: &PolarizationCurve,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if curve.is_empty() {
        return Err("Empty curve: nothing to plot".into());
    }

    let owned_config = config.cloned().unwrap_or_else(PlotConfig::power_density);

    let currents = curve.current_densities();
    let powers = curve.power_densities();

    plot_single(
        currents.as_slice(),
        powers.as_slice(),
        output_path,
        &owned_config,
    )
}

/// Plot the three overpotential terms overlaid against current density
///
/// Shows at a glance which loss region dominates where: activation at low
/// current, ohmic in the middle, concentration near the limiting current.
///
/// # Example
///
/// ```rust,ignore
/// plot_loss_breakdown(&curve, "losses.png", None)?;
/// ```
pub fn plot_loss_breakdown(
    curve: &PolarizationCurve,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if curve.is_empty() {
        return Err("Empty curve: nothing to plot".into());
    }

    let owned_config = config.cloned().unwrap_or_else(PlotConfig::loss_breakdown);

    let currents = curve.current_densities();
    let series = [
        curve.activation_losses().iter().cloned().collect::<Vec<_>>(),
        curve.ohmic_losses().iter().cloned().collect::<Vec<_>>(),
        curve.concentration_losses().iter().cloned().collect::<Vec<_>>(),
    ];
    let names = ["Activation", "Ohmic", "Concentration"];

    if output_path.ends_with(".svg") {
        let root = SVGBackend::new(output_path, (owned_config.width, owned_config.height))
            .into_drawing_area();
        draw_multi_on_area(&root, currents.as_slice(), &series, &names, &owned_config)
    } else {
        let root = BitMapBackend::new(output_path, (owned_config.width, owned_config.height))
            .into_drawing_area();
        draw_multi_on_area(&root, currents.as_slice(), &series, &names, &owned_config)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
