//! Example: 80 °C PEM cell polarization study
//!
//! Runs the full pipeline against a typical 80 °C PEM parameter set with
//! pressurized reactants:
//!
//! - Sweep: 100 samples from 0 up to i_lim − 0.05 A/cm²
//! - Console report: loss breakdown near 1.0 A/cm² and the peak power point
//! - Files: polarization + power + loss-breakdown PNG plots, CSV export
//!
//! **Parameters** (typical PEM values):
//! - T = 353.15 K (80 °C)
//! - P_H2 = P_O2 = 3.0 atm
//! - i₀ = 1e-3 A/cm² (exchange current density)
//! - ASR = 0.2 Ω·cm² (membrane resistance)
//! - i_lim = 1.8 A/cm² (limiting current density)

use pemfc_rs::{
    model::PolarizationModel,
    output::{
        export::{export_polarization_csv, CsvConfig, CsvMetadata},
        visualization::{plot_loss_breakdown, plot_polarization_curve, plot_power_density},
    },
    physics::OperatingConfiguration,
    sweep::CurrentSweep,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  PEM Fuel Cell - Polarization Study");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Operating conditions ======

    let config = OperatingConfiguration::default()
        .with_pressures(3.0, 3.0)
        .with_mass_transport(1.8, 0.0152);

    println!("Operating Conditions:");
    println!("  T (temperature) : {} K", config.temperature);
    println!("  P_H2            : {} atm", config.pressure_h2);
    println!("  P_O2            : {} atm", config.pressure_o2);
    println!("  i0 (exchange)   : {} A/cm²", config.exchange_current_density);
    println!("  b (Tafel slope) : {:.4} V", config.tafel_slope);
    println!("  ASR             : {} Ω·cm²", config.area_specific_resistance);
    println!("  i_lim           : {} A/cm²", config.limiting_current_density);
    println!();

    // ====== Sweep ======

    let model = PolarizationModel::new(config)?;

    // Keep a margin below i_lim: the model is undefined at the limit itself
    let max_current = model.limiting_current_density() - 0.05;
    let curve = CurrentSweep::linear(max_current, 100).run(&model)?;

    println!("Sweep: {} points over [0, {:.2}] A/cm²", curve.len(), max_current);
    println!("Open-circuit voltage: {:.4} V\n", model.nernst_voltage());

    // ====== Loss breakdown near the nominal operating point ======

    let nominal = curve
        .nearest(1.0)
        .expect("sweep produced at least one point");

    println!("--- Results at {:.2} A/cm² ---", nominal.current_density);
    println!("Cell Voltage:       {:.4} V", nominal.cell_voltage);
    println!("Loss Breakdown:");
    println!("  - Activation Loss: {:.4} V (starting the reaction)", nominal.activation_loss);
    println!("  - Ohmic Loss:      {:.4} V (resistance)", nominal.ohmic_loss);
    println!("  - Mass Transport:  {:.4} V (gas starvation)", nominal.concentration_loss);

    if let Some(peak) = curve.peak_power() {
        println!(
            "Max Power Peak:     {:.4} W/cm² at {:.2} A/cm²",
            peak.power_density, peak.current_density
        );
    }
    println!();

    // ====== Plots ======

    plot_polarization_curve(&curve, "polarization.png", None)?;
    plot_power_density(&curve, "power_density.png", None)?;
    plot_loss_breakdown(&curve, "loss_breakdown.png", None)?;

    println!("Plots written: polarization.png, power_density.png, loss_breakdown.png");

    // ====== CSV export ======

    let metadata = CsvMetadata::from_configuration(model.configuration());
    let csv_config = CsvConfig::default().with_metadata(metadata);
    export_polarization_csv(&curve, "polarization.csv", Some(&csv_config))?;

    println!("Data written: polarization.csv");

    Ok(())
}
