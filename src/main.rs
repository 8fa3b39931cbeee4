//! nuvac CLI - Quick vacuum oscillation probability calculations
//!
//! Run with: `cargo run --release -- --theta23-deg 90 --energy-gev 1 --baseline-km 3000`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use nuvac::units::Angle;
use nuvac::{probability_matrix, OscillationConfig, Particle, Preset, ProbabilityMatrix};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "nuvac",
    about = "Three-flavor vacuum neutrino oscillation probabilities",
    allow_negative_numbers = true
)]
struct Cli {
    /// Reference parameter set (pdg2013, pdg2016, pdg2020)
    #[arg(long)]
    preset: Option<Preset>,

    /// JSON config file; command-line values override it
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    theta12_deg: Option<f64>,

    #[arg(long)]
    theta13_deg: Option<f64>,

    #[arg(long)]
    theta23_deg: Option<f64>,

    #[arg(long)]
    delta_cp_deg: Option<f64>,

    /// Δm²21 in eV²
    #[arg(long)]
    dm2_21_ev2: Option<f64>,

    /// Δm²32 in eV² (negative for inverted ordering)
    #[arg(long)]
    dm2_32_ev2: Option<f64>,

    #[arg(long)]
    energy_gev: Option<f64>,

    #[arg(long)]
    baseline_km: Option<f64>,

    /// Print antineutrino probabilities
    #[arg(long)]
    antineutrino: bool,

    /// Enable verbose debug output
    #[arg(long)]
    verbose: bool,
}

/// `--verbose` wins, then `RUST_LOG`, then warnings only.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn init_tracing(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<OscillationConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            OscillationConfig::from_json(&json)?
        }
        None => OscillationConfig::default(),
    };

    let overrides = [
        (&mut config.theta12_deg, cli.theta12_deg),
        (&mut config.theta13_deg, cli.theta13_deg),
        (&mut config.theta23_deg, cli.theta23_deg),
        (&mut config.delta_cp_deg, cli.delta_cp_deg),
        (&mut config.dm2_21_ev2, cli.dm2_21_ev2),
        (&mut config.dm2_32_ev2, cli.dm2_32_ev2),
        (&mut config.energy_gev, cli.energy_gev),
        (&mut config.baseline_km, cli.baseline_km),
    ];
    for (slot, value) in overrides {
        if value.is_some() {
            *slot = value;
        }
    }
    if cli.preset.is_some() {
        config.preset = cli.preset;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let params = load_config(&cli)?
        .to_parameters()
        .context("invalid oscillation parameters")?;
    let particle = if cli.antineutrino {
        Particle::Antineutrino
    } else {
        Particle::Neutrino
    };

    println!("nuvac - Vacuum Neutrino Oscillation Probabilities");
    println!("=================================================\n");
    println!("{params}");
    println!("Mass ordering: {:?}\n", params.mass_ordering());

    let probs = probability_matrix(&params, particle);
    match particle {
        Particle::Neutrino => println!("Neutrino Oscillation Probabilities:"),
        Particle::Antineutrino => println!("Antineutrino Oscillation Probabilities:"),
    }
    print_matrix(&probs);

    tracing::debug!(defect = params.pmns().unitarity_defect(), "PMNS unitarity check");

    // Show how the appearance channel moves with the Dirac phase.
    println!("\nP(μ → e) vs δCP:");
    for delta in [0.0, 90.0, 180.0, 270.0] {
        let mut scan = params;
        scan.set_delta_cp(Angle::degrees(delta));
        let p = probability_matrix(&scan, particle)[1][0];
        println!("  δ = {:>5.1}°  {:>9.6}", delta, p);
    }

    // Inverted ordering with the same |Δm²31|.
    let mut inverted = params;
    inverted.set_dm2_31(-params.dm2_31());
    println!(
        "\nP(μ → e) with flipped ordering (Δm²31 = {:.3e} eV²): {:.6}",
        inverted.dm2_31().as_ev2(),
        probability_matrix(&inverted, particle)[1][0]
    );

    Ok(())
}

fn print_matrix(probs: &ProbabilityMatrix) {
    println!("         e          μ          τ");
    let labels = ['e', 'μ', 'τ'];
    for (i, row) in probs.iter().enumerate() {
        println!(
            "  {} → {:>9.6}  {:>9.6}  {:>9.6}",
            labels[i], row[0], row[1], row[2]
        );
    }
}
