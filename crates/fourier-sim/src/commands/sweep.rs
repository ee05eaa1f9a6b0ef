use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use fourier_series::sweep_preset;
use fourier_sim::{load_config, write_report, RunConfig};
use tracing::info;

#[derive(Args, Debug)]
pub struct SweepArgs {
    /// YAML configuration describing the preset, interval and orders.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Output directory for sweep artefacts.
    #[arg(long)]
    pub out: PathBuf,
    /// Override the number of sample points.
    #[arg(long)]
    pub samples: Option<usize>,
    /// Override the truncation orders (comma separated).
    #[arg(long, value_delimiter = ',')]
    pub orders: Option<Vec<i64>>,
}

pub fn run(args: &SweepArgs) -> Result<(), Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => RunConfig::default(),
    };
    if let Some(samples) = args.samples {
        config.interval.samples = samples;
    }
    if let Some(orders) = &args.orders {
        config.sweep.orders = orders.clone();
    }
    config.validate()?;

    info!(
        preset = config.preset.name(),
        samples = config.interval.samples,
        orders = ?config.sweep.orders,
        "running sweep"
    );
    let domain = config.domain()?;
    let report = sweep_preset(&config.preset, &config.sweep, &domain)?;
    let artifacts = write_report(&args.out, &report)?;

    // Persist the effective configuration for reproducibility.
    fs::write(args.out.join("config.yaml"), config.to_yaml_string()?)?;

    for result in &report.orders {
        match result.mse {
            Some(mse) => println!("N = {:>5}  mse = {:.6e}", result.order, mse),
            None => println!("N = {:>5}", result.order),
        }
    }
    info!(
        json = %artifacts.json.display(),
        csv = %artifacts.csv.display(),
        hash = %report.report_hash,
        "sweep artefacts written"
    );
    Ok(())
}
