use std::error::Error;
use std::io;

use clap::{Parser, Subcommand};
use commands::{
    presets::{self, PresetsArgs},
    sweep::{self, SweepArgs},
};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "fourier-sim", about = "Truncated Fourier series sweep CLI")]
struct Cli {
    /// Log filter used when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a preset over several truncation orders and write JSON/CSV artefacts.
    Sweep(SweepArgs),
    /// List the available coefficient presets.
    Presets(PresetsArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Command::Sweep(args) => sweep::run(&args),
        Command::Presets(args) => presets::run(&args),
    }
}
