use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Chronos ARIMA model preparation.
#[derive(Parser)]
#[command(
    name = "chronos",
    version,
    about = "Prepare ARIMA models for estimation"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Build a model from config and write its initial parameter vector.
    Init(InitArgs),
}

/// Arguments for the `init` subcommand.
#[derive(clap::Args)]
pub struct InitArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "chronos.toml")]
    pub config: PathBuf,

    /// Override the observation file from config.
    #[arg(short, long)]
    pub series: Option<PathBuf>,

    /// Write the JSON report here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Treat a model with nothing to estimate as an error.
    #[arg(long)]
    pub strict: bool,
}
