use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// dlmcast Bayesian dynamic linear model forecaster.
#[derive(Parser)]
#[command(
    name = "dlmcast",
    version,
    about = "Count-series forecasting with a discounted dynamic linear model"
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
    /// Fit the model to the input series and forecast past its end.
    Forecast(ForecastArgs),
    /// Check the selected input columns for missing values.
    Check(CheckArgs),
}

/// Arguments for the `forecast` subcommand.
#[derive(clap::Args)]
pub struct ForecastArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "dlmcast.toml")]
    pub config: PathBuf,

    /// Override output Parquet path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the number of forecast steps from config.
    #[arg(long)]
    pub pred: Option<usize>,

    /// Override the number of held-out trailing observations from config.
    #[arg(long)]
    pub cut: Option<usize>,
}

/// Arguments for the `check` subcommand.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "dlmcast.toml")]
    pub config: PathBuf,
}
