use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Boreas climate hazard point-query engine.
#[derive(Parser)]
#[command(
    name = "boreas",
    version,
    about = "Point queries and risk classification over gridded climate hazard data"
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
    /// Classify every cell of every year and write the risk table.
    Export(ExportArgs),
    /// Resolve a coordinate to its nearest cell and print risk results.
    Query(QueryArgs),
}

/// Arguments for the `export` subcommand.
#[derive(clap::Args)]
pub struct ExportArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "boreas.toml")]
    pub config: PathBuf,

    /// Override output Parquet path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `query` subcommand.
#[derive(clap::Args)]
pub struct QueryArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "boreas.toml")]
    pub config: PathBuf,

    /// Year to query (not needed with --history).
    #[arg(short, long, required_unless_present = "history")]
    pub year: Option<i32>,

    /// Query latitude in degrees north.
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Query longitude in degrees east.
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// Restrict the query to one named dataset.
    #[arg(short, long)]
    pub dataset: Option<String>,

    /// Print the per-year series at the resolved cell instead of one year.
    #[arg(long, requires = "dataset")]
    pub history: bool,
}
