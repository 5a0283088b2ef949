//! CLI interface for line-scout
//!
//! Provides subcommands for:
//! - `analyze`: Rank smart-money signals from a quote history
//! - `chart`: Emit line-movement series as JSON
//! - `config`: Show effective configuration

mod analyze;
mod chart;

pub use analyze::AnalyzeArgs;
pub use chart::ChartArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "line-scout")]
#[command(about = "Smart-money analytics for pre-game betting line movement")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a quote history and rank smart-money signals
    Analyze(AnalyzeArgs),
    /// Emit line-movement chart series as JSON
    Chart(ChartArgs),
    /// Show effective configuration
    Config,
}
