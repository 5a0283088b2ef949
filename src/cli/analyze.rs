//! Analyze command implementation

use crate::config::Config;
use crate::engine::AnalyticsEngine;
use crate::loader;
use crate::report;
use anyhow::Context;
use clap::Args;
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Quote history CSV; falls back to input.quotes_file from config
    pub file: Option<PathBuf>,

    /// Override the spread recommendation buffer
    #[arg(long)]
    pub spread_buffer: Option<Decimal>,

    /// Override the total recommendation buffer
    #[arg(long)]
    pub total_buffer: Option<Decimal>,

    /// Emit signals as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl AnalyzeArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let path = self
            .file
            .clone()
            .or_else(|| config.input.quotes_file.clone())
            .context("no quote file given; pass a path or set input.quotes_file")?;

        let quotes = loader::load_quotes(&path)?;

        let mut analysis = config.analysis.clone();
        if let Some(buffer) = self.spread_buffer {
            analysis.spread_buffer = buffer;
        }
        if let Some(buffer) = self.total_buffer {
            analysis.total_buffer = buffer;
        }

        let engine = AnalyticsEngine::new(quotes, analysis);
        let signals = engine.analyze_all();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&signals)?);
        } else {
            print!("{}", report::format_table(engine.matchup(), &signals));
        }

        Ok(())
    }
}
