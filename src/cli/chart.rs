//! Chart command implementation

use crate::chart;
use crate::config::Config;
use crate::loader;
use crate::quote::MarketType;
use anyhow::{bail, Context};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ChartArgs {
    /// Quote history CSV; falls back to input.quotes_file from config
    pub file: Option<PathBuf>,

    /// Market to chart: spread, total, or moneyline
    #[arg(long, default_value = "spread")]
    pub market: String,

    /// Team for spread/moneyline charts
    #[arg(long)]
    pub team: Option<String>,

    /// Write the series JSON here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl ChartArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let market = MarketType::parse(&self.market)
            .with_context(|| format!("unknown market {:?}", self.market))?;
        if market != MarketType::Total && self.team.is_none() {
            bail!("--team is required for {} charts", market);
        }

        let path = self
            .file
            .clone()
            .or_else(|| config.input.quotes_file.clone())
            .context("no quote file given; pass a path or set input.quotes_file")?;
        let quotes = loader::load_quotes(&path)?;

        let series = chart::movement_series(&quotes, market, self.team.as_deref())
            .context("no plottable quotes for that market")?;
        let json = serde_json::to_string_pretty(&series)?;

        match &self.output {
            Some(output) => {
                std::fs::write(output, json)
                    .with_context(|| format!("failed to write {}", output.display()))?;
                tracing::info!(path = %output.display(), "chart series written");
            }
            None => println!("{}", json),
        }

        Ok(())
    }
}
