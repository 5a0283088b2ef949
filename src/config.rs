//! Configuration types for line-scout

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Quote input configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputConfig {
    /// Default quote history file, used when the CLI gets no path
    #[serde(default)]
    pub quotes_file: Option<PathBuf>,
}

/// Analysis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Points added to the closing spread for the safe recommendation
    #[serde(default = "default_spread_buffer")]
    pub spread_buffer: Decimal,

    /// Points padding the closing total for the safe recommendation
    #[serde(default = "default_total_buffer")]
    pub total_buffer: Decimal,
}

fn default_spread_buffer() -> Decimal {
    Decimal::new(35, 1) // 3.5
}
fn default_total_buffer() -> Decimal {
    Decimal::new(60, 1) // 6.0
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            spread_buffer: Decimal::new(35, 1),
            total_buffer: Decimal::new(60, 1),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
