//! line-scout: smart-money analytics for pre-game betting line movement
//!
//! This library provides the core components for:
//! - Quote history loading from collector CSV files
//! - American/decimal odds conversion and implied probability
//! - Home/away matchup detection with graceful fallback
//! - Open/close window metrics and money-flow measurement
//! - Heuristic signal scoring and risk classification
//! - Ranked signal aggregation across Spread/Total/Moneyline
//! - Chart-series derivation for external renderers
//! - CLI report rendering

pub mod chart;
pub mod cli;
pub mod config;
pub mod engine;
pub mod loader;
pub mod matchup;
pub mod odds;
pub mod quote;
pub mod report;
pub mod telemetry;
