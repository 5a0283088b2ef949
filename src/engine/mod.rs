//! Analytics engine
//!
//! Orchestrates window metrics, scoring, and risk classification across
//! every market/selection pair of one event, then ranks the results. The
//! engine owns an immutable quote snapshot for exactly one analysis: no
//! I/O, no shared state, nothing cached between calls.

pub mod metrics;
pub mod risk;
pub mod score;

pub use metrics::{WindowMetrics, MIN_SAMPLES};
pub use risk::RiskLevel;

use crate::config::AnalysisConfig;
use crate::matchup::Matchup;
use crate::quote::{MarketType, Quote, QuoteIndex, Selection};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Selection label shown on Total signals.
const TOTAL_SELECTION: &str = "Puncte";

/// A ranked smart-money signal for one market/selection pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    /// Market label: SPREAD, TOTAL OVER, TOTAL UNDER, or MONEYLINE
    pub market: String,
    /// Team name, or "Puncte" for totals
    pub selection: String,
    /// Heuristic score, 1 (avoid) through 10 (strong)
    pub score: u8,
    /// Risk tier derived from the score
    pub risk: RiskLevel,
    /// Human-readable conservative recommendation
    pub safe_bet_line: String,
    /// Metrics the score was derived from
    pub metrics: WindowMetrics,
}

/// Window analytics over one event's quote history
pub struct AnalyticsEngine {
    quotes: Vec<Quote>,
    index: QuoteIndex,
    matchup: Matchup,
    config: AnalysisConfig,
}

impl AnalyticsEngine {
    /// Build an engine over a quote snapshot.
    ///
    /// The snapshot is sorted by timestamp (stable, sentinel `None`
    /// timestamps last), the matchup detected, and the market/selection
    /// index built, all at construction. The engine takes ownership: one
    /// instance, one analysis, then drop it.
    pub fn new(mut quotes: Vec<Quote>, config: AnalysisConfig) -> Self {
        quotes.sort_by_key(|q| (q.timestamp.is_none(), q.timestamp));
        let matchup = Matchup::detect(&quotes);
        let index = QuoteIndex::build(&quotes);
        Self {
            quotes,
            index,
            matchup,
            config,
        }
    }

    /// Engine with the default recommendation buffers.
    pub fn with_defaults(quotes: Vec<Quote>) -> Self {
        Self::new(quotes, AnalysisConfig::default())
    }

    /// Detected home/away pairing.
    pub fn matchup(&self) -> &Matchup {
        &self.matchup
    }

    /// Window metrics for one (market, selection) pair. `None` when the
    /// pair has too few quotes to say anything; the caller skips it.
    pub fn metrics(&self, market: MarketType, selection: &Selection) -> Option<WindowMetrics> {
        let selected: Vec<&Quote> = self
            .index
            .get(market, selection)
            .iter()
            .map(|&pos| &self.quotes[pos])
            .collect();
        metrics::compute(market, &selected)
    }

    /// Run all three market passes and rank the results by descending
    /// score.
    ///
    /// Pass order is Spread, Total, Moneyline, home before away and over
    /// before under; the sort is stable, so equal scores keep that order.
    /// Selections without enough quotes are omitted, never errors.
    pub fn analyze_all(&self) -> Vec<Signal> {
        let mut signals = Vec::new();

        // Spread: recommend the closing line padded by the buffer.
        for team in [&self.matchup.home, &self.matchup.away] {
            let selection = Selection::team(team.clone());
            if let Some(m) = self.metrics(MarketType::Spread, &selection) {
                let s = score::score(MarketType::Spread, &m, &selection);
                signals.push(Signal {
                    market: "SPREAD".to_string(),
                    selection: team.clone(),
                    score: s,
                    risk: RiskLevel::from_score(s),
                    safe_bet_line: format!(
                        "{} {}",
                        team,
                        fmt_line(m.close_line + self.config.spread_buffer)
                    ),
                    metrics: m,
                });
            }
        }

        // Total: the over recommendation tightens downward, the under
        // pads upward.
        for selection in [Selection::Over, Selection::Under] {
            if let Some(m) = self.metrics(MarketType::Total, &selection) {
                let s = score::score(MarketType::Total, &m, &selection);
                let (market, word, safe) = match selection {
                    Selection::Over => (
                        "TOTAL OVER",
                        "Over",
                        m.close_line - self.config.total_buffer,
                    ),
                    _ => (
                        "TOTAL UNDER",
                        "Under",
                        m.close_line + self.config.total_buffer,
                    ),
                };
                signals.push(Signal {
                    market: market.to_string(),
                    selection: TOTAL_SELECTION.to_string(),
                    score: s,
                    risk: RiskLevel::from_score(s),
                    safe_bet_line: format!("{} {}", word, fmt_line(safe)),
                    metrics: m,
                });
            }
        }

        // Moneyline: straight win for favorites, caution otherwise.
        for team in [&self.matchup.home, &self.matchup.away] {
            let selection = Selection::team(team.clone());
            if let Some(m) = self.metrics(MarketType::Moneyline, &selection) {
                let s = score::score(MarketType::Moneyline, &m, &selection);
                let recommendation = if m.current_odds < dec!(2.0) {
                    "Victorie (ML)".to_string()
                } else {
                    "Evită / H+ Alternativ".to_string()
                };
                signals.push(Signal {
                    market: "MONEYLINE".to_string(),
                    selection: team.clone(),
                    score: s,
                    risk: RiskLevel::from_score(s),
                    safe_bet_line: recommendation,
                    metrics: m,
                });
            }
        }

        // Stable sort: equal scores keep the pass order above.
        signals.sort_by(|a, b| b.score.cmp(&a.score));
        debug!(signals = signals.len(), "analysis complete");
        signals
    }
}

/// One-decimal line rendering ("219.0", "-2.0").
fn fmt_line(value: Decimal) -> String {
    format!("{:.1}", value.round_dp(1))
}
