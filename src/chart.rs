//! Line-movement series
//!
//! Turns a quote history into the plottable series behind a movement
//! chart: one value per observation plus the money-flow annotations.
//! Rendering stays with the consumer; the CLI ships this as JSON.

use crate::odds;
use crate::quote::{MarketType, Quote};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One plottable observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPoint {
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,
    /// Posted line for Spread/Total, decimal odds for Moneyline
    pub value: Decimal,
    /// Trace label: team name, or over/under for totals
    pub label: String,
    pub american_odds: Decimal,
    /// Implied-probability change vs the opener, in points
    pub flow_delta: Decimal,
    /// Absolute flow, suitable for marker sizing
    pub flow_magnitude: Decimal,
}

/// Everything a renderer needs for one market's movement chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementSeries {
    pub market: MarketType,
    pub team: Option<String>,
    /// First plotted value, drawn as the dotted opening reference
    pub open_value: Decimal,
    pub points: Vec<ChartPoint>,
}

/// Derive the movement series for one market.
///
/// Total charts both sides of the number at once, so `team` is ignored
/// there; Spread and Moneyline need a `team` and return `None` without
/// one. Quotes must already be in chronological order. Returns `None`
/// when nothing matches the filter or nothing plottable remains.
pub fn movement_series(
    quotes: &[Quote],
    market: MarketType,
    team: Option<&str>,
) -> Option<MovementSeries> {
    let filtered: Vec<&Quote> = match market {
        MarketType::Total => quotes
            .iter()
            .filter(|q| q.market_type == MarketType::Total)
            .collect(),
        _ => {
            let team = team?;
            quotes
                .iter()
                .filter(|q| q.market_type == market && q.team.as_deref() == Some(team))
                .collect()
        }
    };

    // Flow is measured against the opening quote of the filtered set,
    // whether or not that row ends up plottable.
    let opener_prob = odds::implied_probability(filtered.first()?.decimal_odds);

    let points: Vec<ChartPoint> = filtered
        .iter()
        .filter_map(|q| {
            let value = match market {
                MarketType::Moneyline => q.decimal_odds,
                _ => q.line?,
            };
            let label = match market {
                MarketType::Total => q.side.map(|s| s.to_string()).unwrap_or_default(),
                _ => q.team.clone().unwrap_or_default(),
            };
            let flow_delta = (odds::implied_probability(q.decimal_odds) - opener_prob) * dec!(100);
            Some(ChartPoint {
                timestamp: q.timestamp,
                value,
                label,
                american_odds: q.american_odds,
                flow_delta,
                flow_magnitude: flow_delta.abs(),
            })
        })
        .collect();

    let open_value = points.first()?.value;
    Some(MovementSeries {
        market,
        team: team.map(str::to_string),
        open_value,
        points,
    })
}
