//! Heuristic signal scoring
//!
//! A flat sequence of additive adjustments on a neutral baseline. The
//! money-flow rule always applies; exactly one market rule joins it,
//! picked by market type. A single pure function over a closed set of
//! variants, with no per-market types.

use super::metrics::WindowMetrics;
use crate::quote::{MarketType, Selection};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Neutral starting score before any adjustment.
const BASELINE: i32 = 5;

/// Score a (market, selection) pair from its window metrics, clamped to
/// `1..=10`.
pub fn score(market: MarketType, metrics: &WindowMetrics, selection: &Selection) -> u8 {
    let mut score = BASELINE;

    if metrics.money_flow > dec!(0.5) {
        score += 2;
    } else if metrics.money_flow < dec!(-0.5) {
        score -= 2;
    }

    match market {
        MarketType::Spread => {
            // A line moving toward the selection is the smart-money tell;
            // any non-decrease (unchanged included) counts against it.
            if metrics.close_line < metrics.open_line {
                score += 2;
            } else {
                score -= 1;
            }
        }
        MarketType::Total => {
            let flow_in = metrics.money_flow > Decimal::ZERO;
            match selection {
                Selection::Over if metrics.close_line < metrics.open_line && flow_in => score += 3,
                Selection::Under if metrics.close_line > metrics.open_line && flow_in => score += 3,
                _ => {}
            }
        }
        MarketType::Moneyline => {
            if metrics.money_flow > dec!(1.5) {
                score += 3;
            }
        }
    }

    score.clamp(1, 10) as u8
}
