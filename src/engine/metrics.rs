//! Window metrics
//!
//! Compares where a market opened against where it sits now. Each
//! (market, selection) pair gets an opening and a closing window over its
//! quote history; the shift in implied probability between the two is the
//! money-flow indicator the scorer runs on.

use crate::odds;
use crate::quote::{MarketType, Quote};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Minimum quotes a pair needs before its windows mean anything.
pub const MIN_SAMPLES: usize = 5;

/// Open/close window comparison for one (market, selection) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowMetrics {
    /// Mean line over the opening window (0 for Moneyline)
    pub open_line: Decimal,
    /// Mean line over the closing window (0 for Moneyline)
    pub close_line: Decimal,
    /// Implied-probability shift open→close, in percentage points
    pub money_flow: Decimal,
    /// Mean decimal odds over the closing window
    pub current_odds: Decimal,
}

/// Compute window metrics over a chronologically ordered selection of
/// quotes.
///
/// Returns `None` below [`MIN_SAMPLES`]. Windows are the first and last
/// `max(3, 15%)` quotes; on short histories they overlap, which is
/// accepted. Lines are fixed at 0 for Moneyline, where they carry no
/// meaning.
pub fn compute(market: MarketType, quotes: &[&Quote]) -> Option<WindowMetrics> {
    if quotes.len() < MIN_SAMPLES {
        return None;
    }

    let n = window_len(quotes.len());
    let open = &quotes[..n];
    let close = &quotes[quotes.len() - n..];

    let avg_open_odds = mean_odds(open);
    let avg_close_odds = mean_odds(close);

    let (open_line, close_line) = match market {
        MarketType::Moneyline => (Decimal::ZERO, Decimal::ZERO),
        _ => (mean_line(open), mean_line(close)),
    };

    let prob_open = odds::implied_probability(avg_open_odds);
    let prob_close = odds::implied_probability(avg_close_odds);

    Some(WindowMetrics {
        open_line,
        close_line,
        money_flow: (prob_close - prob_open) * dec!(100),
        current_odds: avg_close_odds,
    })
}

/// Window size: 15% of the history, never fewer than 3 quotes.
fn window_len(count: usize) -> usize {
    (count * 15 / 100).max(3)
}

fn mean_odds(quotes: &[&Quote]) -> Decimal {
    let sum: Decimal = quotes.iter().map(|q| q.decimal_odds).sum();
    sum / Decimal::from(quotes.len())
}

/// Mean of the posted lines, skipping quotes without one. A window with no
/// lines at all degrades to 0 rather than poisoning downstream
/// comparisons.
fn mean_line(quotes: &[&Quote]) -> Decimal {
    let lines: Vec<Decimal> = quotes.iter().filter_map(|q| q.line).collect();
    if lines.is_empty() {
        return Decimal::ZERO;
    }
    let sum: Decimal = lines.iter().sum();
    sum / Decimal::from(lines.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::Side;
    use rust_decimal_macros::dec;

    fn quote(market: MarketType, american: Decimal, line: Option<Decimal>) -> Quote {
        Quote::new(
            None,
            market,
            Some(Side::Home),
            Some("Clippers".to_string()),
            american,
            line,
        )
    }

    fn refs(quotes: &[Quote]) -> Vec<&Quote> {
        quotes.iter().collect()
    }

    #[test]
    fn test_below_minimum_yields_none() {
        let quotes: Vec<Quote> = (0..4)
            .map(|_| quote(MarketType::Spread, dec!(-110), Some(dec!(-3.5))))
            .collect();
        assert!(compute(MarketType::Spread, &refs(&quotes)).is_none());
    }

    #[test]
    fn test_window_len_floors_at_three() {
        assert_eq!(window_len(5), 3);
        assert_eq!(window_len(19), 3);
        assert_eq!(window_len(20), 3);
        assert_eq!(window_len(26), 3);
        assert_eq!(window_len(27), 4);
        assert_eq!(window_len(100), 15);
    }

    #[test]
    fn test_overlapping_windows_accepted() {
        // Five quotes, window of three: both windows share the middle one.
        let mut quotes = Vec::new();
        for line in [dec!(-3.0), dec!(-3.0), dec!(-4.0), dec!(-5.0), dec!(-5.0)] {
            quotes.push(quote(MarketType::Spread, dec!(-110), Some(line)));
        }
        let metrics = compute(MarketType::Spread, &refs(&quotes)).unwrap();
        // open = mean(-3, -3, -4), close = mean(-4, -5, -5)
        assert_eq!(metrics.open_line, dec!(-10.0) / dec!(3));
        assert_eq!(metrics.close_line, dec!(-14.0) / dec!(3));
    }

    #[test]
    fn test_constant_odds_have_zero_flow() {
        let quotes: Vec<Quote> = (0..10)
            .map(|_| quote(MarketType::Moneyline, dec!(-150), None))
            .collect();
        let metrics = compute(MarketType::Moneyline, &refs(&quotes)).unwrap();
        assert_eq!(metrics.money_flow, Decimal::ZERO);
    }

    #[test]
    fn test_shortening_odds_push_flow_positive() {
        // Odds shorten from +120 to -140: probability moved toward the team.
        let mut quotes = Vec::new();
        for _ in 0..3 {
            quotes.push(quote(MarketType::Moneyline, dec!(120), None));
        }
        for _ in 0..3 {
            quotes.push(quote(MarketType::Moneyline, dec!(-140), None));
        }
        let metrics = compute(MarketType::Moneyline, &refs(&quotes)).unwrap();
        assert!(metrics.money_flow > Decimal::ZERO);
    }

    #[test]
    fn test_drifting_odds_push_flow_negative() {
        let mut quotes = Vec::new();
        for _ in 0..3 {
            quotes.push(quote(MarketType::Moneyline, dec!(-140), None));
        }
        for _ in 0..3 {
            quotes.push(quote(MarketType::Moneyline, dec!(120), None));
        }
        let metrics = compute(MarketType::Moneyline, &refs(&quotes)).unwrap();
        assert!(metrics.money_flow < Decimal::ZERO);
    }

    #[test]
    fn test_moneyline_lines_pinned_to_zero() {
        // Even if stray line values appear, Moneyline ignores them.
        let quotes: Vec<Quote> = (0..6)
            .map(|_| quote(MarketType::Moneyline, dec!(-150), Some(dec!(7.5))))
            .collect();
        let metrics = compute(MarketType::Moneyline, &refs(&quotes)).unwrap();
        assert_eq!(metrics.open_line, Decimal::ZERO);
        assert_eq!(metrics.close_line, Decimal::ZERO);
    }

    #[test]
    fn test_current_odds_is_closing_average() {
        let mut quotes = Vec::new();
        for _ in 0..3 {
            quotes.push(quote(MarketType::Moneyline, dec!(100), None));
        }
        for _ in 0..3 {
            quotes.push(quote(MarketType::Moneyline, dec!(-300), None));
        }
        let metrics = compute(MarketType::Moneyline, &refs(&quotes)).unwrap();
        // Closing window is three identical -300 quotes.
        assert_eq!(metrics.current_odds, Decimal::ONE + dec!(100) / dec!(300));
    }

    #[test]
    fn test_missing_lines_skipped_in_window_mean() {
        let mut quotes = vec![
            quote(MarketType::Total, dec!(-110), Some(dec!(210.0))),
            quote(MarketType::Total, dec!(-110), None),
            quote(MarketType::Total, dec!(-110), Some(dec!(212.0))),
        ];
        for _ in 0..3 {
            quotes.push(quote(MarketType::Total, dec!(-110), Some(dec!(214.0))));
        }
        let metrics = compute(MarketType::Total, &refs(&quotes)).unwrap();
        // Opening window holds {210, None, 212} → mean of the two present.
        assert_eq!(metrics.open_line, dec!(211.0));
        assert_eq!(metrics.close_line, dec!(214.0));
    }

    #[test]
    fn test_all_lines_missing_degrades_to_zero() {
        let quotes: Vec<Quote> = (0..6)
            .map(|_| quote(MarketType::Spread, dec!(-110), None))
            .collect();
        let metrics = compute(MarketType::Spread, &refs(&quotes)).unwrap();
        assert_eq!(metrics.open_line, Decimal::ZERO);
        assert_eq!(metrics.close_line, Decimal::ZERO);
    }
}
