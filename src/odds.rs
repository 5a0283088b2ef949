//! American odds conversion
//!
//! Bookmakers quote American odds as a signed number (-150, +120). The
//! engine works in decimal odds and implied probabilities throughout, so
//! every quote is normalized exactly once on the way in.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Convert American odds to decimal odds.
///
/// Positive (underdog) quotes pay `odds/100` per unit staked; negative
/// (favorite) quotes require `|odds|/100` staked to win one unit. Both
/// branches yield a payout factor strictly greater than 1 for any valid
/// nonzero quote. Zero is undefined input and simply falls through the
/// non-negative branch.
pub fn american_to_decimal(american: Decimal) -> Decimal {
    if american >= Decimal::ZERO {
        Decimal::ONE + american / dec!(100)
    } else {
        Decimal::ONE - dec!(100) / american
    }
}

/// Implied probability embedded in decimal odds.
///
/// Guards degenerate input: non-positive odds yield probability 0 instead
/// of a division error.
pub fn implied_probability(decimal_odds: Decimal) -> Decimal {
    if decimal_odds > Decimal::ZERO {
        Decimal::ONE / decimal_odds
    } else {
        Decimal::ZERO
    }
}
