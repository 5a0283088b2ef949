//! Quote domain types
//!
//! A quote is one bookmaker observation for a single event: a market, the
//! side or team it refers to, American odds, and (for Spread/Total) the
//! posted line. The loader owns normalization; by the time a [`Quote`]
//! exists its decimal odds are derived and its malformed fields are
//! sentinels, never surprises.

mod index;

pub use index::QuoteIndex;

use crate::odds;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Betting market kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketType {
    /// Point-handicap market
    Spread,
    /// Combined-score over/under market
    Total,
    /// Straight-win market
    Moneyline,
}

impl MarketType {
    /// Parse a market label as it appears in quote feeds. Unknown labels
    /// are malformed input, not errors.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("spread") {
            Some(Self::Spread)
        } else if label.eq_ignore_ascii_case("total") {
            Some(Self::Total)
        } else if label.eq_ignore_ascii_case("moneyline") {
            Some(Self::Moneyline)
        } else {
            None
        }
    }
}

impl fmt::Display for MarketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Spread => "Spread",
            Self::Total => "Total",
            Self::Moneyline => "Moneyline",
        };
        f.write_str(label)
    }
}

/// Which side of a market a quote refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
    Over,
    Under,
}

impl Side {
    /// Parse a side label. Unknown labels map to `None` so a bad feed
    /// degrades detection instead of failing it.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "home" => Some(Self::Home),
            "away" => Some(Self::Away),
            "over" => Some(Self::Over),
            "under" => Some(Self::Under),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Home => "home",
            Self::Away => "away",
            Self::Over => "over",
            Self::Under => "under",
        };
        f.write_str(label)
    }
}

/// One timestamped market observation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Observation time; `None` marks a timestamp the loader could not parse
    pub timestamp: Option<DateTime<Utc>>,
    /// Market this quote belongs to
    pub market_type: MarketType,
    /// home/away for Spread/Moneyline, over/under for Total; `None` when
    /// the feed label was missing or malformed
    pub side: Option<Side>,
    /// Team the quote is for; absent on Total quotes
    pub team: Option<String>,
    /// Odds as quoted, signed American style
    pub american_odds: Decimal,
    /// Posted line; absent for Moneyline
    pub line: Option<Decimal>,
    /// Decimal payout factor, derived once from `american_odds`
    pub decimal_odds: Decimal,
}

impl Quote {
    /// Build a quote, deriving the decimal odds exactly once.
    pub fn new(
        timestamp: Option<DateTime<Utc>>,
        market_type: MarketType,
        side: Option<Side>,
        team: Option<String>,
        american_odds: Decimal,
        line: Option<Decimal>,
    ) -> Self {
        Self {
            timestamp,
            market_type,
            side,
            team,
            american_odds,
            line,
            decimal_odds: odds::american_to_decimal(american_odds),
        }
    }
}

/// What a metric or signal is about: a team for Spread/Moneyline, a side
/// of the total for Total.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection {
    Team(String),
    Over,
    Under,
}

impl Selection {
    /// Convenience constructor for team selections.
    pub fn team(name: impl Into<String>) -> Self {
        Self::Team(name.into())
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Team(name) => f.write_str(name),
            Self::Over => f.write_str("over"),
            Self::Under => f.write_str("under"),
        }
    }
}
