//! Quote index
//!
//! Groups the snapshot by (market, selection) once at engine construction
//! so each metrics pass walks a pre-filtered list instead of rescanning
//! the whole history.

use super::{MarketType, Quote, Selection, Side};
use std::collections::HashMap;

/// Ordered quote positions grouped by market and selection
#[derive(Debug, Default)]
pub struct QuoteIndex {
    groups: HashMap<(MarketType, Selection), Vec<usize>>,
}

impl QuoteIndex {
    /// Build the index over a chronologically ordered snapshot.
    ///
    /// Total quotes group by over/under side; Spread and Moneyline quotes
    /// group by team. Quotes missing the relevant field are left out, as
    /// no selection filter could ever match them.
    pub fn build(quotes: &[Quote]) -> Self {
        let mut groups: HashMap<(MarketType, Selection), Vec<usize>> = HashMap::new();

        for (pos, quote) in quotes.iter().enumerate() {
            let selection = match quote.market_type {
                MarketType::Total => match quote.side {
                    Some(Side::Over) => Selection::Over,
                    Some(Side::Under) => Selection::Under,
                    _ => continue,
                },
                _ => match &quote.team {
                    Some(team) => Selection::Team(team.clone()),
                    None => continue,
                },
            };
            groups
                .entry((quote.market_type, selection))
                .or_default()
                .push(pos);
        }

        Self { groups }
    }

    /// Positions (in snapshot order) of quotes matching the pair; empty
    /// when the pair never appears.
    pub fn get(&self, market: MarketType, selection: &Selection) -> &[usize] {
        self.groups
            .get(&(market, selection.clone()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct (market, selection) groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when no quote was indexable.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
