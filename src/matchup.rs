//! Matchup detection
//!
//! Works out which two teams a quote history describes. Feeds usually
//! label sides cleanly; when they don't, detection degrades to the first
//! team names it can find rather than refusing to analyze.

use crate::quote::{Quote, Side};
use serde::{Deserialize, Serialize};

/// Placeholder for a side that could not be identified.
const UNKNOWN: &str = "Unknown";

/// Home/away pairing for one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    pub home: String,
    pub away: String,
}

impl Matchup {
    /// Identify home and away from side-labeled quotes.
    ///
    /// Primary path: the first quote labeled `home` with a team name, and
    /// likewise for `away`. If either lookup fails the whole pairing falls
    /// back to the first two distinct team names in encounter order, and
    /// any slot still unresolved becomes `"Unknown"`. Total function:
    /// never panics, even on an empty snapshot.
    pub fn detect(quotes: &[Quote]) -> Self {
        let labeled = |want: Side| {
            quotes.iter().find_map(|q| match (q.side, q.team.as_ref()) {
                (Some(side), Some(team)) if side == want => Some(team.clone()),
                _ => None,
            })
        };

        if let (Some(home), Some(away)) = (labeled(Side::Home), labeled(Side::Away)) {
            return Self { home, away };
        }

        // Best effort: first two distinct team names, in encounter order.
        let mut teams: Vec<&str> = Vec::new();
        for quote in quotes {
            if let Some(team) = quote.team.as_deref() {
                if !teams.contains(&team) {
                    teams.push(team);
                }
            }
            if teams.len() == 2 {
                break;
            }
        }

        Self {
            home: teams.first().map_or_else(|| UNKNOWN.to_string(), |t| t.to_string()),
            away: teams.get(1).map_or_else(|| UNKNOWN.to_string(), |t| t.to_string()),
        }
    }
}
