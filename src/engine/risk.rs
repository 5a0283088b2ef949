//! Risk classification
//!
//! Maps a signal score to the three-tier label shown to bettors. The hex
//! colors ride along for presentation layers (table styling, legends);
//! the engine itself only ever cares about the tier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-tier risk label derived from a signal score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    /// Score 7-10: the market moved decisively toward the selection
    Low,
    /// Score 5-6: mixed evidence
    Medium,
    /// Score 1-4: the move argues against the selection
    High,
}

impl RiskLevel {
    /// Classify a score. Defined for every score the engine can emit (and
    /// any other u8, for that matter).
    pub fn from_score(score: u8) -> Self {
        if score >= 7 {
            Self::Low
        } else if score >= 5 {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Hex color used by presentation layers: neon green, yellow, red.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Low => "#00ff41",
            Self::Medium => "#ffff00",
            Self::High => "#ff0000",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        };
        f.write_str(label)
    }
}
