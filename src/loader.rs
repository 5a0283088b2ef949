//! Quote history loading
//!
//! Reads one event's odds history from CSV into [`Quote`] values. Rows
//! that cannot produce a usable quote (unknown market, unparseable odds)
//! are skipped with a warning rather than failing the whole file; bad
//! timestamps and lines degrade to `None` so the row still counts.

use crate::quote::{MarketType, Quote, Side};
use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read CSV record: {0}")]
    Csv(#[from] csv::Error),
    #[error("no usable quotes in {}", .path.display())]
    Empty { path: PathBuf },
}

/// One CSV row as written by the collector, before validation. The
/// `odds` column carries American odds; decimal odds are derived here.
#[derive(Debug, Deserialize)]
struct RawRecord {
    timestamp: Option<String>,
    market_type: String,
    side: Option<String>,
    team: Option<String>,
    odds: String,
    line: Option<String>,
}

impl RawRecord {
    fn into_quote(self) -> Result<Quote, String> {
        let market = MarketType::parse(&self.market_type)
            .ok_or_else(|| format!("unknown market type {:?}", self.market_type))?;
        let american = Decimal::from_str(self.odds.trim())
            .map_err(|_| format!("unparseable odds {:?}", self.odds))?;

        let timestamp = self.timestamp.as_deref().and_then(parse_timestamp);
        let side = self.side.as_deref().and_then(Side::parse);
        let team = self
            .team
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        let line = self
            .line
            .as_deref()
            .and_then(|raw| Decimal::from_str(raw.trim()).ok());

        Ok(Quote::new(timestamp, market, side, team, american, line))
    }
}

/// Accepts RFC 3339 plus the two naive layouts the collector emits.
/// Anything else coerces to `None` and sorts last.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    None
}

/// Load and chronologically sort a quote history file.
///
/// The sort is stable with `None` timestamps last, so rows that share a
/// timestamp (or lack one) keep their file order.
pub fn load_quotes(path: &Path) -> Result<Vec<Quote>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let mut quotes = Vec::new();
    for (row, record) in reader.deserialize::<RawRecord>().enumerate() {
        let record = record?;
        match record.into_quote() {
            Ok(quote) => quotes.push(quote),
            // Header occupies line 1, the first record line 2.
            Err(reason) => warn!(line = row + 2, %reason, "skipping quote row"),
        }
    }

    if quotes.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    quotes.sort_by_key(|q| (q.timestamp.is_none(), q.timestamp));
    info!(
        quotes = quotes.len(),
        path = %path.display(),
        "loaded quote history"
    );
    Ok(quotes)
}
