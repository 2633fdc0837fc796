//! JSON input files.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{ArbOpportunity, OddsSet};
use crate::error::Result;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Read an odds set: an object keyed by sportsbook with `a`/`b` quotes.
pub fn read_odds_set(path: &Path) -> Result<OddsSet> {
    let set: OddsSet = read_json(path)?;
    debug!(path = %path.display(), sportsbooks = set.len(), "Loaded odds set");
    Ok(set)
}

/// Read an array of arbitrage rows.
pub fn read_opportunities(path: &Path) -> Result<Vec<ArbOpportunity>> {
    let rows: Vec<ArbOpportunity> = read_json(path)?;
    debug!(path = %path.display(), rows = rows.len(), "Loaded opportunities");
    Ok(rows)
}
