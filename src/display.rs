//! Presentation boundary for odds-math results.
//!
//! The math in [`crate::domain`] always returns signed values and typed
//! errors. This module is where a failed computation turns into a
//! placeholder and a non-positive EV into "no edge", so one bad quote never
//! takes down a whole table.

use rust_decimal::Decimal;
use std::fmt;

use crate::domain::{round_currency, EvResult, OddsError};

/// Shown in place of a missing or failed value.
pub const PLACEHOLDER: &str = "—";

/// How an EV cell renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvDisplay {
    /// Positive EV, in percent.
    Edge(Decimal),
    /// Computed, but zero or negative.
    NoEdge,
    /// Could not be computed.
    Unavailable,
}

impl EvDisplay {
    pub fn from_result(result: &Result<EvResult, OddsError>) -> Self {
        match result {
            Ok(ev) if ev.has_edge() => EvDisplay::Edge(ev.ev_percent),
            Ok(_) => EvDisplay::NoEdge,
            Err(_) => EvDisplay::Unavailable,
        }
    }
}

impl fmt::Display for EvDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvDisplay::Edge(percent) => write!(f, "+{:.1}%", percent),
            EvDisplay::NoEdge | EvDisplay::Unavailable => f.write_str(PLACEHOLDER),
        }
    }
}

/// Render `result`, or [`PLACEHOLDER`] if it failed.
pub fn or_placeholder<T: fmt::Display>(result: Result<T, OddsError>) -> String {
    result.map_or_else(|_| PLACEHOLDER.to_string(), |value| value.to_string())
}

/// Render `value`, or [`PLACEHOLDER`] if absent.
pub fn option_or_placeholder<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |value| value.to_string())
}

/// Currency with cents, e.g. `$86.21`. Negative amounts keep their sign.
pub fn money(amount: Decimal) -> String {
    let amount = round_currency(amount);
    if amount < Decimal::ZERO {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount)
    }
}

/// Percentage with two decimals, e.g. `3.73%`.
pub fn percent(value: Decimal) -> String {
    format!("{:.2}%", value)
}
