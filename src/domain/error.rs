//! Errors raised when odds-math inputs violate a domain invariant.
//!
//! Every operation in [`crate::domain`] fails fast with one of these instead
//! of returning a sentinel (zero, an empty option, NaN) that could end up in a
//! displayed dollar amount. Swallowing happens only at the presentation
//! boundary, see [`crate::display`].
//!
//! # Examples
//!
//! ```
//! use oddsmath::domain::{AmericanOdds, OddsError};
//!
//! let result = AmericanOdds::new(0);
//! assert!(matches!(result, Err(OddsError::InvalidOdds { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when odds-math inputs are malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OddsError {
    /// An operation needed more quotes (or legs) than it was given.
    #[error("need at least {required} quote(s), got {actual}")]
    EmptyInput {
        /// Minimum number of inputs the operation requires.
        required: usize,
        /// Number of inputs actually supplied.
        actual: usize,
    },

    /// Odds value is zero or implies decimal odds of 1 or less.
    #[error("invalid odds: {reason}")]
    InvalidOdds {
        /// What made the odds invalid.
        reason: String,
    },

    /// A stake, bankroll or other sizing argument is out of range.
    #[error("invalid value for {field}: {reason}")]
    InvalidInput {
        /// Name of the offending argument.
        field: &'static str,
        /// What made it invalid.
        reason: String,
    },
}

impl OddsError {
    pub(crate) fn invalid_odds(reason: impl Into<String>) -> Self {
        Self::InvalidOdds {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
