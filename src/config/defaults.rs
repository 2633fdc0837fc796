//! Fallback values for command arguments left off the command line.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{EvMethod, SportsbookId, Stake, DEFAULT_SHARP_BOOK, NO_VIG_SAMPLE};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DefaultsConfig {
    /// Total stake used by `split` when `--bankroll` is omitted.
    #[serde(default = "default_bankroll")]
    pub bankroll: Stake,
    #[serde(default)]
    pub ev_method: EvMethod,
    /// Quotes per side averaged by the no-vig method.
    #[serde(default = "default_no_vig_sample")]
    pub no_vig_sample: usize,
    /// Book whose price `sharp` treats as fair when `--book` is omitted.
    #[serde(default = "default_sharp_book")]
    pub sharp_book: SportsbookId,
}

fn default_bankroll() -> Stake {
    Decimal::from(200)
}

fn default_sharp_book() -> SportsbookId {
    SportsbookId::from(DEFAULT_SHARP_BOOK)
}

const fn default_no_vig_sample() -> usize {
    NO_VIG_SAMPLE
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            bankroll: default_bankroll(),
            ev_method: EvMethod::default(),
            no_vig_sample: default_no_vig_sample(),
            sharp_book: default_sharp_book(),
        }
    }
}
