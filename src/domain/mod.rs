//! Sportsbook odds math: conversions, price selection, fair odds, EV and
//! stake sizing.
//!
//! Everything here is pure and synchronous. Functions read only their
//! arguments, keep no cache, and may be called from any number of threads
//! at once.

mod ids;
mod line;
mod money;
mod odds;
mod opportunity;
mod parlay;
mod quote;
mod scan;
mod selection;
mod sharp;
mod stake;

pub mod error;

pub use error::OddsError;
pub use ids::{EventId, SportsbookId};
pub use money::{round_currency, round_half_up, Probability, Stake};

// Odds representations
pub use odds::{
    american_to_decimal, decimal_to_american, implied_probability, payout,
    probability_to_american, AmericanOdds, DecimalOdds,
};

// Quotes and selection
pub use quote::{BookPrices, BookQuote, OddsSet, Price, Side};
pub use selection::{
    average_odds, best_odds, expected_value_percent, market_average_ev, no_vig_ev,
    no_vig_fair_odds, no_vig_fair_odds_with_sample, top_quotes, EvMethod, EvResult, FairOdds,
    NO_VIG_SAMPLE,
};
pub use scan::{scan_ev, EvQuote};
pub use sharp::{
    sharp_no_vig_ev, Confidence, SharpEv, DEFAULT_SHARP_BOOK, MIN_PROBABILITY_SPREAD,
    MIN_SHARP_BOOKS, SHARP_WEIGHT,
};

// Sizing
pub use parlay::{
    parlay_odds, parlay_price, same_game_parlay_odds, same_game_parlay_price,
    SAME_GAME_CORRELATION,
};
pub use stake::{
    arb_percentage, optimal_opposite_stake, optimal_stake_split, wager_outcome, StakeSplit,
    WagerOutcome,
};

pub use line::{LineAnalysis, SideAnalysis};
pub use opportunity::{
    group_opportunities, ArbOpportunity, ArbOpportunityBuilder, BookLink, GroupedOpportunity,
    OpportunityBuildError, OpportunityKey,
};
