//! One-pass summary of a two-outcome line across sportsbooks.

use rust_decimal::Decimal;

use super::error::OddsError;
use super::money::Stake;
use super::odds::DecimalOdds;
use super::quote::{OddsSet, Price, Side};
use super::selection::{
    average_odds, best_odds, market_average_ev, no_vig_ev, no_vig_fair_odds_with_sample,
    EvMethod, EvResult, FairOdds, NO_VIG_SAMPLE,
};
use super::stake::{arb_percentage, optimal_stake_split, StakeSplit};

/// Per-side view of a line.
#[derive(Debug, Clone)]
pub struct SideAnalysis {
    pub side: Side,
    /// Number of sportsbooks quoting this side.
    pub quotes: usize,
    pub best: Option<Price>,
    pub average: Option<DecimalOdds>,
    /// EV of `best`. Errors are kept so the caller decides how to show them.
    pub ev: Result<EvResult, OddsError>,
}

/// Best and average prices, fair odds, EV and arbitrage margin for a line.
///
/// Recomputed from scratch on every call; nothing is cached.
#[derive(Debug, Clone)]
pub struct LineAnalysis {
    pub method: EvMethod,
    pub a: SideAnalysis,
    pub b: SideAnalysis,
    /// No-vig fair odds, whatever `method` is used for EV.
    pub fair: Result<FairOdds, OddsError>,
    /// Margin of an equal-profit split across the best prices, when both
    /// sides are quoted. Positive means arbitrage.
    pub arb_percent: Option<Decimal>,
}

impl LineAnalysis {
    /// Analyze `set` with the default no-vig sample size.
    pub fn analyze(set: &OddsSet, method: EvMethod) -> Self {
        Self::analyze_with_sample(set, method, NO_VIG_SAMPLE)
    }

    pub fn analyze_with_sample(set: &OddsSet, method: EvMethod, sample: usize) -> Self {
        let quotes_a = set.quotes(Side::A);
        let quotes_b = set.quotes(Side::B);

        let summarize = |side: Side, quotes: &[Price]| {
            let best = best_odds(quotes).ok().cloned();
            let ev = match method {
                EvMethod::MarketAverage => best_odds(quotes)
                    .and_then(|best| market_average_ev(best, quotes)),
                EvMethod::NoVig => no_vig_ev(side, &quotes_a, &quotes_b, sample),
            };
            SideAnalysis {
                side,
                quotes: quotes.len(),
                best,
                average: average_odds(quotes),
                ev,
            }
        };

        let a = summarize(Side::A, &quotes_a);
        let b = summarize(Side::B, &quotes_b);

        let arb_percent = match (&a.best, &b.best) {
            (Some(best_a), Some(best_b)) => Some(arb_percentage(best_a.odds(), best_b.odds())),
            _ => None,
        };

        Self {
            method,
            fair: no_vig_fair_odds_with_sample(&quotes_a, &quotes_b, sample),
            a,
            b,
            arb_percent,
        }
    }

    pub fn side(&self, side: Side) -> &SideAnalysis {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    /// Whether the best prices of the two sides form an arbitrage.
    pub fn is_arbitrage(&self) -> bool {
        self.arb_percent.is_some_and(|arb| arb > Decimal::ZERO)
    }

    /// Equal-profit split of `bankroll` across the best price of each side.
    ///
    /// # Errors
    ///
    /// `OddsError::EmptyInput` when a side has no quotes, or the errors of
    /// [`optimal_stake_split`].
    pub fn stake_split(&self, bankroll: Stake) -> Result<StakeSplit, OddsError> {
        let missing = OddsError::EmptyInput {
            required: 1,
            actual: 0,
        };
        let best_a = self.a.best.as_ref().ok_or_else(|| missing.clone())?;
        let best_b = self.b.best.as_ref().ok_or(missing)?;
        optimal_stake_split(bankroll, best_a.odds(), best_b.odds())
    }
}
