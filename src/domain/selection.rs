//! Price selection across sportsbooks: best and average odds, no-vig fair
//! odds, and expected value.
//!
//! All comparisons and means run on decimal odds. American odds are only
//! produced at the end, for display.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::OddsError;
use super::money::Probability;
use super::odds::{probability_to_american, AmericanOdds, DecimalOdds};
use super::quote::{Price, Side};

/// Quotes per side averaged by the no-vig method.
pub const NO_VIG_SAMPLE: usize = 3;

/// How the fair price used for EV is estimated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvMethod {
    /// Mean of the other sportsbooks' prices for the same side.
    #[default]
    MarketAverage,
    /// Top quotes of both sides with the bookmaker margin removed.
    NoVig,
}

impl fmt::Display for EvMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvMethod::MarketAverage => write!(f, "market-average"),
            EvMethod::NoVig => write!(f, "no-vig"),
        }
    }
}

impl FromStr for EvMethod {
    type Err = OddsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "market-average" => Ok(EvMethod::MarketAverage),
            "no-vig" => Ok(EvMethod::NoVig),
            other => Err(OddsError::invalid_input(
                "ev_method",
                format!("expected 'market-average' or 'no-vig', got '{other}'"),
            )),
        }
    }
}

/// Fair (margin-free) prices for both sides of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FairOdds {
    pub probability_a: Probability,
    pub probability_b: Probability,
    pub odds_a: AmericanOdds,
    pub odds_b: AmericanOdds,
    /// Combined implied probability minus 1 before normalization.
    pub overround: Decimal,
}

impl FairOdds {
    pub fn probability(&self, side: Side) -> Probability {
        match side {
            Side::A => self.probability_a,
            Side::B => self.probability_b,
        }
    }

    pub fn odds(&self, side: Side) -> AmericanOdds {
        match side {
            Side::A => self.odds_a,
            Side::B => self.odds_b,
        }
    }
}

/// Expected value of a price against a fair-price estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EvResult {
    /// Signed EV per unit staked, in percent. Negative means no edge.
    pub ev_percent: Decimal,
    pub fair_odds: AmericanOdds,
    pub fair_probability: Probability,
}

impl EvResult {
    pub fn has_edge(&self) -> bool {
        self.ev_percent > Decimal::ZERO
    }
}

/// The quote paying the most per unit staked.
///
/// Ties go to the first quote in input order.
///
/// # Errors
///
/// `OddsError::EmptyInput` when `quotes` is empty.
pub fn best_odds(quotes: &[Price]) -> Result<&Price, OddsError> {
    let (first, rest) = quotes.split_first().ok_or(OddsError::EmptyInput {
        required: 1,
        actual: 0,
    })?;

    Ok(rest.iter().fold(first, |best, quote| {
        if quote.odds().to_decimal() > best.odds().to_decimal() {
            quote
        } else {
            best
        }
    }))
}

/// Mean of the quotes' decimal odds, `None` when there are no quotes.
///
/// Use [`DecimalOdds::to_american`] for the American form. Averaging raw
/// American values is wrong: `[+150, -120]` averages to `+117`, not `+15`.
pub fn average_odds(quotes: &[Price]) -> Option<DecimalOdds> {
    mean_decimal(quotes.iter())
}

fn mean_decimal<'a>(quotes: impl Iterator<Item = &'a Price>) -> Option<DecimalOdds> {
    let (sum, count) = quotes.fold((Decimal::ZERO, 0usize), |(sum, count), quote| {
        (sum + quote.odds().to_decimal().value(), count + 1)
    });
    if count == 0 {
        return None;
    }
    // Every term is above 1, so the mean is too.
    DecimalOdds::new(sum / Decimal::from(count)).ok()
}

/// The `n` best-paying quotes, best first. Ties keep input order.
pub fn top_quotes(quotes: &[Price], n: usize) -> Vec<&Price> {
    let mut ranked: Vec<&Price> = quotes.iter().collect();
    ranked.sort_by(|a, b| b.odds().to_decimal().cmp(&a.odds().to_decimal()));
    ranked.truncate(n);
    ranked
}

/// No-vig fair odds from the top [`NO_VIG_SAMPLE`] quotes of each side.
///
/// # Errors
///
/// `OddsError::EmptyInput` when either side has fewer than three quotes.
pub fn no_vig_fair_odds(side_a: &[Price], side_b: &[Price]) -> Result<FairOdds, OddsError> {
    no_vig_fair_odds_with_sample(side_a, side_b, NO_VIG_SAMPLE)
}

/// No-vig fair odds averaging the top `sample` quotes of each side.
///
/// The mean implied probabilities of the two sides sum above 1 in a real
/// market; dividing each by that sum removes the margin.
pub fn no_vig_fair_odds_with_sample(
    side_a: &[Price],
    side_b: &[Price],
    sample: usize,
) -> Result<FairOdds, OddsError> {
    if sample < NO_VIG_SAMPLE {
        return Err(OddsError::invalid_input(
            "sample",
            format!("must be at least {NO_VIG_SAMPLE}, got {sample}"),
        ));
    }

    let mean_a = mean_implied_probability(side_a, sample)?;
    let mean_b = mean_implied_probability(side_b, sample)?;
    let total = mean_a + mean_b;

    let probability_a = mean_a / total;
    let probability_b = mean_b / total;

    Ok(FairOdds {
        probability_a,
        probability_b,
        odds_a: probability_to_american(probability_a)?,
        odds_b: probability_to_american(probability_b)?,
        overround: total - Decimal::ONE,
    })
}

fn mean_implied_probability(quotes: &[Price], sample: usize) -> Result<Probability, OddsError> {
    if quotes.len() < sample {
        return Err(OddsError::EmptyInput {
            required: sample,
            actual: quotes.len(),
        });
    }
    let sum: Decimal = top_quotes(quotes, sample)
        .iter()
        .map(|quote| quote.odds().implied_probability())
        .sum();
    Ok(sum / Decimal::from(sample))
}

/// EV of betting `best` when the fair price is `fair`, in percent.
///
/// Always signed. Hiding non-positive EV is a display decision, see
/// [`crate::display::EvDisplay`].
pub fn expected_value_percent(best: AmericanOdds, fair: AmericanOdds) -> Decimal {
    ev_from_probability(best, fair.implied_probability())
}

pub(super) fn ev_from_probability(best: AmericanOdds, fair_probability: Probability) -> Decimal {
    (fair_probability * best.to_decimal().value() - Decimal::ONE) * Decimal::ONE_HUNDRED
}

/// EV of `best` against the average of every other sportsbook on that side.
///
/// Quotes from `best`'s own sportsbook are left out of the average.
///
/// # Errors
///
/// `OddsError::EmptyInput` when no other sportsbook quotes the side.
pub fn market_average_ev(best: &Price, quotes: &[Price]) -> Result<EvResult, OddsError> {
    let others = quotes
        .iter()
        .filter(|quote| quote.sportsbook() != best.sportsbook());
    let average = mean_decimal(others).ok_or(OddsError::EmptyInput {
        required: 1,
        actual: 0,
    })?;

    let fair_probability = average.implied_probability();
    Ok(EvResult {
        ev_percent: ev_from_probability(best.odds(), fair_probability),
        fair_odds: average.to_american()?,
        fair_probability,
    })
}

/// EV of the best quote on `side` against no-vig fair odds.
pub fn no_vig_ev(
    side: Side,
    side_a: &[Price],
    side_b: &[Price],
    sample: usize,
) -> Result<EvResult, OddsError> {
    let quotes = match side {
        Side::A => side_a,
        Side::B => side_b,
    };
    let best = best_odds(quotes)?;
    let fair = no_vig_fair_odds_with_sample(side_a, side_b, sample)?;
    let fair_probability = fair.probability(side);

    Ok(EvResult {
        ev_percent: ev_from_probability(best.odds(), fair_probability),
        fair_odds: fair.odds(side),
        fair_probability,
    })
}
