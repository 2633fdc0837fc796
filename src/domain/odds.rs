//! American and decimal odds representations and conversions between them.
//!
//! American odds are what sportsbook feeds quote, but they are not ordered by
//! payout across the +/- boundary (-105 pays less than +100) and cannot be
//! averaged. Every comparison and mean in this crate therefore goes through
//! [`DecimalOdds`], which is directly proportional to the payout.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::OddsError;
use super::money::{round_half_up, Probability, Stake};

/// A price in American format: profit per 100 staked when positive, stake
/// needed to win 100 when negative.
///
/// Zero is not a price and cannot be constructed. `+100` and `-100` both mean
/// even money; `+100` is the canonical form produced by conversions.
///
/// No `Ord`: raw American values do not order by payout. Compare
/// [`AmericanOdds::to_decimal`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct AmericanOdds(i32);

impl AmericanOdds {
    /// Even money, `+100`.
    pub const EVEN: Self = Self(100);

    /// Create American odds, rejecting zero.
    pub fn new(value: i32) -> Result<Self, OddsError> {
        if value == 0 {
            return Err(OddsError::invalid_odds("american odds cannot be 0"));
        }
        Ok(Self(value))
    }

    /// The signed integer value.
    pub fn value(self) -> i32 {
        self.0
    }

    /// Convert to decimal odds.
    pub fn to_decimal(self) -> DecimalOdds {
        DecimalOdds(self.profit_per_unit() + Decimal::ONE)
    }

    /// Profit returned per unit staked, excluding the stake.
    pub fn profit_per_unit(self) -> Decimal {
        let odds = Decimal::from(self.0);
        if odds > Decimal::ZERO {
            odds / Decimal::ONE_HUNDRED
        } else {
            Decimal::ONE_HUNDRED / odds.abs()
        }
    }

    /// Win probability implied by the price, vig included.
    pub fn implied_probability(self) -> Probability {
        let odds = Decimal::from(self.0);
        if odds > Decimal::ZERO {
            Decimal::ONE_HUNDRED / (odds + Decimal::ONE_HUNDRED)
        } else {
            odds.abs() / (odds.abs() + Decimal::ONE_HUNDRED)
        }
    }
}

impl TryFrom<i32> for AmericanOdds {
    type Error = OddsError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AmericanOdds> for i32 {
    fn from(odds: AmericanOdds) -> Self {
        odds.0
    }
}

impl FromStr for AmericanOdds {
    type Err = OddsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i32>()
            .map_err(|_| OddsError::invalid_odds(format!("'{s}' is not an integer")))?;
        Self::new(value)
    }
}

/// Signed display: `+150`, `-110`.
impl fmt::Display for AmericanOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 > 0 {
            write!(f, "+{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A price in decimal format: total payout per unit staked, always above 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct DecimalOdds(Decimal);

impl DecimalOdds {
    /// Create decimal odds, rejecting anything at or below 1.
    ///
    /// A decimal price of exactly 1 returns only the stake and has no
    /// American equivalent.
    pub fn new(value: Decimal) -> Result<Self, OddsError> {
        if value <= Decimal::ONE {
            return Err(OddsError::invalid_odds(format!(
                "decimal odds must be greater than 1, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// The payout multiplier.
    pub fn value(self) -> Decimal {
        self.0
    }

    /// Win probability implied by the price.
    pub fn implied_probability(self) -> Probability {
        Decimal::ONE / self.0
    }

    /// Total return (stake included) of `wager` if the bet wins.
    ///
    /// # Errors
    ///
    /// `OddsError::InvalidInput` when the return does not fit in a `Decimal`.
    pub fn payout(self, wager: Stake) -> Result<Stake, OddsError> {
        wager
            .checked_mul(self.0)
            .ok_or_else(|| OddsError::invalid_input("wager", format!("{wager} is too large")))
    }

    /// Convert to American odds, rounding half up to the nearest integer.
    ///
    /// Prices at or above 2 become positive odds, prices below 2 negative.
    /// Fails when the result does not fit in an `i32`.
    pub fn to_american(self) -> Result<AmericanOdds, OddsError> {
        let edge = self.0 - Decimal::ONE;
        let raw = if self.0 >= Decimal::TWO {
            edge.checked_mul(Decimal::ONE_HUNDRED)
        } else {
            (-Decimal::ONE_HUNDRED).checked_div(edge)
        };
        let value = raw
            .map(round_half_up)
            .and_then(|v| v.to_i32())
            .ok_or_else(|| {
                OddsError::invalid_odds(format!("decimal odds {} out of american range", self.0))
            })?;
        AmericanOdds::new(value)
    }
}

impl TryFrom<Decimal> for DecimalOdds {
    type Error = OddsError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DecimalOdds> for Decimal {
    fn from(odds: DecimalOdds) -> Self {
        odds.0
    }
}

impl From<AmericanOdds> for DecimalOdds {
    fn from(odds: AmericanOdds) -> Self {
        odds.to_decimal()
    }
}

impl fmt::Display for DecimalOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// Convert American odds to decimal odds.
///
/// # Errors
///
/// `OddsError::InvalidOdds` when `american_odds` is 0.
pub fn american_to_decimal(american_odds: i32) -> Result<Decimal, OddsError> {
    Ok(AmericanOdds::new(american_odds)?.to_decimal().value())
}

/// Convert decimal odds to American odds.
///
/// Round-tripping `decimal_to_american(american_to_decimal(x))` returns `x`
/// for every `|x| >= 100` except `-100`, which comes back as its even-money
/// twin `+100`. Rounding can in principle shift a value by 1 next to the
/// +/-100 boundary; the tests pin that tolerance.
///
/// # Errors
///
/// `OddsError::InvalidOdds` when `decimal <= 1` or the result overflows.
pub fn decimal_to_american(decimal: Decimal) -> Result<i32, OddsError> {
    Ok(DecimalOdds::new(decimal)?.to_american()?.value())
}

/// Win probability implied by American odds.
pub fn implied_probability(american_odds: i32) -> Result<Probability, OddsError> {
    Ok(AmericanOdds::new(american_odds)?.implied_probability())
}

/// Convert a win probability in (0, 1) to fair American odds.
pub fn probability_to_american(probability: Probability) -> Result<AmericanOdds, OddsError> {
    if probability <= Decimal::ZERO || probability >= Decimal::ONE {
        return Err(OddsError::invalid_odds(format!(
            "probability must be in (0, 1), got {probability}"
        )));
    }
    DecimalOdds::new(Decimal::ONE / probability)?.to_american()
}

/// Total return (stake included) of `wager` at `odds` if the bet wins.
///
/// # Errors
///
/// `OddsError::InvalidInput` when the return overflows.
pub fn payout(odds: AmericanOdds, wager: Stake) -> Result<Stake, OddsError> {
    odds.to_decimal().payout(wager)
}
