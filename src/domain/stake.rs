//! Stake sizing for arbitrage and hedges on a two-outcome market.
//!
//! Equal-profit sizing: with decimal odds `Da` and `Db`, stakes satisfying
//! `Wa * Da == Wb * Db` return the same amount whichever side wins.

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::OddsError;
use super::money::{round_currency, Stake};
use super::odds::{payout, AmericanOdds};

/// Bankroll split across both sides of a market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StakeSplit {
    pub stake_a: Stake,
    pub stake_b: Stake,
    pub payout_a: Stake,
    pub payout_b: Stake,
    /// Smaller payout minus the bankroll. Negative when the prices are not
    /// an arbitrage.
    pub guaranteed_profit: Stake,
}

impl StakeSplit {
    pub fn bankroll(&self) -> Stake {
        self.stake_a + self.stake_b
    }

    pub fn is_arbitrage(&self) -> bool {
        self.guaranteed_profit > Decimal::ZERO
    }

    /// Every amount rounded to cents.
    pub fn rounded(&self) -> Self {
        Self {
            stake_a: round_currency(self.stake_a),
            stake_b: round_currency(self.stake_b),
            payout_a: round_currency(self.payout_a),
            payout_b: round_currency(self.payout_b),
            guaranteed_profit: round_currency(self.guaranteed_profit),
        }
    }
}

/// Result of user-chosen wagers on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WagerOutcome {
    pub payout_a: Stake,
    pub payout_b: Stake,
    pub total_wager: Stake,
    pub guaranteed_profit: Stake,
}

/// Split `bankroll` so that profit is the same whichever side wins.
///
/// `Wa = bankroll * Db / (Da + Db)`, `Wb = bankroll - Wa`. Stakes are not
/// rounded; round at display time.
///
/// # Errors
///
/// `OddsError::InvalidInput` when `bankroll <= 0` or so large that a payout
/// overflows. Odds that would imply a decimal price of 1 or less cannot be
/// constructed as [`AmericanOdds`].
pub fn optimal_stake_split(
    bankroll: Stake,
    odds_a: AmericanOdds,
    odds_b: AmericanOdds,
) -> Result<StakeSplit, OddsError> {
    require_positive("bankroll", bankroll)?;

    let decimal_a = odds_a.to_decimal();
    let decimal_b = odds_b.to_decimal();

    let stake_a = bankroll
        .checked_mul(decimal_b.value())
        .and_then(|v| v.checked_div(decimal_a.value() + decimal_b.value()))
        .ok_or_else(|| too_large("bankroll", bankroll))?;
    let stake_b = bankroll - stake_a;
    let payout_a = decimal_a
        .payout(stake_a)
        .map_err(|_| too_large("bankroll", bankroll))?;
    let payout_b = decimal_b
        .payout(stake_b)
        .map_err(|_| too_large("bankroll", bankroll))?;

    Ok(StakeSplit {
        stake_a,
        stake_b,
        payout_a,
        payout_b,
        guaranteed_profit: payout_a.min(payout_b) - bankroll,
    })
}

/// Stake for the opposite side that equalizes profit with a stake already
/// placed, rounded to cents.
///
/// # Errors
///
/// `OddsError::InvalidInput` when `known_stake <= 0` or too large to size.
pub fn optimal_opposite_stake(
    known_stake: Stake,
    known_odds: AmericanOdds,
    opposite_odds: AmericanOdds,
) -> Result<Stake, OddsError> {
    require_positive("stake", known_stake)?;

    let stake = known_stake
        .checked_mul(known_odds.to_decimal().value())
        .and_then(|v| v.checked_div(opposite_odds.to_decimal().value()))
        .ok_or_else(|| too_large("stake", known_stake))?;
    Ok(round_currency(stake))
}

/// Outcome of arbitrary wagers on both sides.
///
/// # Errors
///
/// `OddsError::InvalidInput` when a wager is negative or both are zero.
pub fn wager_outcome(
    wager_a: Stake,
    wager_b: Stake,
    odds_a: AmericanOdds,
    odds_b: AmericanOdds,
) -> Result<WagerOutcome, OddsError> {
    if wager_a < Decimal::ZERO {
        return Err(OddsError::invalid_input(
            "wager_a",
            format!("cannot be negative, got {wager_a}"),
        ));
    }
    if wager_b < Decimal::ZERO {
        return Err(OddsError::invalid_input(
            "wager_b",
            format!("cannot be negative, got {wager_b}"),
        ));
    }
    let total_wager = wager_a
        .checked_add(wager_b)
        .ok_or_else(|| too_large("total wager", wager_a))?;
    require_positive("total wager", total_wager)?;

    let payout_a = payout(odds_a, wager_a)?;
    let payout_b = payout(odds_b, wager_b)?;

    Ok(WagerOutcome {
        payout_a,
        payout_b,
        total_wager,
        guaranteed_profit: payout_a.min(payout_b) - total_wager,
    })
}

/// Guaranteed return of an equal-profit split, in percent of the bankroll.
///
/// Positive exactly when the two prices form an arbitrage.
pub fn arb_percentage(odds_a: AmericanOdds, odds_b: AmericanOdds) -> Decimal {
    let book = odds_a.implied_probability() + odds_b.implied_probability();
    (Decimal::ONE / book - Decimal::ONE) * Decimal::ONE_HUNDRED
}

fn too_large(field: &'static str, value: Stake) -> OddsError {
    OddsError::invalid_input(field, format!("{value} is too large to size"))
}

fn require_positive(field: &'static str, value: Stake) -> Result<(), OddsError> {
    if value <= Decimal::ZERO {
        return Err(OddsError::invalid_input(
            field,
            format!("must be positive, got {value}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn odds(value: i32) -> AmericanOdds {
        AmericanOdds::new(value).unwrap()
    }

    #[test]
    fn split_equalizes_profit_within_a_cent() {
        let split = optimal_stake_split(dec!(200), odds(120), odds(-150)).unwrap();

        let profit_a = split.stake_a * odds(120).to_decimal().value() - dec!(200);
        let profit_b = split.stake_b * odds(-150).to_decimal().value() - dec!(200);
        assert!((profit_a - profit_b).abs() <= dec!(0.01));
        assert_eq!(split.bankroll(), dec!(200));
        assert_eq!(round_currency(split.stake_a), dec!(86.21));
        assert_eq!(round_currency(split.stake_b), dec!(113.79));
    }

    #[test]
    fn split_of_a_losing_market_reports_negative_profit() {
        let split = optimal_stake_split(dec!(200), odds(120), odds(-150)).unwrap();
        assert!(!split.is_arbitrage());
        assert_eq!(round_currency(split.guaranteed_profit), dec!(-10.34));
    }

    #[test]
    fn rounded_split_is_in_cents() {
        let split = optimal_stake_split(dec!(200), odds(120), odds(-150))
            .unwrap()
            .rounded();
        assert_eq!(split.stake_a, dec!(86.21));
        assert_eq!(split.stake_b, dec!(113.79));
        assert_eq!(split.guaranteed_profit, dec!(-10.34));
    }

    #[test]
    fn split_of_an_arbitrage_locks_in_profit() {
        let split = optimal_stake_split(dec!(200), odds(110), odds(105)).unwrap();
        assert!(split.is_arbitrage());
        assert_eq!(round_currency(split.stake_a), dec!(98.80));
        assert_eq!(round_currency(split.guaranteed_profit), dec!(7.47));
    }

    #[test]
    fn split_rejects_non_positive_bankroll() {
        assert!(matches!(
            optimal_stake_split(dec!(-50), odds(100), odds(100)),
            Err(OddsError::InvalidInput {
                field: "bankroll",
                ..
            })
        ));
        assert!(optimal_stake_split(Decimal::ZERO, odds(100), odds(100)).is_err());
    }

    #[test]
    fn split_of_a_huge_bankroll_is_an_error() {
        assert!(matches!(
            optimal_stake_split(Decimal::MAX, odds(100), odds(100)),
            Err(OddsError::InvalidInput {
                field: "bankroll",
                ..
            })
        ));
    }

    #[test]
    fn opposite_stake_of_a_huge_stake_is_an_error() {
        assert!(matches!(
            optimal_opposite_stake(Decimal::MAX, odds(150), odds(-110)),
            Err(OddsError::InvalidInput { field: "stake", .. })
        ));
    }

    #[test]
    fn wager_outcome_of_huge_wagers_is_an_error() {
        assert!(matches!(
            wager_outcome(Decimal::MAX, Decimal::MAX, odds(110), odds(105)),
            Err(OddsError::InvalidInput {
                field: "total wager",
                ..
            })
        ));
        assert!(matches!(
            wager_outcome(Decimal::MAX, Decimal::ZERO, odds(110), odds(105)),
            Err(OddsError::InvalidInput { field: "wager", .. })
        ));
    }

    #[test]
    fn opposite_stake_matches_payouts() {
        let stake = optimal_opposite_stake(dec!(100), odds(120), odds(-150)).unwrap();
        assert_eq!(stake, dec!(132.00));
    }

    #[test]
    fn opposite_stake_rounds_to_cents() {
        // 100 * 1.909090... / 2.0
        let stake = optimal_opposite_stake(dec!(100), odds(-110), odds(100)).unwrap();
        assert_eq!(stake, dec!(95.45));
    }

    #[test]
    fn opposite_stake_rejects_non_positive_stake() {
        assert!(matches!(
            optimal_opposite_stake(dec!(0), odds(120), odds(-150)),
            Err(OddsError::InvalidInput { field: "stake", .. })
        ));
    }

    #[test]
    fn wager_outcome_takes_the_worse_side() {
        let outcome = wager_outcome(dec!(100), dec!(100), odds(110), odds(105)).unwrap();
        assert_eq!(outcome.payout_a, dec!(210));
        assert_eq!(outcome.payout_b, dec!(205));
        assert_eq!(outcome.total_wager, dec!(200));
        assert_eq!(outcome.guaranteed_profit, dec!(5));
    }

    #[test]
    fn wager_outcome_rejects_bad_wagers() {
        assert!(wager_outcome(dec!(-1), dec!(100), odds(110), odds(105)).is_err());
        assert!(wager_outcome(dec!(0), dec!(0), odds(110), odds(105)).is_err());
        assert!(wager_outcome(dec!(0), dec!(50), odds(110), odds(105)).is_ok());
    }

    #[test]
    fn arb_percentage_sign_tracks_arbitrage() {
        let arb = arb_percentage(odds(110), odds(105));
        assert!((arb - dec!(3.7349397590361445)).abs() < dec!(0.000000001));

        assert!(arb_percentage(odds(120), odds(-150)) < Decimal::ZERO);
    }

    #[test]
    fn arb_percentage_agrees_with_split_profit() {
        let split = optimal_stake_split(dec!(100), odds(110), odds(105)).unwrap();
        let arb = arb_percentage(odds(110), odds(105));
        assert!((split.guaranteed_profit - arb).abs() < dec!(0.000001));
    }
}
