//! Combined prices for multi-leg parlays.

use rust_decimal::Decimal;

use super::error::OddsError;
use super::odds::{AmericanOdds, DecimalOdds};

/// Discount per extra leg applied to same-game parlays, whose legs are
/// correlated and priced below the independent product by sportsbooks.
pub const SAME_GAME_CORRELATION: Decimal = Decimal::from_parts(72, 0, 0, false, 2);

/// Price of a parlay of independent legs: the product of decimal odds.
///
/// # Errors
///
/// `OddsError::EmptyInput` when `legs` is empty.
pub fn parlay_odds(legs: &[AmericanOdds]) -> Result<AmericanOdds, OddsError> {
    parlay_price(legs)?.to_american()
}

/// Unrounded decimal price of a parlay of independent legs.
pub fn parlay_price(legs: &[AmericanOdds]) -> Result<DecimalOdds, OddsError> {
    parlay_decimal(legs, 1)
}

/// Price of a same-game parlay: the independent product discounted by
/// [`SAME_GAME_CORRELATION`] for every leg after the first.
///
/// # Errors
///
/// `OddsError::EmptyInput` with fewer than two legs, `OddsError::InvalidOdds`
/// when the discount pushes the price to 1 or below.
pub fn same_game_parlay_odds(legs: &[AmericanOdds]) -> Result<AmericanOdds, OddsError> {
    same_game_parlay_price(legs)?.to_american()
}

/// Unrounded decimal price of a same-game parlay.
pub fn same_game_parlay_price(legs: &[AmericanOdds]) -> Result<DecimalOdds, OddsError> {
    let product = parlay_decimal(legs, 2)?.value();
    let discount = legs
        .iter()
        .skip(1)
        .fold(Decimal::ONE, |acc, _| acc * SAME_GAME_CORRELATION);

    DecimalOdds::new(product * discount)
}

fn parlay_decimal(legs: &[AmericanOdds], required: usize) -> Result<DecimalOdds, OddsError> {
    if legs.len() < required {
        return Err(OddsError::EmptyInput {
            required,
            actual: legs.len(),
        });
    }
    let product = legs
        .iter()
        .try_fold(Decimal::ONE, |acc, leg| {
            acc.checked_mul(leg.to_decimal().value())
        })
        .ok_or_else(|| OddsError::invalid_odds("parlay price overflows"))?;
    DecimalOdds::new(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn legs(values: &[i32]) -> Vec<AmericanOdds> {
        values
            .iter()
            .map(|v| AmericanOdds::new(*v).unwrap())
            .collect()
    }

    #[test]
    fn correlation_constant() {
        assert_eq!(SAME_GAME_CORRELATION, dec!(0.72));
    }

    #[test]
    fn two_even_money_legs_pay_three_to_one() {
        assert_eq!(parlay_odds(&legs(&[100, 100])).unwrap().value(), 300);
    }

    #[test]
    fn standard_two_leg_parlay() {
        // 1.909090... squared = 3.6446 -> +264.46
        assert_eq!(parlay_odds(&legs(&[-110, -110])).unwrap().value(), 264);
    }

    #[test]
    fn parlay_price_keeps_the_exact_product() {
        // 1.909090... squared, not the rounded +264
        let price = parlay_price(&legs(&[-110, -110])).unwrap();
        assert!((price.value() - dec!(3.6446281)).abs() < dec!(0.0000001));
        assert_ne!(price, parlay_odds(&legs(&[-110, -110])).unwrap().to_decimal());

        let same_game = same_game_parlay_price(&legs(&[100, 100])).unwrap();
        assert_eq!(same_game.value(), dec!(2.88));
    }

    #[test]
    fn single_leg_parlay_is_the_leg() {
        assert_eq!(parlay_odds(&legs(&[-150])).unwrap().value(), -150);
    }

    #[test]
    fn empty_parlay_fails() {
        assert_eq!(
            parlay_odds(&[]).unwrap_err(),
            OddsError::EmptyInput {
                required: 1,
                actual: 0
            }
        );
    }

    #[test]
    fn same_game_parlay_is_discounted() {
        // 4.0 * 0.72 = 2.88 -> +188
        assert_eq!(
            same_game_parlay_odds(&legs(&[100, 100])).unwrap().value(),
            188
        );
        // 8.0 * 0.5184 = 4.1472 -> +315
        assert_eq!(
            same_game_parlay_odds(&legs(&[100, 100, 100])).unwrap().value(),
            315
        );
    }

    #[test]
    fn same_game_parlay_needs_two_legs() {
        assert!(matches!(
            same_game_parlay_odds(&legs(&[100])),
            Err(OddsError::EmptyInput { required: 2, .. })
        ));
    }

    #[test]
    fn heavily_discounted_same_game_parlay_is_invalid() {
        // 1.1^5 * 0.72^4 is below 1
        let result = same_game_parlay_odds(&legs(&[-1000, -1000, -1000, -1000, -1000]));
        assert!(matches!(result, Err(OddsError::InvalidOdds { .. })));
    }
}
