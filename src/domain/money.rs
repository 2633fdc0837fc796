//! Monetary and probability types.

use rust_decimal::{Decimal, RoundingStrategy};

/// Amount of currency wagered or returned.
pub type Stake = Decimal;

/// Probability in the open interval (0, 1).
pub type Probability = Decimal;

/// Round to the nearest integer, halves toward positive infinity.
///
/// `-116.5` becomes `-116` and `116.5` becomes `117`, the same as the
/// `floor(x + 0.5)` convention sportsbook feeds round American odds with.
pub fn round_half_up(value: Decimal) -> Decimal {
    (value + Decimal::new(5, 1)).floor()
}

/// Round a currency amount to cents.
pub fn round_currency(amount: Stake) -> Stake {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
