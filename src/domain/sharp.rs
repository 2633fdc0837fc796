//! EV against a sharp sportsbook's price.
//!
//! A sharp book runs a low margin and moves on informed money, so its own
//! two-way price with the vig removed is the best available estimate of the
//! true probability. When it quotes only one side, its implied probability
//! is blended into the market average at [`SHARP_WEIGHT`] times the weight
//! of any other book.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use super::error::OddsError;
use super::ids::SportsbookId;
use super::money::Probability;
use super::odds::{probability_to_american, AmericanOdds};
use super::quote::{OddsSet, Price, Side};
use super::selection::{best_odds, ev_from_probability};

/// Sharp book used when none is configured.
pub const DEFAULT_SHARP_BOOK: &str = "pinnacle";

/// Weight of the sharp book's quote in the blended average.
pub const SHARP_WEIGHT: Decimal = Decimal::TEN;

/// Books that must quote a side before its sharp EV is trusted.
pub const MIN_SHARP_BOOKS: usize = 4;

/// Smallest gap between fair and offered probability that counts as an edge.
pub const MIN_PROBABILITY_SPREAD: Decimal = Decimal::from_parts(2, 0, 0, false, 2);

/// How much to trust a [`SharpEv`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// High with a sharp no-vig line and enough books, medium with enough
    /// books alone.
    pub fn rate(books_used: usize, no_vig_line_used: bool) -> Self {
        match (books_used >= MIN_SHARP_BOOKS, no_vig_line_used) {
            (true, true) => Confidence::High,
            (true, false) => Confidence::Medium,
            (false, _) => Confidence::Low,
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::High => write!(f, "high"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::Low => write!(f, "low"),
        }
    }
}

/// EV of the best price on one side against a sharp-book fair probability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharpEv {
    pub side: Side,
    /// Best price at any other book when the sharp two-way line is used,
    /// best price anywhere otherwise.
    pub best: Price,
    pub fair_probability: Probability,
    pub fair_odds: AmericanOdds,
    /// Signed, in percent.
    pub ev_percent: Decimal,
    /// Books quoting the side, the sharp book included.
    pub books_used: usize,
    pub no_vig_line_used: bool,
    pub confidence: Confidence,
}

impl SharpEv {
    /// Whether the fair and offered probabilities differ by at least
    /// [`MIN_PROBABILITY_SPREAD`].
    pub fn is_significant(&self) -> bool {
        let offered = self.best.odds().implied_probability();
        (self.fair_probability - offered).abs() >= MIN_PROBABILITY_SPREAD
    }

    pub fn has_edge(&self) -> bool {
        self.ev_percent > Decimal::ZERO && self.is_significant()
    }
}

/// EV of the best price on `side` against the `sharp` book.
///
/// With the sharp book quoting both sides, the fair probability is its
/// no-vig price and the sharp book is left out of the best-price search.
/// Otherwise the fair probability is the weighted mean implied probability
/// of every book on the side.
///
/// # Errors
///
/// - `OddsError::EmptyInput` when fewer than [`MIN_SHARP_BOOKS`] books quote
///   the side, or no book other than the sharp one does.
/// - `OddsError::InvalidInput` when the sharp book does not quote the side.
pub fn sharp_no_vig_ev(
    set: &OddsSet,
    side: Side,
    sharp: &SportsbookId,
) -> Result<SharpEv, OddsError> {
    let quotes = set.quotes(side);
    let books_used = quotes.len();
    if books_used < MIN_SHARP_BOOKS {
        return Err(OddsError::EmptyInput {
            required: MIN_SHARP_BOOKS,
            actual: books_used,
        });
    }

    let two_way = set
        .get(sharp)
        .and_then(|prices| Some((prices.a.as_ref()?.odds, prices.b.as_ref()?.odds)));

    let (fair_probability, best, no_vig_line_used) = match two_way {
        Some((odds_a, odds_b)) => {
            let implied_a = odds_a.implied_probability();
            let fair_a = implied_a / (implied_a + odds_b.implied_probability());
            let fair = match side {
                Side::A => fair_a,
                Side::B => Decimal::ONE - fair_a,
            };
            let others: Vec<Price> = quotes
                .iter()
                .filter(|quote| quote.sportsbook() != sharp)
                .cloned()
                .collect();
            (fair, best_odds(&others)?.clone(), true)
        }
        None => {
            let fair = weighted_probability(&quotes, sharp).ok_or_else(|| {
                OddsError::invalid_input(
                    "sharp_book",
                    format!("{sharp} does not quote side {side}"),
                )
            })?;
            (fair, best_odds(&quotes)?.clone(), false)
        }
    };

    Ok(SharpEv {
        side,
        ev_percent: ev_from_probability(best.odds(), fair_probability),
        fair_odds: probability_to_american(fair_probability)?,
        fair_probability,
        best,
        books_used,
        no_vig_line_used,
        confidence: Confidence::rate(books_used, no_vig_line_used),
    })
}

/// Mean implied probability with the sharp book weighted up. `None` when
/// the sharp book is not among `quotes`.
fn weighted_probability(quotes: &[Price], sharp: &SportsbookId) -> Option<Probability> {
    let mut sharp_seen = false;
    let (sum, weight) = quotes
        .iter()
        .fold((Decimal::ZERO, Decimal::ZERO), |(sum, weight), quote| {
            let w = if quote.sportsbook() == sharp {
                sharp_seen = true;
                SHARP_WEIGHT
            } else {
                Decimal::ONE
            };
            (sum + quote.odds().implied_probability() * w, weight + w)
        });
    sharp_seen.then(|| sum / weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn price(book: &str, odds: i32) -> Price {
        Price::new(book, AmericanOdds::new(odds).unwrap())
    }

    fn pinnacle() -> SportsbookId {
        SportsbookId::from(DEFAULT_SHARP_BOOK)
    }

    /// Pinnacle at -110/-110, so fair is exactly 50% each way.
    fn two_way_market() -> OddsSet {
        OddsSet::new()
            .with(price("pinnacle", -110), Side::A)
            .with(price("pinnacle", -110), Side::B)
            .with(price("draftkings", 115), Side::A)
            .with(price("draftkings", -135), Side::B)
            .with(price("fanduel", -105), Side::A)
            .with(price("fanduel", -115), Side::B)
            .with(price("betmgm", 100), Side::A)
            .with(price("betmgm", -120), Side::B)
    }

    #[test]
    fn sharp_two_way_line_sets_the_fair_price() {
        let ev = sharp_no_vig_ev(&two_way_market(), Side::A, &pinnacle()).unwrap();

        assert_eq!(ev.fair_probability, dec!(0.5));
        assert_eq!(ev.fair_odds, AmericanOdds::EVEN);
        assert_eq!(ev.best.sportsbook().as_str(), "draftkings");
        // 0.5 * 2.15 - 1
        assert_eq!(ev.ev_percent, dec!(7.5));
        assert!(ev.no_vig_line_used);
        assert_eq!(ev.books_used, 4);
        assert_eq!(ev.confidence, Confidence::High);
        assert!(ev.has_edge());
    }

    #[test]
    fn sharp_book_is_left_out_of_the_best_price() {
        let set = two_way_market().with(price("pinnacle", 150), Side::B);
        let ev = sharp_no_vig_ev(&set, Side::B, &pinnacle()).unwrap();

        assert_eq!(ev.best.sportsbook().as_str(), "fanduel");
        assert!(ev.ev_percent < Decimal::ZERO);
        assert!(!ev.has_edge());
    }

    #[test]
    fn small_probability_gap_is_not_an_edge() {
        let set = two_way_market().with(price("draftkings", 105), Side::A);
        let ev = sharp_no_vig_ev(&set, Side::A, &pinnacle()).unwrap();

        // +105 implies 48.8%, under two points from the fair 50%
        assert!(ev.ev_percent > Decimal::ZERO);
        assert!(!ev.is_significant());
        assert!(!ev.has_edge());
    }

    #[test]
    fn one_sided_sharp_quote_is_weighted_into_the_average() {
        let set = OddsSet::new()
            .with(price("pinnacle", -110), Side::A)
            .with(price("draftkings", 115), Side::A)
            .with(price("fanduel", -105), Side::A)
            .with(price("betmgm", 100), Side::A);
        let ev = sharp_no_vig_ev(&set, Side::A, &pinnacle()).unwrap();

        // (0.5 + 0.4651 + 0.5122 + 10 * 0.5238) / 13
        assert!((ev.fair_probability - dec!(0.51657)).abs() < dec!(0.00001));
        assert!((ev.ev_percent - dec!(11.06)).abs() < dec!(0.01));
        assert!(!ev.no_vig_line_used);
        assert_eq!(ev.confidence, Confidence::Medium);
    }

    #[test]
    fn missing_sharp_book_is_an_error() {
        let set = OddsSet::new()
            .with(price("caesars", -110), Side::A)
            .with(price("draftkings", 115), Side::A)
            .with(price("fanduel", -105), Side::A)
            .with(price("betmgm", 100), Side::A);
        assert!(matches!(
            sharp_no_vig_ev(&set, Side::A, &pinnacle()),
            Err(OddsError::InvalidInput {
                field: "sharp_book",
                ..
            })
        ));
    }

    #[test]
    fn too_few_books_is_an_error() {
        let set = OddsSet::new()
            .with(price("pinnacle", -110), Side::A)
            .with(price("pinnacle", -110), Side::B)
            .with(price("draftkings", 115), Side::A)
            .with(price("fanduel", -105), Side::A);
        assert_eq!(
            sharp_no_vig_ev(&set, Side::A, &pinnacle()).unwrap_err(),
            OddsError::EmptyInput {
                required: MIN_SHARP_BOOKS,
                actual: 3
            }
        );
    }

    #[test]
    fn confidence_rating() {
        assert_eq!(Confidence::rate(4, true), Confidence::High);
        assert_eq!(Confidence::rate(6, false), Confidence::Medium);
        assert_eq!(Confidence::rate(3, true), Confidence::Low);
        assert_eq!(Confidence::Medium.to_string(), "medium");
    }
}
