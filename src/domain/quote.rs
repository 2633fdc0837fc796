//! Sportsbook quotes for a single two-outcome betting line.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::ids::SportsbookId;
use super::odds::AmericanOdds;

/// One side of a two-outcome market (over/under, home/away).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Both sides, A first.
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    /// The other outcome of the market.
    pub fn opposite(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// A single quoted price for one side of one line at one sportsbook.
///
/// An immutable snapshot; a fresh fetch produces new prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    sportsbook: SportsbookId,
    odds: AmericanOdds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    link: Option<String>,
}

impl Price {
    pub fn new(sportsbook: impl Into<SportsbookId>, odds: AmericanOdds) -> Self {
        Self {
            sportsbook: sportsbook.into(),
            odds,
            link: None,
        }
    }

    /// Attach an opaque deep link into the sportsbook app.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn sportsbook(&self) -> &SportsbookId {
        &self.sportsbook
    }

    pub fn odds(&self) -> AmericanOdds {
        self.odds
    }

    /// Deep link, used for display only.
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }
}

/// A sportsbook's quote as it appears inside an [`OddsSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookQuote {
    pub odds: AmericanOdds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Both sides quoted by one sportsbook. Either side may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookPrices {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<BookQuote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<BookQuote>,
}

impl BookPrices {
    pub fn get(&self, side: Side) -> Option<&BookQuote> {
        match side {
            Side::A => self.a.as_ref(),
            Side::B => self.b.as_ref(),
        }
    }

    fn slot(&mut self, side: Side) -> &mut Option<BookQuote> {
        match side {
            Side::A => &mut self.a,
            Side::B => &mut self.b,
        }
    }
}

/// All sportsbooks' quotes for one two-outcome line.
///
/// Holds at most one price per side per sportsbook. Iteration is ordered by
/// sportsbook id, which makes tie-breaks in price selection reproducible.
///
/// Serialized as a JSON object keyed by sportsbook:
///
/// ```
/// use oddsmath::domain::{OddsSet, Side};
///
/// let set: OddsSet = serde_json::from_str(
///     r#"{"draftkings": {"a": {"odds": -110}, "b": {"odds": -110}}}"#,
/// ).unwrap();
/// assert_eq!(set.quotes(Side::A).len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OddsSet {
    books: BTreeMap<SportsbookId, BookPrices>,
}

impl OddsSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a sportsbook's price for one side, replacing any previous one.
    pub fn insert(&mut self, price: Price, side: Side) {
        let Price {
            sportsbook,
            odds,
            link,
        } = price;
        *self.books.entry(sportsbook).or_default().slot(side) = Some(BookQuote { odds, link });
    }

    /// Builder-style [`OddsSet::insert`].
    pub fn with(mut self, price: Price, side: Side) -> Self {
        self.insert(price, side);
        self
    }

    /// Prices quoted for `side`, in sportsbook order.
    pub fn quotes(&self, side: Side) -> Vec<Price> {
        self.books
            .iter()
            .filter_map(|(book, prices)| {
                prices.get(side).map(|quote| Price {
                    sportsbook: book.clone(),
                    odds: quote.odds,
                    link: quote.link.clone(),
                })
            })
            .collect()
    }

    /// Sportsbooks with at least one side quoted.
    pub fn sportsbooks(&self) -> impl Iterator<Item = &SportsbookId> {
        self.books.keys()
    }

    pub fn get(&self, sportsbook: &SportsbookId) -> Option<&BookPrices> {
        self.books.get(sportsbook)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(book: &str, odds: i32) -> Price {
        Price::new(book, AmericanOdds::new(odds).unwrap())
    }

    #[test]
    fn quotes_come_back_in_sportsbook_order() {
        let set = OddsSet::new()
            .with(price("fanduel", -105), Side::A)
            .with(price("betmgm", -115), Side::A)
            .with(price("caesars", -110), Side::B);

        let books: Vec<_> = set
            .quotes(Side::A)
            .iter()
            .map(|p| p.sportsbook().to_string())
            .collect();
        assert_eq!(books, ["betmgm", "fanduel"]);
        assert_eq!(set.quotes(Side::B).len(), 1);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn insert_replaces_existing_side() {
        let mut set = OddsSet::new();
        set.insert(price("fanduel", -105), Side::A);
        set.insert(price("fanduel", 110), Side::A);

        let quotes = set.quotes(Side::A);
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].odds().value(), 110);
    }

    #[test]
    fn missing_side_is_absent_not_zero() {
        let set = OddsSet::new().with(price("pinnacle", 120), Side::A);
        let book = set.get(&SportsbookId::from("pinnacle")).unwrap();
        assert!(book.get(Side::B).is_none());
        assert!(set.quotes(Side::B).is_empty());
    }

    #[test]
    fn links_survive_the_round_trip_through_the_set() {
        let set = OddsSet::new().with(price("draftkings", 130).with_link("dk://bet/1"), Side::B);
        let quotes = set.quotes(Side::B);
        assert_eq!(quotes[0].link(), Some("dk://bet/1"));
    }

    #[test]
    fn deserializes_from_sportsbook_keyed_json() {
        let json = r#"{
            "draftkings": {"a": {"odds": -110, "link": "dk://1"}, "b": {"odds": -110}},
            "fanduel": {"b": {"odds": 105}}
        }"#;
        let set: OddsSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.quotes(Side::A).len(), 1);
        assert_eq!(set.quotes(Side::B).len(), 2);
    }

    #[test]
    fn zero_odds_in_json_are_rejected_at_the_boundary() {
        let json = r#"{"draftkings": {"a": {"odds": 0}}}"#;
        assert!(serde_json::from_str::<OddsSet>(json).is_err());
    }

    #[test]
    fn side_opposite() {
        assert_eq!(Side::A.opposite(), Side::B);
        assert_eq!(Side::B.opposite(), Side::A);
    }
}
