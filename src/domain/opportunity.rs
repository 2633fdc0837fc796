//! Arbitrage opportunity rows and grouping of duplicates.
//!
//! Upstream feeds emit one row per (over book, under book) pair, so the same
//! prices offered by several sportsbooks show up many times. Grouping merges
//! rows with identical event, market, line and prices, collecting the
//! sportsbooks on each side.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

use super::ids::{EventId, SportsbookId};
use super::odds::AmericanOdds;
use super::stake::arb_percentage;

/// Error returned when building an ArbOpportunity fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpportunityBuildError {
    #[error("event_id is required")]
    MissingEventId,
    #[error("market_key and line are required")]
    MissingMarket,
    #[error("over book and odds are required")]
    MissingOver,
    #[error("under book and odds are required")]
    MissingUnder,
}

/// One arbitrage row: the over side at one book, the under side at another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArbOpportunity {
    event_id: EventId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    market_key: String,
    #[serde(deserialize_with = "line_from_string_or_number")]
    line: String,
    over_book: SportsbookId,
    over_odds: AmericanOdds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    over_link: Option<String>,
    under_book: SportsbookId,
    under_odds: AmericanOdds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    under_link: Option<String>,
}

/// Feeds send the line as either `"6.5"` or `6.5`.
fn line_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Line {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Line::deserialize(deserializer)? {
        Line::Text(text) => text,
        Line::Number(number) => number.to_string(),
    })
}

impl ArbOpportunity {
    pub fn builder() -> ArbOpportunityBuilder {
        ArbOpportunityBuilder::new()
    }

    pub fn event_id(&self) -> &EventId {
        &self.event_id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn market_key(&self) -> &str {
        &self.market_key
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn over_book(&self) -> &SportsbookId {
        &self.over_book
    }

    pub fn over_odds(&self) -> AmericanOdds {
        self.over_odds
    }

    pub fn under_book(&self) -> &SportsbookId {
        &self.under_book
    }

    pub fn under_odds(&self) -> AmericanOdds {
        self.under_odds
    }

    /// Guaranteed return of an equal-profit split, in percent.
    pub fn arb_percent(&self) -> Decimal {
        arb_percentage(self.over_odds, self.under_odds)
    }

    /// Composite key under which duplicates are merged.
    pub fn key(&self) -> OpportunityKey {
        OpportunityKey {
            event_id: self.event_id.clone(),
            market_key: self.market_key.clone(),
            line: self.line.clone(),
            over_odds: self.over_odds.value(),
            under_odds: self.under_odds.value(),
        }
    }
}

/// Builder for [`ArbOpportunity`].
///
/// ```
/// use oddsmath::domain::{AmericanOdds, ArbOpportunity};
///
/// let opportunity = ArbOpportunity::builder()
///     .event_id("evt-1")
///     .market("player_points", "24.5")
///     .over("draftkings", AmericanOdds::new(110).unwrap())
///     .under("fanduel", AmericanOdds::new(105).unwrap())
///     .build()
///     .unwrap();
/// assert!(opportunity.arb_percent() > rust_decimal::Decimal::ZERO);
/// ```
#[derive(Debug, Default)]
pub struct ArbOpportunityBuilder {
    event_id: Option<EventId>,
    description: Option<String>,
    market: Option<(String, String)>,
    over: Option<(SportsbookId, AmericanOdds)>,
    over_link: Option<String>,
    under: Option<(SportsbookId, AmericanOdds)>,
    under_link: Option<String>,
}

impl ArbOpportunityBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event_id(mut self, event_id: impl Into<EventId>) -> Self {
        self.event_id = Some(event_id.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the market key and line, e.g. `("player_points", "24.5")`.
    pub fn market(mut self, market_key: impl Into<String>, line: impl Into<String>) -> Self {
        self.market = Some((market_key.into(), line.into()));
        self
    }

    pub fn over(mut self, book: impl Into<SportsbookId>, odds: AmericanOdds) -> Self {
        self.over = Some((book.into(), odds));
        self
    }

    pub fn over_link(mut self, link: impl Into<String>) -> Self {
        self.over_link = Some(link.into());
        self
    }

    pub fn under(mut self, book: impl Into<SportsbookId>, odds: AmericanOdds) -> Self {
        self.under = Some((book.into(), odds));
        self
    }

    pub fn under_link(mut self, link: impl Into<String>) -> Self {
        self.under_link = Some(link.into());
        self
    }

    /// # Errors
    ///
    /// Returns `OpportunityBuildError` if any required field is missing.
    pub fn build(self) -> Result<ArbOpportunity, OpportunityBuildError> {
        let event_id = self.event_id.ok_or(OpportunityBuildError::MissingEventId)?;
        let (market_key, line) = self.market.ok_or(OpportunityBuildError::MissingMarket)?;
        let (over_book, over_odds) = self.over.ok_or(OpportunityBuildError::MissingOver)?;
        let (under_book, under_odds) = self.under.ok_or(OpportunityBuildError::MissingUnder)?;

        Ok(ArbOpportunity {
            event_id,
            description: self.description,
            market_key,
            line,
            over_book,
            over_odds,
            over_link: self.over_link,
            under_book,
            under_odds,
            under_link: self.under_link,
        })
    }
}

/// Event, market, line and both prices. Sportsbooks are not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OpportunityKey {
    pub event_id: EventId,
    pub market_key: String,
    pub line: String,
    pub over_odds: i32,
    pub under_odds: i32,
}

/// A sportsbook offering one side of a grouped opportunity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookLink {
    pub book: SportsbookId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Opportunity rows sharing one [`OpportunityKey`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedOpportunity {
    pub event_id: EventId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub market_key: String,
    pub line: String,
    pub over_odds: AmericanOdds,
    pub under_odds: AmericanOdds,
    pub arb_percent: Decimal,
    /// Sorted by sportsbook id, no duplicates.
    pub over_books: Vec<BookLink>,
    /// Sorted by sportsbook id, no duplicates.
    pub under_books: Vec<BookLink>,
}

struct GroupBuilder {
    first: ArbOpportunity,
    over: BTreeMap<SportsbookId, Option<String>>,
    under: BTreeMap<SportsbookId, Option<String>>,
}

impl GroupBuilder {
    fn new(row: &ArbOpportunity) -> Self {
        let mut group = Self {
            first: row.clone(),
            over: BTreeMap::new(),
            under: BTreeMap::new(),
        };
        group.add(row);
        group
    }

    /// The first link seen for a sportsbook wins.
    fn add(&mut self, row: &ArbOpportunity) {
        self.over
            .entry(row.over_book.clone())
            .or_insert_with(|| row.over_link.clone());
        self.under
            .entry(row.under_book.clone())
            .or_insert_with(|| row.under_link.clone());
    }

    fn finish(self) -> GroupedOpportunity {
        let links = |books: BTreeMap<SportsbookId, Option<String>>| -> Vec<BookLink> {
            books
                .into_iter()
                .map(|(book, link)| BookLink { book, link })
                .collect()
        };
        let first = self.first;
        GroupedOpportunity {
            arb_percent: first.arb_percent(),
            event_id: first.event_id,
            description: first.description,
            market_key: first.market_key,
            line: first.line,
            over_odds: first.over_odds,
            under_odds: first.under_odds,
            over_books: links(self.over),
            under_books: links(self.under),
        }
    }
}

/// Merge rows sharing an [`OpportunityKey`]. Groups keep first-seen order.
pub fn group_opportunities(rows: &[ArbOpportunity]) -> Vec<GroupedOpportunity> {
    let mut index: HashMap<OpportunityKey, usize> = HashMap::new();
    let mut groups: Vec<GroupBuilder> = Vec::new();

    for row in rows {
        let key = row.key();
        if let Some(&position) = index.get(&key) {
            groups[position].add(row);
        } else {
            index.insert(key, groups.len());
            groups.push(GroupBuilder::new(row));
        }
    }

    groups.into_iter().map(GroupBuilder::finish).collect()
}
