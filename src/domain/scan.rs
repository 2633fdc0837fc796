//! Whole-market EV scan.

use rust_decimal::Decimal;
use serde::Serialize;

use super::quote::{OddsSet, Price, Side};
use super::selection::{market_average_ev, EvResult};

/// One quote scored against the rest of the market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvQuote {
    pub side: Side,
    pub price: Price,
    pub ev: EvResult,
}

/// Score every quote on both sides against the average of the other books
/// on that side, keeping those at or above `min_ev_percent`, best first.
///
/// A quote with no other book on its side has nothing to be scored against
/// and is skipped. Ties keep side A before side B, then sportsbook order.
pub fn scan_ev(set: &OddsSet, min_ev_percent: Decimal) -> Vec<EvQuote> {
    let mut found: Vec<EvQuote> = Side::BOTH
        .into_iter()
        .flat_map(|side| {
            let quotes = set.quotes(side);
            quotes
                .iter()
                .filter_map(|quote| {
                    let ev = market_average_ev(quote, &quotes).ok()?;
                    (ev.ev_percent >= min_ev_percent).then(|| EvQuote {
                        side,
                        price: quote.clone(),
                        ev,
                    })
                })
                .collect::<Vec<_>>()
        })
        .collect();
    found.sort_by(|a, b| b.ev.ev_percent.cmp(&a.ev.ev_percent));
    found
}
