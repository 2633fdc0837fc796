//! `oddsmath best`: the best price on each side of a line.

use serde::Serialize;
use tabled::Tabled;
use tracing::{info, warn};

use crate::cli::{input, output, FileArgs};
use crate::display::{option_or_placeholder, PLACEHOLDER};
use crate::domain::{best_odds, Price, Side};
use crate::error::Result;

#[derive(Debug, Serialize)]
struct BestPrice {
    side: Side,
    quotes: usize,
    best: Option<Price>,
}

#[derive(Tabled)]
struct BestRow {
    #[tabled(rename = "Side")]
    side: Side,
    #[tabled(rename = "Quotes")]
    quotes: usize,
    #[tabled(rename = "Best")]
    odds: String,
    #[tabled(rename = "Decimal")]
    decimal: String,
    #[tabled(rename = "Sportsbook")]
    sportsbook: String,
    #[tabled(rename = "Link")]
    link: String,
}

impl From<&BestPrice> for BestRow {
    fn from(price: &BestPrice) -> Self {
        let best = price.best.as_ref();
        Self {
            side: price.side,
            quotes: price.quotes,
            odds: option_or_placeholder(best.map(Price::odds)),
            decimal: option_or_placeholder(best.map(|p| p.odds().to_decimal())),
            sportsbook: option_or_placeholder(best.map(Price::sportsbook)),
            link: best
                .and_then(Price::link)
                .unwrap_or(PLACEHOLDER)
                .to_string(),
        }
    }
}

pub fn execute(args: &FileArgs) -> Result<()> {
    let set = input::read_odds_set(&args.file)?;

    let prices: Vec<BestPrice> = Side::BOTH
        .into_iter()
        .map(|side| {
            let quotes = set.quotes(side);
            let best = match best_odds(&quotes) {
                Ok(price) => Some(price.clone()),
                Err(error) => {
                    warn!(%side, %error, "No price for side");
                    None
                }
            };
            BestPrice {
                side,
                quotes: quotes.len(),
                best,
            }
        })
        .collect();

    for price in &prices {
        if let Some(best) = &price.best {
            info!(side = %price.side, sportsbook = %best.sportsbook(), odds = %best.odds(), "Best price");
        }
    }

    if output::is_json() {
        return output::emit_json("best", &prices);
    }

    output::section("Best prices");
    output::table(prices.iter().map(BestRow::from).collect());
    Ok(())
}
