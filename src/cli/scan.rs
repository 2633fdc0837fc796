//! `oddsmath scan`: every quote on a line scored against the rest of the
//! market.

use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use crate::cli::{input, output, ScanArgs};
use crate::display::percent;
use crate::domain::{scan_ev, EvQuote, Side};
use crate::error::Result;

#[derive(Debug, Serialize)]
struct ScanReport {
    min_ev_percent: Decimal,
    quotes: Vec<EvQuote>,
}

#[derive(Tabled)]
struct ScanRow {
    #[tabled(rename = "Side")]
    side: Side,
    #[tabled(rename = "Sportsbook")]
    sportsbook: String,
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "Fair")]
    fair: String,
    #[tabled(rename = "EV")]
    ev: String,
}

impl From<&EvQuote> for ScanRow {
    fn from(quote: &EvQuote) -> Self {
        Self {
            side: quote.side,
            sportsbook: quote.price.sportsbook().to_string(),
            odds: quote.price.odds().to_string(),
            fair: quote.ev.fair_odds.to_string(),
            ev: percent(quote.ev.ev_percent),
        }
    }
}

pub fn execute(args: &ScanArgs) -> Result<()> {
    let set = input::read_odds_set(&args.file)?;
    let quotes = scan_ev(&set, args.min_ev);
    info!(min_ev = %args.min_ev, found = quotes.len(), "Scan complete");

    if output::is_json() {
        let report = ScanReport {
            min_ev_percent: args.min_ev,
            quotes,
        };
        return output::emit_json("scan", &report);
    }

    output::section(&format!("EV scan (min {})", percent(args.min_ev)));
    if quotes.is_empty() {
        output::note("No quotes at or above the threshold");
        return Ok(());
    }
    output::table(quotes.iter().map(ScanRow::from).collect());
    Ok(())
}
