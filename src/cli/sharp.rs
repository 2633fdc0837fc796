//! `oddsmath sharp`: EV of each side's best price against a sharp book's
//! no-vig line.

use serde::Serialize;
use tabled::Tabled;
use tracing::{info, warn};

use crate::cli::{input, output, SharpArgs};
use crate::config::Config;
use crate::display::{option_or_placeholder, EvDisplay};
use crate::domain::{sharp_no_vig_ev, Price, SharpEv, Side, SportsbookId};
use crate::error::Result;

#[derive(Debug, Serialize)]
struct SharpSide {
    side: Side,
    /// `None` when the side could not be scored.
    ev: Option<SharpEv>,
}

#[derive(Debug, Serialize)]
struct SharpReport {
    sharp_book: SportsbookId,
    sides: Vec<SharpSide>,
}

#[derive(Tabled)]
struct SharpRow {
    #[tabled(rename = "Side")]
    side: Side,
    #[tabled(rename = "Best")]
    best: String,
    #[tabled(rename = "Sportsbook")]
    sportsbook: String,
    #[tabled(rename = "Fair")]
    fair: String,
    #[tabled(rename = "Books")]
    books: String,
    #[tabled(rename = "EV")]
    ev: String,
    #[tabled(rename = "Confidence")]
    confidence: String,
}

impl From<&SharpSide> for SharpRow {
    fn from(row: &SharpSide) -> Self {
        let ev = row.ev.as_ref();
        let best = ev.map(|ev| &ev.best);
        let edge = match ev {
            Some(ev) if ev.has_edge() => EvDisplay::Edge(ev.ev_percent),
            Some(_) => EvDisplay::NoEdge,
            None => EvDisplay::Unavailable,
        };
        Self {
            side: row.side,
            best: option_or_placeholder(best.map(Price::odds)),
            sportsbook: option_or_placeholder(best.map(Price::sportsbook)),
            fair: option_or_placeholder(ev.map(|ev| ev.fair_odds)),
            books: option_or_placeholder(ev.map(|ev| ev.books_used)),
            ev: edge.to_string(),
            confidence: option_or_placeholder(ev.map(|ev| ev.confidence)),
        }
    }
}

pub fn execute(args: &SharpArgs, config: &Config) -> Result<()> {
    let set = input::read_odds_set(&args.file)?;
    let sharp_book = args
        .book
        .as_deref()
        .map_or_else(|| config.defaults.sharp_book.clone(), SportsbookId::from);

    let sides: Vec<SharpSide> = Side::BOTH
        .into_iter()
        .map(|side| {
            let ev = match sharp_no_vig_ev(&set, side, &sharp_book) {
                Ok(ev) => {
                    info!(
                        %side,
                        sportsbook = %ev.best.sportsbook(),
                        ev_percent = %ev.ev_percent,
                        confidence = %ev.confidence,
                        "Sharp EV computed"
                    );
                    Some(ev)
                }
                Err(error) => {
                    warn!(%side, %error, "Sharp EV unavailable");
                    None
                }
            };
            SharpSide { side, ev }
        })
        .collect();

    if output::is_json() {
        return output::emit_json("sharp", &SharpReport { sharp_book, sides });
    }

    output::section(&format!("Sharp EV ({sharp_book})"));
    output::table(sides.iter().map(SharpRow::from).collect());
    Ok(())
}
