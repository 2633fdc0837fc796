//! `oddsmath group`: merge arbitrage rows that differ only by sportsbook.

use tabled::Tabled;
use tracing::info;

use crate::cli::{input, output, FileArgs};
use crate::display::{percent, PLACEHOLDER};
use crate::domain::{group_opportunities, BookLink, GroupedOpportunity};
use crate::error::Result;

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "Event")]
    event: String,
    #[tabled(rename = "Market")]
    market: String,
    #[tabled(rename = "Line")]
    line: String,
    #[tabled(rename = "Over")]
    over: String,
    #[tabled(rename = "Under")]
    under: String,
    #[tabled(rename = "Arb")]
    arb: String,
}

fn books(links: &[BookLink]) -> String {
    if links.is_empty() {
        return PLACEHOLDER.to_string();
    }
    links
        .iter()
        .map(|link| link.book.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<&GroupedOpportunity> for GroupRow {
    fn from(group: &GroupedOpportunity) -> Self {
        Self {
            event: group
                .description
                .clone()
                .unwrap_or_else(|| group.event_id.to_string()),
            market: group.market_key.clone(),
            line: group.line.clone(),
            over: format!("{} @ {}", group.over_odds, books(&group.over_books)),
            under: format!("{} @ {}", group.under_odds, books(&group.under_books)),
            arb: percent(group.arb_percent),
        }
    }
}

pub fn execute(args: &FileArgs) -> Result<()> {
    let rows = input::read_opportunities(&args.file)?;
    let groups = group_opportunities(&rows);
    info!(rows = rows.len(), groups = groups.len(), "Grouped opportunities");

    if output::is_json() {
        return output::emit_json("group", &groups);
    }

    output::section("Arbitrage opportunities");
    if groups.is_empty() {
        output::note("No opportunities.");
        return Ok(());
    }
    output::table(groups.iter().map(GroupRow::from).collect());
    Ok(())
}
