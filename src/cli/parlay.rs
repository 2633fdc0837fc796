//! `oddsmath parlay`: combined price of several legs.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::cli::{output, ParlayArgs};
use crate::display::{money, percent};
use crate::domain::{
    parlay_price, same_game_parlay_price, AmericanOdds, DecimalOdds, Probability, Stake,
};
use crate::error::Result;

/// Stake used for the example payout line.
const EXAMPLE_STAKE: i64 = 100;

#[derive(Debug, Serialize)]
struct ParlayReport {
    legs: Vec<AmericanOdds>,
    same_game: bool,
    odds: AmericanOdds,
    decimal: DecimalOdds,
    implied_probability: Probability,
    /// Return on [`EXAMPLE_STAKE`] at the exact, unrounded price.
    example_payout: Stake,
}

pub fn execute(args: &ParlayArgs) -> Result<()> {
    let decimal = if args.same_game {
        same_game_parlay_price(&args.legs)?
    } else {
        parlay_price(&args.legs)?
    };
    let odds = decimal.to_american()?;
    let report = ParlayReport {
        legs: args.legs.clone(),
        same_game: args.same_game,
        odds,
        decimal,
        implied_probability: decimal.implied_probability(),
        example_payout: decimal.payout(Decimal::from(EXAMPLE_STAKE))?,
    };
    info!(legs = report.legs.len(), same_game = report.same_game, %odds, "Priced parlay");

    if output::is_json() {
        return output::emit_json("parlay", &report);
    }

    let title = if report.same_game {
        "Same-game parlay"
    } else {
        "Parlay"
    };
    output::section(title);
    let legs: Vec<String> = report.legs.iter().map(ToString::to_string).collect();
    output::field("Legs", legs.join(", "));
    output::field("Odds", output::highlight(report.odds));
    output::field("Decimal", report.decimal);
    output::field(
        "Implied prob.",
        percent(report.implied_probability * Decimal::ONE_HUNDRED),
    );
    output::field(
        &format!("{} pays", money(Decimal::from(EXAMPLE_STAKE))),
        money(report.example_payout),
    );
    Ok(())
}
