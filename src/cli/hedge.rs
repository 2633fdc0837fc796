//! `oddsmath hedge`: the opposite stake that equalizes profit with a bet
//! already placed.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::cli::{output, HedgeArgs};
use crate::display::money;
use crate::domain::{optimal_opposite_stake, wager_outcome, Stake, WagerOutcome};
use crate::error::Result;

#[derive(Debug, Serialize)]
struct HedgeReport {
    opposite_stake: Stake,
    #[serde(flatten)]
    outcome: WagerOutcome,
}

pub fn execute(args: &HedgeArgs) -> Result<()> {
    let opposite_stake = optimal_opposite_stake(args.stake, args.odds, args.opposite)?;
    let outcome = wager_outcome(args.stake, opposite_stake, args.odds, args.opposite)?;
    info!(
        stake = %args.stake,
        %opposite_stake,
        profit = %outcome.guaranteed_profit,
        "Computed hedge"
    );

    if output::is_json() {
        let report = HedgeReport {
            opposite_stake,
            outcome,
        };
        return output::emit_json("hedge", &report);
    }

    output::section("Hedge");
    output::field(&format!("Placed ({})", args.odds), money(args.stake));
    output::field(
        &format!("Hedge ({})", args.opposite),
        output::highlight(money(opposite_stake)),
    );
    output::field("Total wager", money(outcome.total_wager));
    output::field("Payout", money(outcome.payout_a.min(outcome.payout_b)));
    output::field(
        "Guaranteed",
        output::signed(
            money(outcome.guaranteed_profit),
            outcome.guaranteed_profit > Decimal::ZERO,
        ),
    );
    Ok(())
}
