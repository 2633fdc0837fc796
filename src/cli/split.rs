//! `oddsmath split`: equal-profit stakes across both sides.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::cli::{output, SplitArgs};
use crate::config::Config;
use crate::display::{money, percent};
use crate::domain::{arb_percentage, optimal_stake_split, AmericanOdds, Stake, StakeSplit};
use crate::error::Result;

#[derive(Debug, Serialize)]
struct SplitReport {
    odds_a: AmericanOdds,
    odds_b: AmericanOdds,
    bankroll: Stake,
    arb_percent: Decimal,
    #[serde(flatten)]
    split: StakeSplit,
}

pub fn execute(args: &SplitArgs, config: &Config) -> Result<()> {
    let bankroll = args.bankroll.unwrap_or(config.defaults.bankroll);
    let split = optimal_stake_split(bankroll, args.odds_a, args.odds_b)?.rounded();
    let report = SplitReport {
        odds_a: args.odds_a,
        odds_b: args.odds_b,
        bankroll,
        arb_percent: arb_percentage(args.odds_a, args.odds_b),
        split,
    };
    info!(
        %bankroll,
        stake_a = %split.stake_a,
        stake_b = %split.stake_b,
        profit = %split.guaranteed_profit,
        "Split bankroll"
    );

    if output::is_json() {
        return output::emit_json("split", &report);
    }

    output::section("Stake split");
    output::field("Bankroll", money(bankroll));
    output::field(
        &format!("Stake A ({})", report.odds_a),
        output::highlight(money(split.stake_a)),
    );
    output::field(
        &format!("Stake B ({})", report.odds_b),
        output::highlight(money(split.stake_b)),
    );
    output::field("Payout A", money(split.payout_a));
    output::field("Payout B", money(split.payout_b));
    output::field(
        "Guaranteed",
        output::signed(money(split.guaranteed_profit), split.is_arbitrage()),
    );
    output::field("Arbitrage", percent(report.arb_percent));
    if !split.is_arbitrage() {
        output::note("These prices are not an arbitrage; the split only limits the loss.");
    }
    Ok(())
}
