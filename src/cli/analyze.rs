//! `oddsmath analyze`: best and average prices, fair odds, EV and arbitrage
//! margin for one line.

use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;
use tracing::{debug, info, warn};

use crate::cli::{input, output, AnalyzeArgs};
use crate::config::Config;
use crate::display::{
    money, option_or_placeholder, or_placeholder, percent, EvDisplay, PLACEHOLDER,
};
use crate::domain::{
    DecimalOdds, EvMethod, EvResult, FairOdds, LineAnalysis, Price, Side,
    SideAnalysis, StakeSplit,
};
use crate::error::Result;

#[derive(Debug, Serialize)]
struct SideReport {
    side: Side,
    quotes: usize,
    best: Option<Price>,
    average: Option<DecimalOdds>,
    /// Signed; `None` when it could not be computed.
    ev: Option<EvResult>,
}

#[derive(Debug, Serialize)]
struct AnalysisReport {
    method: EvMethod,
    sides: Vec<SideReport>,
    fair: Option<FairOdds>,
    arb_percent: Option<Decimal>,
    /// Present only when the best prices form an arbitrage.
    split: Option<StakeSplit>,
}

#[derive(Tabled)]
struct SideRow {
    #[tabled(rename = "Side")]
    side: Side,
    #[tabled(rename = "Quotes")]
    quotes: usize,
    #[tabled(rename = "Best")]
    best: String,
    #[tabled(rename = "Sportsbook")]
    sportsbook: String,
    #[tabled(rename = "Average")]
    average: String,
    #[tabled(rename = "Fair")]
    fair: String,
    #[tabled(rename = "EV")]
    ev: String,
}

impl From<&SideAnalysis> for SideRow {
    fn from(side: &SideAnalysis) -> Self {
        let best = side.best.as_ref();
        Self {
            side: side.side,
            quotes: side.quotes,
            best: option_or_placeholder(best.map(Price::odds)),
            sportsbook: option_or_placeholder(best.map(Price::sportsbook)),
            average: side
                .average
                .map_or_else(|| PLACEHOLDER.to_string(), |avg| or_placeholder(avg.to_american())),
            fair: option_or_placeholder(side.ev.as_ref().ok().map(|ev| ev.fair_odds)),
            ev: EvDisplay::from_result(&side.ev).to_string(),
        }
    }
}

fn log_side(side: &SideAnalysis) {
    match &side.ev {
        Ok(ev) => debug!(
            side = %side.side,
            ev_percent = %ev.ev_percent,
            fair_odds = %ev.fair_odds,
            "EV computed"
        ),
        Err(error) => warn!(side = %side.side, %error, "EV unavailable"),
    }
}

pub fn execute(args: &AnalyzeArgs, config: &Config) -> Result<()> {
    let set = input::read_odds_set(&args.file)?;
    let method = args.method.unwrap_or(config.defaults.ev_method);
    let analysis = LineAnalysis::analyze_with_sample(&set, method, config.defaults.no_vig_sample);

    log_side(&analysis.a);
    log_side(&analysis.b);
    if let Err(error) = &analysis.fair {
        warn!(%error, "No-vig fair odds unavailable");
    }

    let split = if analysis.is_arbitrage() {
        let split = analysis.stake_split(config.defaults.bankroll)?.rounded();
        info!(
            bankroll = %config.defaults.bankroll,
            profit = %split.guaranteed_profit,
            "Arbitrage found"
        );
        Some(split)
    } else {
        None
    };

    if output::is_json() {
        let report = AnalysisReport {
            method,
            sides: [&analysis.a, &analysis.b]
                .into_iter()
                .map(|side| SideReport {
                    side: side.side,
                    quotes: side.quotes,
                    best: side.best.clone(),
                    average: side.average,
                    ev: side.ev.as_ref().ok().copied(),
                })
                .collect(),
            fair: analysis.fair.as_ref().ok().copied(),
            arb_percent: analysis.arb_percent,
            split,
        };
        return output::emit_json("analyze", &report);
    }

    output::section(&format!("Line analysis ({method})"));
    output::table(vec![SideRow::from(&analysis.a), SideRow::from(&analysis.b)]);
    println!();

    if let Ok(fair) = &analysis.fair {
        output::field("No-vig fair", format!("{} / {}", fair.odds_a, fair.odds_b));
        output::field("Overround", percent(fair.overround * Decimal::ONE_HUNDRED));
    }
    match analysis.arb_percent {
        Some(arb) => output::field("Arbitrage", output::signed(percent(arb), arb > Decimal::ZERO)),
        None => output::field("Arbitrage", PLACEHOLDER),
    }
    if let Some(split) = split {
        output::field("Stake A", money(split.stake_a));
        output::field("Stake B", money(split.stake_b));
        output::field("Locked profit", output::positive(money(split.guaranteed_profit)));
    }
    Ok(())
}
