//! Command-line interface definitions.

pub mod analyze;
pub mod best;
pub mod convert;
pub mod group;
pub mod hedge;
pub mod input;
pub mod output;
pub mod parlay;
pub mod scan;
pub mod sharp;
pub mod split;

use clap::{ArgGroup, Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::domain::{AmericanOdds, EvMethod};
use crate::error::Result;

/// Oddsmath - Sportsbook odds conversion, EV and arbitrage sizing.
#[derive(Parser, Debug)]
#[command(name = "oddsmath")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Override log level (debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Whether `--config` was left at its default, in which case a missing
    /// file is not an error.
    pub fn uses_default_config(&self) -> bool {
        self.config.as_os_str() == DEFAULT_CONFIG_PATH
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a price between American and decimal odds
    Convert(ConvertArgs),

    /// Show the best price on each side of a line
    Best(FileArgs),

    /// Best and average prices, fair odds, EV and arbitrage for a line
    Analyze(AnalyzeArgs),

    /// Split a bankroll across both sides for equal profit
    Split(SplitArgs),

    /// Size the opposite stake that hedges a placed bet
    Hedge(HedgeArgs),

    /// Combined price of a parlay
    Parlay(ParlayArgs),

    /// Merge arbitrage rows that differ only by sportsbook
    Group(FileArgs),

    /// EV of each side against a sharp book's no-vig line
    Sharp(SharpArgs),

    /// Every quote scored against the rest of the market
    Scan(ScanArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("price").required(true).args(["american", "decimal"])))]
pub struct ConvertArgs {
    /// American odds, e.g. -110 or 150
    #[arg(long, allow_negative_numbers = true)]
    pub american: Option<AmericanOdds>,

    /// Decimal odds, e.g. 1.91
    #[arg(long)]
    pub decimal: Option<Decimal>,
}

/// Shared argument for commands that read one JSON file.
#[derive(Parser, Debug)]
pub struct FileArgs {
    /// Path to the JSON input
    #[arg(short, long)]
    pub file: PathBuf,
}

/// Arguments for the `analyze` subcommand.
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Path to the odds set JSON
    #[arg(short, long)]
    pub file: PathBuf,

    /// Fair-price estimate for EV (market-average, no-vig)
    #[arg(long)]
    pub method: Option<EvMethod>,
}

/// Arguments for the `split` subcommand.
#[derive(Parser, Debug)]
pub struct SplitArgs {
    /// American odds of side A
    #[arg(long, allow_negative_numbers = true)]
    pub odds_a: AmericanOdds,

    /// American odds of side B
    #[arg(long, allow_negative_numbers = true)]
    pub odds_b: AmericanOdds,

    /// Total stake; defaults to `[defaults] bankroll`
    #[arg(long)]
    pub bankroll: Option<Decimal>,
}

/// Arguments for the `hedge` subcommand.
#[derive(Parser, Debug)]
pub struct HedgeArgs {
    /// Stake already placed
    #[arg(long)]
    pub stake: Decimal,

    /// American odds of the placed bet
    #[arg(long, allow_negative_numbers = true)]
    pub odds: AmericanOdds,

    /// American odds of the opposite side
    #[arg(long, allow_negative_numbers = true)]
    pub opposite: AmericanOdds,
}

/// Arguments for the `parlay` subcommand.
#[derive(Parser, Debug)]
pub struct ParlayArgs {
    /// American odds of each leg
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub legs: Vec<AmericanOdds>,

    /// Apply the same-game correlation discount
    #[arg(long)]
    pub same_game: bool,
}

/// Arguments for the `sharp` subcommand.
#[derive(Parser, Debug)]
pub struct SharpArgs {
    /// Path to the odds set JSON
    #[arg(short, long)]
    pub file: PathBuf,

    /// Sharp sportsbook; defaults to `[defaults] sharp_book`
    #[arg(long)]
    pub book: Option<String>,
}

/// Arguments for the `scan` subcommand.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Path to the odds set JSON
    #[arg(short, long)]
    pub file: PathBuf,

    /// Smallest EV to report, in percent
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub min_ev: Decimal,
}

/// Run the parsed command against a loaded configuration.
pub fn execute(cli: &Cli, config: &Config) -> Result<()> {
    output::configure(output::OutputConfig { json: cli.json });

    match &cli.command {
        Commands::Convert(args) => convert::execute(args),
        Commands::Best(args) => best::execute(args),
        Commands::Analyze(args) => analyze::execute(args, config),
        Commands::Split(args) => split::execute(args, config),
        Commands::Hedge(args) => hedge::execute(args),
        Commands::Parlay(args) => parlay::execute(args),
        Commands::Group(args) => group::execute(args),
        Commands::Sharp(args) => sharp::execute(args, config),
        Commands::Scan(args) => scan::execute(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_negative_odds() {
        let cli =
            Cli::try_parse_from(["oddsmath", "split", "--odds-a", "-150", "--odds-b", "120"])
                .unwrap();
        match cli.command {
            Commands::Split(ref args) => {
                assert_eq!(args.odds_a.value(), -150);
                assert_eq!(args.odds_b.value(), 120);
                assert!(args.bankroll.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(cli.uses_default_config());
    }

    #[test]
    fn parses_parlay_legs() {
        let cli =
            Cli::try_parse_from(["oddsmath", "parlay", "-110", "+150", "--same-game"]).unwrap();
        match cli.command {
            Commands::Parlay(args) => {
                assert_eq!(args.legs.len(), 2);
                assert_eq!(args.legs[1].value(), 150);
                assert!(args.same_game);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_odds() {
        assert!(Cli::try_parse_from(["oddsmath", "convert", "--american", "0"]).is_err());
    }

    #[test]
    fn convert_needs_one_price() {
        assert!(Cli::try_parse_from(["oddsmath", "convert"]).is_err());
        assert!(
            Cli::try_parse_from(["oddsmath", "convert", "--american", "100", "--decimal", "2"])
                .is_err()
        );
    }

    #[test]
    fn parses_negative_min_ev() {
        let cli = Cli::try_parse_from([
            "oddsmath", "scan", "--file", "line.json", "--min-ev", "-1.5",
        ])
        .unwrap();
        match cli.command {
            Commands::Scan(args) => assert_eq!(args.min_ev, Decimal::new(-15, 1)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_method() {
        let cli = Cli::try_parse_from([
            "oddsmath", "analyze", "--file", "line.json", "--method", "no-vig",
        ])
        .unwrap();
        match cli.command {
            Commands::Analyze(args) => assert_eq!(args.method, Some(EvMethod::NoVig)),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
