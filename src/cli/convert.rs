//! `oddsmath convert`: one price in both formats.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::cli::{output, ConvertArgs};
use crate::display::percent;
use crate::domain::{AmericanOdds, DecimalOdds, OddsError, Probability};
use crate::error::Result;

#[derive(Debug, Serialize)]
struct ConversionReport {
    american: AmericanOdds,
    decimal: DecimalOdds,
    implied_probability: Probability,
}

pub fn execute(args: &ConvertArgs) -> Result<()> {
    let (american, decimal) = match (args.american, args.decimal) {
        (Some(american), _) => (american, american.to_decimal()),
        (None, Some(decimal)) => {
            let decimal = DecimalOdds::new(decimal)?;
            (decimal.to_american()?, decimal)
        }
        (None, None) => {
            return Err(OddsError::invalid_input("odds", "pass --american or --decimal").into())
        }
    };

    let report = ConversionReport {
        american,
        decimal,
        implied_probability: decimal.implied_probability(),
    };
    info!(american = %report.american, decimal = %report.decimal, "Converted odds");

    if output::is_json() {
        return output::emit_json("convert", &report);
    }

    output::section("Conversion");
    output::field("American", output::highlight(report.american));
    output::field("Decimal", report.decimal);
    output::field(
        "Implied prob.",
        percent(report.implied_probability * Decimal::ONE_HUNDRED),
    );
    Ok(())
}
