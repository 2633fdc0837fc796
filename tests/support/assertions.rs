use rust_decimal::Decimal;
use serde_json::Value;

pub fn assert_decimal_near(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "expected {} ± {}, got {}",
        expected,
        tolerance,
        actual
    );
}

/// Read a decimal out of JSON output, whether it was written as a string or
/// a number.
pub fn json_decimal(value: &Value) -> Decimal {
    match value {
        Value::String(text) => text.parse().expect("decimal string"),
        Value::Number(number) => number.to_string().parse().expect("decimal number"),
        other => panic!("expected a decimal, got {other}"),
    }
}
