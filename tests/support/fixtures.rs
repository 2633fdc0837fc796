use oddsmath::domain::{AmericanOdds, OddsSet, Price, Side};

pub fn odds(value: i32) -> AmericanOdds {
    AmericanOdds::new(value).expect("valid test odds")
}

pub fn price(book: &str, value: i32) -> Price {
    Price::new(book, odds(value))
}

pub fn prices(quotes: &[(&str, i32)]) -> Vec<Price> {
    quotes.iter().map(|(book, value)| price(book, *value)).collect()
}

/// Three books quoting both sides of a line with a normal margin.
pub const THREE_BOOK_LINE: &str = r#"{
    "betmgm":  { "a": { "odds": -120 }, "b": { "odds": 100, "link": "https://betmgm.example/b" } },
    "caesars": { "a": { "odds": -125 }, "b": { "odds": -105 } },
    "fanduel": { "a": { "odds": -130 }, "b": { "odds": -110 } }
}"#;

/// Two books whose best prices form an arbitrage.
pub const ARB_LINE: &str = r#"{
    "betmgm":  { "a": { "odds": 110 }, "b": { "odds": -130 } },
    "fanduel": { "a": { "odds": -140 }, "b": { "odds": 105 } }
}"#;

pub fn three_book_line() -> OddsSet {
    OddsSet::new()
        .with(price("betmgm", -120), Side::A)
        .with(price("betmgm", 100).with_link("https://betmgm.example/b"), Side::B)
        .with(price("caesars", -125), Side::A)
        .with(price("caesars", -105), Side::B)
        .with(price("fanduel", -130), Side::A)
        .with(price("fanduel", -110), Side::B)
}

/// Duplicate rows for one market at several books, plus one other market.
pub const OPPORTUNITIES: &str = r#"[
    {
        "event_id": "evt-1",
        "description": "Celtics @ Knicks",
        "market_key": "player_points",
        "line": 24.5,
        "over_odds": 110,
        "under_odds": 105,
        "over_book": "draftkings",
        "under_book": "fanduel",
        "over_link": "https://dk.example/o"
    },
    {
        "event_id": "evt-1",
        "market_key": "player_points",
        "line": "24.5",
        "over_odds": 110,
        "under_odds": 105,
        "over_book": "betmgm",
        "under_book": "fanduel"
    },
    {
        "event_id": "evt-2",
        "market_key": "totals",
        "line": "220.5",
        "over_odds": 102,
        "under_odds": 101,
        "over_book": "caesars",
        "under_book": "betmgm"
    }
]"#;

/// Four books, with the sharp book quoting -110 both ways.
pub const SHARP_LINE: &str = r#"{
    "pinnacle":   { "a": { "odds": -110 }, "b": { "odds": -110 } },
    "draftkings": { "a": { "odds": 115 },  "b": { "odds": -135 } },
    "fanduel":    { "a": { "odds": -105 }, "b": { "odds": -115 } },
    "betmgm":     { "a": { "odds": 100 },  "b": { "odds": -120 } }
}"#;
