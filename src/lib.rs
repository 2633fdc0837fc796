//! Oddsmath - Sportsbook odds conversion, price selection, EV and stake sizing.
//!
//! The math is pure and synchronous: every function reads only its
//! arguments, so it can be called from any thread without coordination.
//!
//! # Modules
//!
//! - [`domain`] - Odds types, conversions, price selection, EV (market, no-vig
//!   and sharp-book), market scans, stake sizing,
//!   parlays and arbitrage grouping
//! - [`display`] - Turns failed or edgeless results into placeholders
//! - [`config`] - Configuration loading from TOML files
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use oddsmath::domain::{best_odds, AmericanOdds, Price};
//!
//! let quotes = vec![
//!     Price::new("draftkings", AmericanOdds::new(-110).unwrap()),
//!     Price::new("fanduel", AmericanOdds::new(-105).unwrap()),
//! ];
//! let best = best_odds(&quotes).unwrap();
//! assert_eq!(best.sportsbook().as_str(), "fanduel");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod domain;
pub mod error;
