//! Pricing rules for theatrical performances.
//!
//! This crate owns the per-genre amount and volume-credit formulas and the
//! dispatcher that picks a formula for a genre tag. Everything here is pure:
//! no IO, no clocks, no shared mutable state.

pub mod calculator;
pub mod genre;
pub mod rates;
pub mod rule;

pub use calculator::{Calculator, Charge};
pub use genre::Genre;
pub use rates::{ComedyRates, CreditRates, RateTable, ThresholdRates};
pub use rule::{ComedyRule, GenreRule, HistoryRule, PastoralRule, PricingRule, TragedyRule};
