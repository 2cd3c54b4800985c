//! Rate table: every constant the pricing formulas read.
//!
//! Formulas never hardcode a number; they take their constants from a
//! `RateTable`. `RateTable::default()` is the agency's reference table.

use serde::{Deserialize, Serialize};

use playbill_core::{BillingError, BillingResult};

/// Rates for genres priced as "base, plus a surcharge per seat above a threshold".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdRates {
    /// Flat amount in minor currency units.
    pub base_amount: u64,
    /// Seats included in the base amount.
    pub audience_threshold: u32,
    /// Surcharge per seat above `audience_threshold`, in minor units.
    pub per_extra_seat: u64,
}

/// Comedy rates: threshold pricing plus a fixed over-capacity fee and a
/// per-seat amount applied to the whole audience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComedyRates {
    pub base_amount: u64,
    pub audience_threshold: u32,
    /// Charged once when the audience exceeds the threshold.
    pub over_capacity_amount: u64,
    pub per_extra_seat: u64,
    /// Charged for every seat, independent of the threshold.
    pub per_audience: u64,
}

/// Volume credit settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditRates {
    /// Seats above this earn one credit each, for every genre.
    pub base_threshold: u32,
    /// Comedy earns an extra `floor(audience / comedy_extra_divisor)` credits.
    pub comedy_extra_divisor: u32,
}

/// Complete set of pricing constants.
///
/// Deserializing accepts partial documents: any genre (or the credit block)
/// left out keeps its reference value. Overrides replace a whole block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateTable {
    pub tragedy: ThresholdRates,
    pub comedy: ComedyRates,
    pub history: ThresholdRates,
    pub pastoral: ThresholdRates,
    pub credits: CreditRates,
}

pub const TRAGEDY: ThresholdRates = ThresholdRates {
    base_amount: 40_000,
    audience_threshold: 30,
    per_extra_seat: 1_000,
};

pub const COMEDY: ComedyRates = ComedyRates {
    base_amount: 30_000,
    audience_threshold: 20,
    over_capacity_amount: 10_000,
    per_extra_seat: 500,
    per_audience: 300,
};

pub const HISTORY: ThresholdRates = ThresholdRates {
    base_amount: 20_000,
    audience_threshold: 20,
    per_extra_seat: 1_000,
};

pub const PASTORAL: ThresholdRates = ThresholdRates {
    base_amount: 40_000,
    audience_threshold: 20,
    per_extra_seat: 2_500,
};

pub const CREDITS: CreditRates = CreditRates {
    base_threshold: 30,
    comedy_extra_divisor: 5,
};

impl Default for RateTable {
    fn default() -> Self {
        Self {
            tragedy: TRAGEDY,
            comedy: COMEDY,
            history: HISTORY,
            pastoral: PASTORAL,
            credits: CREDITS,
        }
    }
}

impl RateTable {
    /// Check the table can be used by the formulas.
    pub fn validate(&self) -> BillingResult<()> {
        if self.credits.comedy_extra_divisor == 0 {
            return Err(BillingError::validation(
                "credits.comedy_extra_divisor must be positive",
            ));
        }
        Ok(())
    }
}
