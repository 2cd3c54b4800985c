//! One pricing rule per genre.
//!
//! Each rule is a small `Copy` struct holding the constants it needs, so a
//! rule can be built once and applied to any number of audiences. Rules are
//! only handed out by `Calculator`, which validates the rate table first.

use playbill_core::{BillingError, BillingResult};

use crate::genre::Genre;
use crate::rates::{ComedyRates, CreditRates, ThresholdRates};

/// Contract shared by every genre's formula.
pub trait PricingRule {
    /// Genre this rule prices.
    fn genre(&self) -> Genre;

    /// Amount owed for a performance, in minor currency units.
    ///
    /// Fails only when the result does not fit in a `u64`.
    fn amount(&self, audience: u32) -> BillingResult<u64>;

    /// Volume credits earned by a performance.
    fn volume_credits(&self, audience: u32) -> u64;
}

fn seats_above(audience: u32, threshold: u32) -> u32 {
    audience.saturating_sub(threshold)
}

fn mul(rate: u64, seats: u32) -> BillingResult<u64> {
    rate.checked_mul(u64::from(seats))
        .ok_or_else(|| BillingError::invariant("performance amount overflow"))
}

fn add(a: u64, b: u64) -> BillingResult<u64> {
    a.checked_add(b)
        .ok_or_else(|| BillingError::invariant("performance amount overflow"))
}

fn threshold_amount(rates: &ThresholdRates, audience: u32) -> BillingResult<u64> {
    let extra = seats_above(audience, rates.audience_threshold);
    add(rates.base_amount, mul(rates.per_extra_seat, extra)?)
}

fn base_credits(credits: &CreditRates, audience: u32) -> u64 {
    u64::from(seats_above(audience, credits.base_threshold))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TragedyRule {
    rates: ThresholdRates,
    credits: CreditRates,
}

impl TragedyRule {
    pub(crate) fn new(rates: ThresholdRates, credits: CreditRates) -> Self {
        Self { rates, credits }
    }
}

impl PricingRule for TragedyRule {
    fn genre(&self) -> Genre {
        Genre::Tragedy
    }

    fn amount(&self, audience: u32) -> BillingResult<u64> {
        threshold_amount(&self.rates, audience)
    }

    fn volume_credits(&self, audience: u32) -> u64 {
        base_credits(&self.credits, audience)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComedyRule {
    rates: ComedyRates,
    credits: CreditRates,
}

impl ComedyRule {
    pub(crate) fn new(rates: ComedyRates, credits: CreditRates) -> Self {
        Self { rates, credits }
    }
}

impl PricingRule for ComedyRule {
    fn genre(&self) -> Genre {
        Genre::Comedy
    }

    fn amount(&self, audience: u32) -> BillingResult<u64> {
        let mut result = self.rates.base_amount;
        if audience > self.rates.audience_threshold {
            let extra = seats_above(audience, self.rates.audience_threshold);
            result = add(result, self.rates.over_capacity_amount)?;
            result = add(result, mul(self.rates.per_extra_seat, extra)?)?;
        }
        add(result, mul(self.rates.per_audience, audience)?)
    }

    fn volume_credits(&self, audience: u32) -> u64 {
        // Nonzero: rules are built from a validated `RateTable`.
        let extra = audience / self.credits.comedy_extra_divisor;
        base_credits(&self.credits, audience) + u64::from(extra)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryRule {
    rates: ThresholdRates,
    credits: CreditRates,
}

impl HistoryRule {
    pub(crate) fn new(rates: ThresholdRates, credits: CreditRates) -> Self {
        Self { rates, credits }
    }
}

impl PricingRule for HistoryRule {
    fn genre(&self) -> Genre {
        Genre::History
    }

    fn amount(&self, audience: u32) -> BillingResult<u64> {
        threshold_amount(&self.rates, audience)
    }

    fn volume_credits(&self, audience: u32) -> u64 {
        base_credits(&self.credits, audience)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PastoralRule {
    rates: ThresholdRates,
    credits: CreditRates,
}

impl PastoralRule {
    pub(crate) fn new(rates: ThresholdRates, credits: CreditRates) -> Self {
        Self { rates, credits }
    }
}

impl PricingRule for PastoralRule {
    fn genre(&self) -> Genre {
        Genre::Pastoral
    }

    fn amount(&self, audience: u32) -> BillingResult<u64> {
        threshold_amount(&self.rates, audience)
    }

    fn volume_credits(&self, audience: u32) -> u64 {
        base_credits(&self.credits, audience)
    }
}

/// Closed set of rules, one variant per genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenreRule {
    Tragedy(TragedyRule),
    Comedy(ComedyRule),
    History(HistoryRule),
    Pastoral(PastoralRule),
}

impl PricingRule for GenreRule {
    fn genre(&self) -> Genre {
        match self {
            GenreRule::Tragedy(r) => r.genre(),
            GenreRule::Comedy(r) => r.genre(),
            GenreRule::History(r) => r.genre(),
            GenreRule::Pastoral(r) => r.genre(),
        }
    }

    fn amount(&self, audience: u32) -> BillingResult<u64> {
        match self {
            GenreRule::Tragedy(r) => r.amount(audience),
            GenreRule::Comedy(r) => r.amount(audience),
            GenreRule::History(r) => r.amount(audience),
            GenreRule::Pastoral(r) => r.amount(audience),
        }
    }

    fn volume_credits(&self, audience: u32) -> u64 {
        match self {
            GenreRule::Tragedy(r) => r.volume_credits(audience),
            GenreRule::Comedy(r) => r.volume_credits(audience),
            GenreRule::History(r) => r.volume_credits(audience),
            GenreRule::Pastoral(r) => r.volume_credits(audience),
        }
    }
}
