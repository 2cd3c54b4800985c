//! Genre dispatch: from a genre tag to the rule that prices it.
//!
//! The calculator binds a validated `RateTable` to each rule it hands out.
//! There is no default genre: an unrecognized tag is an `UnknownGenre` error.

use serde::{Deserialize, Serialize};

use playbill_core::{BillingResult, ValueObject};

use crate::genre::Genre;
use crate::rates::RateTable;
use crate::rule::{ComedyRule, GenreRule, HistoryRule, PastoralRule, PricingRule, TragedyRule};

/// Amount and credits for one performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charge {
    /// Minor currency units.
    pub amount: u64,
    pub volume_credits: u64,
}

impl ValueObject for Charge {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calculator {
    rates: RateTable,
}

impl Calculator {
    /// Build a calculator over a custom rate table.
    pub fn new(rates: RateTable) -> BillingResult<Self> {
        rates.validate()?;
        Ok(Self { rates })
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Rule for a known genre.
    pub fn rule_for(&self, genre: Genre) -> GenreRule {
        let credits = self.rates.credits;
        match genre {
            Genre::Tragedy => GenreRule::Tragedy(TragedyRule::new(self.rates.tragedy, credits)),
            Genre::Comedy => GenreRule::Comedy(ComedyRule::new(self.rates.comedy, credits)),
            Genre::History => GenreRule::History(HistoryRule::new(self.rates.history, credits)),
            Genre::Pastoral => {
                GenreRule::Pastoral(PastoralRule::new(self.rates.pastoral, credits))
            }
        }
    }

    /// Rule for a catalog genre tag. Fails with `UnknownGenre` for any tag
    /// outside the known set.
    pub fn rule_for_tag(&self, tag: &str) -> BillingResult<GenreRule> {
        let genre: Genre = tag.parse()?;
        Ok(self.rule_for(genre))
    }

    /// Price one performance of a play with the given genre tag.
    pub fn charge(&self, tag: &str, audience: u32) -> BillingResult<Charge> {
        let rule = self.rule_for_tag(tag)?;
        let charge = Charge {
            amount: rule.amount(audience)?,
            volume_credits: rule.volume_credits(audience),
        };
        tracing::trace!(genre = %rule.genre(), audience, amount = charge.amount, "priced performance");
        Ok(charge)
    }
}
