use core::str::FromStr;
use serde::{Deserialize, Serialize};

use playbill_core::BillingError;

/// Genre of a play. Selects the pricing formula.
///
/// Adding a genre means adding a variant here, a rule in `rule.rs`, a rate
/// entry in `RateTable`, and an arm in `Calculator::rule_for`. The compiler
/// points at every match that needs the new arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Tragedy,
    Comedy,
    History,
    Pastoral,
}

impl Genre {
    /// All known genres, in declaration order.
    pub const ALL: [Genre; 4] = [
        Genre::Tragedy,
        Genre::Comedy,
        Genre::History,
        Genre::Pastoral,
    ];

    /// Tag used in play catalogs.
    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Tragedy => "tragedy",
            Genre::Comedy => "comedy",
            Genre::History => "history",
            Genre::Pastoral => "pastoral",
        }
    }
}

impl core::fmt::Display for Genre {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = BillingError;

    /// Tags match exactly; `"Tragedy"` is not `"tragedy"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tragedy" => Ok(Genre::Tragedy),
            "comedy" => Ok(Genre::Comedy),
            "history" => Ok(Genre::History),
            "pastoral" => Ok(Genre::Pastoral),
            other => Err(BillingError::unknown_genre(other)),
        }
    }
}
