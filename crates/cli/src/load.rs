//! Reading invoice, catalog and rate documents.

use std::path::Path;

use anyhow::{Context, Result};

use playbill_pricing::RateTable;
use playbill_statement::{Invoice, PlayCatalog};

/// An invoices file holds either one invoice or a list of them.
///
/// The shape is picked from the first token so serde reports the real
/// problem (field, expected type, line and column) instead of a generic
/// "no variant matched".
pub fn parse_invoices(json: &str) -> Result<Vec<Invoice>> {
    if json.trim_start().starts_with('[') {
        serde_json::from_str(json).context("invalid invoice list")
    } else {
        let invoice: Invoice = serde_json::from_str(json).context("invalid invoice document")?;
        Ok(vec![invoice])
    }
}

pub fn parse_catalog(json: &str) -> Result<PlayCatalog> {
    serde_json::from_str(json).context("invalid play catalog")
}

pub fn parse_rates(json: &str) -> Result<RateTable> {
    let rates: RateTable = serde_json::from_str(json).context("invalid rate table")?;
    rates.validate()?;
    Ok(rates)
}

pub fn read<T>(path: &Path, parse: impl FnOnce(&str) -> Result<T>) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse(&contents).with_context(|| format!("failed to load {}", path.display()))
}
