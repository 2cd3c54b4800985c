//! Playbill CLI - print billing statements for a theatrical agency.
//!
//! Usage:
//!   playbill --invoice invoices.json --plays plays.json
//!   playbill -i invoices.json -p plays.json --format html --locale de-DE
//!   playbill -i invoices.json -p plays.json --rates rates-2026.json

mod cli;
mod load;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

use cli::Cli;
use playbill_render::{MoneyFormat, StatementRenderer};
use playbill_statement::{Invoice, PlayCatalog, StatementAggregator};

fn main() -> Result<()> {
    let cli = Cli::parse();
    playbill_observability::init(cli.log_format.into());

    let aggregator = match &cli.rates {
        Some(path) => {
            let rates = load::read(path, load::parse_rates)?;
            tracing::info!(path = %path.display(), "using custom rate table");
            StatementAggregator::with_rates(rates)?
        }
        None => StatementAggregator::default(),
    };

    let money = MoneyFormat::for_locale(&cli.locale)?;
    let renderer = cli.format.renderer(money);

    let catalog = load::read(&cli.plays, load::parse_catalog)?;
    let invoices = load::read(&cli.invoice, load::parse_invoices)?;
    tracing::info!(
        plays = catalog.len(),
        invoices = invoices.len(),
        format = %cli.format,
        "loaded input"
    );

    let mut stdout = std::io::stdout().lock();
    write_statements(&aggregator, &catalog, &invoices, renderer.as_ref(), &mut stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Render one statement per invoice, in order, stopping at the first invoice
/// that cannot be billed. Statements already written stay written.
fn write_statements(
    aggregator: &StatementAggregator,
    catalog: &PlayCatalog,
    invoices: &[Invoice],
    renderer: &(dyn StatementRenderer + Send + Sync),
    out: &mut impl Write,
) -> Result<()> {
    for invoice in invoices {
        let statement = aggregator
            .aggregate(invoice, catalog)
            .with_context(|| format!("cannot bill {}", invoice.customer()))?;
        out.write_all(renderer.render(&statement).as_bytes())?;
    }
    Ok(())
}
