//! Statement aggregation.
//!
//! ```text
//! Invoice + PlayCatalog
//!   ↓  for each performance, in order
//! 1. resolve play         (UnresolvedPlay on miss)
//! 2. dispatch on genre    (UnknownGenre on unrecognized tag)
//! 3. price + credit
//!   ↓
//! StatementResult (ordered lines + checked totals)
//! ```
//!
//! The first failure aborts the whole aggregation; no partial statement is
//! ever returned.

use serde::Serialize;

use playbill_core::{BillingError, BillingResult, ValueObject};
use playbill_pricing::{Calculator, Genre, PricingRule, RateTable};

use crate::invoice::Invoice;
use crate::play::PlayCatalog;

/// Computed line for one performance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerformanceResult {
    play_name: String,
    genre: Genre,
    audience: u32,
    amount: u64,
    volume_credits: u64,
}

impl PerformanceResult {
    pub fn play_name(&self) -> &str {
        &self.play_name
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }

    pub fn audience(&self) -> u32 {
        self.audience
    }

    /// Minor currency units.
    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn volume_credits(&self) -> u64 {
        self.volume_credits
    }
}

impl ValueObject for PerformanceResult {}

/// Everything a renderer needs, and nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementResult {
    customer: String,
    performances: Vec<PerformanceResult>,
    total_amount: u64,
    total_volume_credits: u64,
}

impl StatementResult {
    pub fn customer(&self) -> &str {
        &self.customer
    }

    /// Lines in invoice order.
    pub fn performances(&self) -> &[PerformanceResult] {
        &self.performances
    }

    /// Minor currency units.
    pub fn total_amount(&self) -> u64 {
        self.total_amount
    }

    pub fn total_volume_credits(&self) -> u64 {
        self.total_volume_credits
    }
}

impl ValueObject for StatementResult {}

/// Builds statements against a fixed rate table.
#[derive(Debug, Clone, Default)]
pub struct StatementAggregator {
    calculator: Calculator,
}

impl StatementAggregator {
    pub fn new(calculator: Calculator) -> Self {
        Self { calculator }
    }

    /// Aggregator over a custom rate table (validated).
    pub fn with_rates(rates: RateTable) -> BillingResult<Self> {
        Ok(Self::new(Calculator::new(rates)?))
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    #[tracing::instrument(
        name = "statement.aggregate",
        skip_all,
        fields(customer = %invoice.customer(), performances = invoice.performances().len())
    )]
    pub fn aggregate(
        &self,
        invoice: &Invoice,
        catalog: &PlayCatalog,
    ) -> BillingResult<StatementResult> {
        let mut lines = Vec::with_capacity(invoice.performances().len());
        let mut total_amount: u64 = 0;
        let mut total_volume_credits: u64 = 0;

        for performance in invoice.performances() {
            let priced = catalog.resolve(performance.play_id()).and_then(|play| {
                let rule = self.calculator.rule_for_tag(play.genre())?;
                let audience = performance.audience();
                Ok(PerformanceResult {
                    play_name: play.name().to_string(),
                    genre: rule.genre(),
                    audience,
                    amount: rule.amount(audience)?,
                    volume_credits: rule.volume_credits(audience),
                })
            });

            let line = match priced {
                Ok(line) => line,
                Err(err) => {
                    tracing::warn!(play_id = %performance.play_id(), error = %err, "statement aggregation aborted");
                    return Err(err);
                }
            };

            tracing::debug!(
                play = line.play_name(),
                genre = %line.genre(),
                audience = line.audience(),
                amount = line.amount(),
                volume_credits = line.volume_credits(),
                "performance priced"
            );

            total_amount = total_amount
                .checked_add(line.amount)
                .ok_or_else(|| BillingError::invariant("statement total overflow"))?;
            total_volume_credits = total_volume_credits
                .checked_add(line.volume_credits)
                .ok_or_else(|| BillingError::invariant("volume credit total overflow"))?;
            lines.push(line);
        }

        Ok(StatementResult {
            customer: invoice.customer().to_string(),
            performances: lines,
            total_amount,
            total_volume_credits,
        })
    }
}

/// Aggregate with the reference rate table.
pub fn statement(invoice: &Invoice, catalog: &PlayCatalog) -> BillingResult<StatementResult> {
    StatementAggregator::default().aggregate(invoice, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::Performance;
    use crate::play::Play;
    use playbill_core::PlayId;
    use proptest::prelude::*;

    fn test_catalog() -> PlayCatalog {
        PlayCatalog::from_plays([
            Play::new("hamlet", "Hamlet", "tragedy"),
            Play::new("as-like", "As You Like It", "comedy"),
            Play::new("othello", "Othello", "tragedy"),
            Play::new("henry-v", "Henry V", "history"),
            Play::new("winters-tale", "The Winter's Tale", "pastoral"),
        ])
        .unwrap()
    }

    #[test]
    fn aggregates_reference_invoice() {
        let invoice = Invoice::new(
            "BigCo",
            vec![Performance::new("hamlet", 55), Performance::new("as-like", 35)],
        );
        let result = statement(&invoice, &test_catalog()).unwrap();

        assert_eq!(result.customer(), "BigCo");
        assert_eq!(result.performances().len(), 2);

        let hamlet = &result.performances()[0];
        assert_eq!(hamlet.play_name(), "Hamlet");
        assert_eq!(hamlet.genre(), Genre::Tragedy);
        assert_eq!(hamlet.audience(), 55);
        assert_eq!(hamlet.amount(), 65_000);
        assert_eq!(hamlet.volume_credits(), 25);

        let as_like = &result.performances()[1];
        assert_eq!(as_like.genre(), Genre::Comedy);
        assert_eq!(as_like.amount(), 58_000);
        assert_eq!(as_like.volume_credits(), 12);

        assert_eq!(result.total_amount(), 123_000);
        assert_eq!(result.total_volume_credits(), 37);
    }

    #[test]
    fn empty_invoice_has_zero_totals() {
        let result = statement(&Invoice::new("Nobody", vec![]), &test_catalog()).unwrap();
        assert!(result.performances().is_empty());
        assert_eq!(result.total_amount(), 0);
        assert_eq!(result.total_volume_credits(), 0);
    }

    #[test]
    fn missing_play_aborts_aggregation() {
        let invoice = Invoice::new(
            "BigCo",
            vec![Performance::new("hamlet", 55), Performance::new("macbeth", 10)],
        );
        let err = statement(&invoice, &test_catalog()).unwrap_err();
        assert_eq!(err, BillingError::UnresolvedPlay(PlayId::new("macbeth")));
    }

    #[test]
    fn unknown_genre_aborts_aggregation() {
        let mut catalog = test_catalog();
        catalog.insert(Play::new("cats", "Cats", "musical")).unwrap();
        let invoice = Invoice::new("BigCo", vec![Performance::new("cats", 0)]);

        let err = statement(&invoice, &catalog).unwrap_err();
        assert_eq!(err, BillingError::UnknownGenre("musical".to_string()));
    }

    #[test]
    fn first_error_in_performance_order_wins() {
        let mut catalog = test_catalog();
        catalog.insert(Play::new("cats", "Cats", "musical")).unwrap();
        let invoice = Invoice::new(
            "BigCo",
            vec![
                Performance::new("hamlet", 10),
                Performance::new("cats", 10),
                Performance::new("macbeth", 10),
            ],
        );

        let err = statement(&invoice, &catalog).unwrap_err();
        assert!(matches!(err, BillingError::UnknownGenre(_)));
    }

    #[test]
    fn total_overflow_is_reported() {
        let mut rates = RateTable::default();
        rates.tragedy.base_amount = u64::MAX / 2 + 1;
        let aggregator = StatementAggregator::with_rates(rates).unwrap();
        let invoice = Invoice::new(
            "BigCo",
            vec![Performance::new("hamlet", 0), Performance::new("othello", 0)],
        );

        match aggregator.aggregate(&invoice, &test_catalog()).unwrap_err() {
            BillingError::InvariantViolation(msg) if msg.contains("statement total overflow") => {}
            other => panic!("Expected total overflow, got {other:?}"),
        }
    }

    #[test]
    fn shared_catalog_across_threads() {
        let catalog = &test_catalog();
        let aggregator = &StatementAggregator::default();
        let invoices: Vec<Invoice> = (0..8u32)
            .map(|i| Invoice::new(format!("Customer {i}"), vec![Performance::new("hamlet", 30 + i)]))
            .collect();

        let results: Vec<StatementResult> = std::thread::scope(|s| {
            let handles: Vec<_> = invoices
                .iter()
                .map(|invoice| s.spawn(move || aggregator.aggregate(invoice, catalog).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.customer(), format!("Customer {i}"));
            assert_eq!(result.total_amount(), 40_000 + 1_000 * i as u64);
        }
    }

    fn any_performance() -> impl Strategy<Value = Performance> {
        (
            prop::sample::select(vec!["hamlet", "as-like", "othello", "henry-v", "winters-tale"]),
            0u32..500,
        )
            .prop_map(|(id, audience)| Performance::new(id, audience))
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: output lines follow input order, for any permutation.
        #[test]
        fn aggregation_preserves_order(
            performances in prop::collection::vec(any_performance(), 0..20)
                .prop_shuffle()
        ) {
            let catalog = test_catalog();
            let invoice = Invoice::new("BigCo", performances.clone());
            let result = statement(&invoice, &catalog).unwrap();

            prop_assert_eq!(result.performances().len(), performances.len());
            for (line, performance) in result.performances().iter().zip(&performances) {
                let play = catalog.resolve(performance.play_id()).unwrap();
                prop_assert_eq!(line.play_name(), play.name());
                prop_assert_eq!(line.audience(), performance.audience());
            }
        }

        /// Property: totals equal the sum of individually priced performances.
        #[test]
        fn totals_are_additive(performances in prop::collection::vec(any_performance(), 0..20)) {
            let catalog = test_catalog();
            let calculator = Calculator::default();
            let invoice = Invoice::new("BigCo", performances.clone());
            let result = statement(&invoice, &catalog).unwrap();

            let mut amount = 0u64;
            let mut credits = 0u64;
            for performance in &performances {
                let play = catalog.resolve(performance.play_id()).unwrap();
                let charge = calculator.charge(play.genre(), performance.audience()).unwrap();
                amount += charge.amount;
                credits += charge.volume_credits;
            }

            prop_assert_eq!(result.total_amount(), amount);
            prop_assert_eq!(result.total_volume_credits(), credits);
        }

        /// Property: aggregation is deterministic.
        #[test]
        fn aggregation_is_deterministic(performances in prop::collection::vec(any_performance(), 0..20)) {
            let catalog = test_catalog();
            let invoice = Invoice::new("BigCo", performances);
            let first = statement(&invoice, &catalog).unwrap();
            let second = statement(&invoice, &catalog).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
