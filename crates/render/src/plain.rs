use playbill_statement::StatementResult;

use crate::StatementRenderer;
use crate::money::MoneyFormat;

/// Plain-text statement, one line per performance.
#[derive(Debug, Clone, Default)]
pub struct PlainTextRenderer {
    money: MoneyFormat,
}

impl PlainTextRenderer {
    pub fn new(money: MoneyFormat) -> Self {
        Self { money }
    }
}

impl StatementRenderer for PlainTextRenderer {
    fn render(&self, statement: &StatementResult) -> String {
        let mut out = format!("Statement for {}\n", statement.customer());
        for line in statement.performances() {
            out.push_str(&format!(
                "  {}: {} ({} seats)\n",
                line.play_name(),
                self.money.format(line.amount()),
                line.audience()
            ));
        }
        out.push_str(&format!(
            "Amount owed is {}\n",
            self.money.format(statement.total_amount())
        ));
        out.push_str(&format!(
            "You earned {} credits\n",
            statement.total_volume_credits()
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playbill_statement::{Invoice, Performance, Play, PlayCatalog, statement};

    fn big_co() -> StatementResult {
        let catalog = PlayCatalog::from_plays([
            Play::new("hamlet", "Hamlet", "tragedy"),
            Play::new("as-like", "As You Like It", "comedy"),
            Play::new("othello", "Othello", "tragedy"),
        ])
        .unwrap();
        let invoice = Invoice::new(
            "BigCo",
            vec![
                Performance::new("hamlet", 55),
                Performance::new("as-like", 35),
                Performance::new("othello", 40),
            ],
        );
        statement(&invoice, &catalog).unwrap()
    }

    #[test]
    fn renders_us_statement() {
        let text = PlainTextRenderer::default().render(&big_co());
        assert_eq!(
            text,
            "Statement for BigCo\n\
             \x20 Hamlet: $650.00 (55 seats)\n\
             \x20 As You Like It: $580.00 (35 seats)\n\
             \x20 Othello: $500.00 (40 seats)\n\
             Amount owed is $1,730.00\n\
             You earned 47 credits\n"
        );
    }

    #[test]
    fn locale_changes_only_money() {
        let text = PlainTextRenderer::new(MoneyFormat::de_de()).render(&big_co());
        assert!(text.contains("  Hamlet: 650,00 € (55 seats)\n"));
        assert!(text.contains("Amount owed is 1.730,00 €\n"));
        assert!(text.ends_with("You earned 47 credits\n"));
    }
}
