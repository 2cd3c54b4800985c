use playbill_statement::StatementResult;

use crate::StatementRenderer;
use crate::money::MoneyFormat;

/// HTML fragment: heading, a table of performances, and the totals.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    money: MoneyFormat,
}

impl HtmlRenderer {
    pub fn new(money: MoneyFormat) -> Self {
        Self { money }
    }
}

impl StatementRenderer for HtmlRenderer {
    fn render(&self, statement: &StatementResult) -> String {
        let customer = escape(statement.customer());
        let mut out = format!("<h1>Statement for {customer}</h1>\n");
        out.push_str("<table>\n");
        out.push_str(&format!(" <caption>Statement for {customer}</caption>\n"));
        out.push_str(" <tr><th>play</th><th>seats</th><th>cost</th></tr>\n");
        for line in statement.performances() {
            out.push_str(&format!(
                " <tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape(line.play_name()),
                line.audience(),
                escape(&self.money.format(line.amount()))
            ));
        }
        out.push_str("</table>\n");
        out.push_str(&format!(
            "<p>Amount owed is <em>{}</em></p>\n",
            escape(&self.money.format(statement.total_amount()))
        ));
        out.push_str(&format!(
            "<p>You earned <em>{}</em> credits</p>\n",
            statement.total_volume_credits()
        ));
        out
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
