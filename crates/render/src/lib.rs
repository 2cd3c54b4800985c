//! Statement renderers.
//!
//! Renderers are pure formatters over a `StatementResult`. They never see an
//! invoice or a play catalog and never recompute amounts; the only thing they
//! add is presentation, driven by an explicit `MoneyFormat`.

pub mod error;
pub mod html;
pub mod money;
pub mod plain;

use core::str::FromStr;

use playbill_statement::StatementResult;

pub use error::RenderError;
pub use html::HtmlRenderer;
pub use money::{MAX_MINOR_DIGITS, MoneyFormat, SymbolPosition};
pub use plain::PlainTextRenderer;

/// Turns a computed statement into text.
pub trait StatementRenderer {
    fn render(&self, statement: &StatementResult) -> String;
}

/// Output formats a statement can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
}

impl OutputFormat {
    pub fn renderer(self, money: MoneyFormat) -> Box<dyn StatementRenderer + Send + Sync> {
        match self {
            OutputFormat::Text => Box::new(PlainTextRenderer::new(money)),
            OutputFormat::Html => Box::new(HtmlRenderer::new(money)),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" | "txt" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            _ => Err(RenderError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl core::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Html => f.write_str("html"),
        }
    }
}
