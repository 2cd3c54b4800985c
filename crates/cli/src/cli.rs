//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use playbill_observability::LogFormat;
use playbill_render::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "playbill")]
#[command(version)]
#[command(about = "Print billing statements for theatrical performances", long_about = None)]
pub struct Cli {
    /// Invoice document: one invoice object or an array of them
    #[arg(short, long)]
    pub invoice: PathBuf,

    /// Play catalog document: {"<id>": {"name": .., "type": ..}}
    #[arg(short, long)]
    pub plays: PathBuf,

    /// Output format (text or html)
    #[arg(short, long, env = "PLAYBILL_FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Locale used to print amounts (en-US, en-GB, de-DE, fr-FR)
    #[arg(short, long, env = "PLAYBILL_LOCALE", default_value = "en-US")]
    pub locale: String,

    /// Rate table overrides; genres left out keep their reference rates
    #[arg(long, env = "PLAYBILL_RATES")]
    pub rates: Option<PathBuf>,

    /// Log line layout (written to stderr)
    #[arg(long, value_enum, default_value = "json")]
    pub log_format: LogFormatArg,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum LogFormatArg {
    /// Structured JSON lines
    Json,
    /// Human-readable lines
    Compact,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Json => LogFormat::Json,
            LogFormatArg::Compact => LogFormat::Compact,
        }
    }
}
