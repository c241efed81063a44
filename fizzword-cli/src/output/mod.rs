//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Output string followed by the replacement count
    #[default]
    Text,
    /// JSON array of records with input, output and counts
    Json,
}

/// One processed input, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Where the input came from (`<text>`, `<stdin>`, a path, or `path:line`)
    pub source: String,
    /// Input as given
    pub input: String,
    /// Input with replacements applied
    pub output: String,
    /// Number of replaced words
    pub count: usize,
    /// Number of words scanned
    pub words: usize,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single processed input
    fn format_record(&mut self, record: &Record) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Build the formatter for `format` writing to `writer`
pub fn formatter_for<W>(
    format: OutputFormat,
    writer: W,
    pretty_json: bool,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
    }
}
