//! Plain text output formatter

use super::{OutputFormatter, Record};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs the processed string, then its count
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_record(&mut self, record: &Record) -> Result<()> {
        writeln!(self.writer, "{}", record.output)?;
        writeln!(self.writer, "count: {}", record.count)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
