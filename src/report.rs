use crate::error::{KeysError, Result};
use crate::types::{KeyDiff, KeySet};
use std::io::Write;

pub const MATCH_MESSAGE: &str = "✅ The two JSON files have exactly the same keys.";
pub const MISMATCH_MESSAGE: &str = "❌ The JSON files differ in keys.";

/// Writes a human-readable key comparison report
pub struct ReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W) -> Self {
        ReportWriter { writer }
    }

    pub fn write_diff(&mut self, diff: &KeyDiff) -> Result<()> {
        self.write_all(diff).map_err(KeysError::Report)
    }

    fn write_all(&mut self, diff: &KeyDiff) -> std::io::Result<()> {
        if diff.is_match() {
            writeln!(self.writer, "{}", MATCH_MESSAGE)?;
        } else {
            writeln!(self.writer, "{}", MISMATCH_MESSAGE)?;
            self.write_section("Keys only in first file:", &diff.only_in_first)?;
            self.write_section("Keys only in second file:", &diff.only_in_second)?;
        }
        self.writer.flush()
    }

    fn write_section(&mut self, heading: &str, keys: &KeySet) -> std::io::Result<()> {
        if keys.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "\n{}", heading)?;
        for key in keys.iter() {
            writeln!(self.writer, "  {}", key)?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
