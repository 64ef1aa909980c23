//! Report writers for batch lint results.

use crate::core::types::BatchReport;
use colored::*;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_batch(&mut self, batch: &BatchReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_batch(&mut self, batch: &BatchReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(batch)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_batch(&mut self, batch: &BatchReport) -> anyhow::Result<()> {
        for file in &batch.files {
            writeln!(self.writer, "{}", file.path.display().to_string().bold())?;
            if file.report.warnings.is_empty() {
                writeln!(self.writer, "  {}", "no warnings".green())?;
            }
            for warning in &file.report.warnings {
                writeln!(self.writer, "  {} {}", "warning:".yellow(), warning.message)?;
                writeln!(self.writer, "    {}", warning.reference.dimmed())?;
            }
            for (name, score) in &file.report.scores {
                writeln!(self.writer, "  {name}: {score:.1}")?;
            }
            writeln!(self.writer)?;
        }
        for failure in &batch.failures {
            writeln!(
                self.writer,
                "{} {}: {}",
                "error:".red(),
                failure.path.display(),
                failure.error
            )?;
        }
        writeln!(
            self.writer,
            "{} file(s) linted, {} warning(s), {} failure(s)",
            batch.files.len(),
            batch.total_warnings(),
            batch.failures.len()
        )?;
        Ok(())
    }
}

/// Build a writer for the requested format over any `Write` destination.
pub fn create_writer<W: Write + 'static>(
    format: OutputFormat,
    destination: W,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(destination)),
    }
}
