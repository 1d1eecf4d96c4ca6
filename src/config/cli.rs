use crate::core::{AreaReport, OutputFormat, Reporter};
use crate::utils::error::Result;
use std::io::Write;

/// Writes reports to a byte sink, one line per report.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleReporter<std::io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(std::io::stdout(), format)
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, report: &AreaReport) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", report.sentence())?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, report)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}
