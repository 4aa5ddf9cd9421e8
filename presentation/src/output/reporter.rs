//! Line reporter: the outcome sink behind the result file

use super::line::LineFormatter;
use gradebook_application::{OutcomeSink, SinkError};
use gradebook_domain::Outcome;
use std::io::Write;

/// Writes each outcome as one line to the wrapped writer
pub struct LineReporter<W: Write> {
    writer: W,
    lines: usize,
}

impl<W: Write> LineReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, lines: 0 }
    }

    /// Number of lines written so far
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutcomeSink for LineReporter<W> {
    fn emit(&mut self, outcome: &Outcome) -> Result<(), SinkError> {
        writeln!(self.writer, "{}", LineFormatter::format(outcome))?;
        self.lines += 1;
        Ok(())
    }
}
