//! Terminal run summary

use colored::{ColoredString, Colorize};
use gradebook_application::{RunEnd, RunReport};
use std::path::Path;

/// How a piece of the summary is highlighted
#[derive(Debug, Clone, Copy)]
enum Tone {
    Heading,
    Good,
    Warn,
    Bad,
}

/// Formats the one-line summaries printed after a run
///
/// With color off the text is identical, only without escape codes.
pub struct SummaryFormatter {
    color: bool,
}

impl SummaryFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn format(&self, report: &RunReport, lines: usize, output: &Path) -> String {
        let rejected = report.rejected.to_string();
        let mut summary = format!(
            "{} {} commands: {} succeeded, {} rejected, {} ignored",
            self.paint("Processed", Tone::Heading),
            report.handled,
            self.paint(&report.succeeded.to_string(), Tone::Good),
            if report.rejected == 0 {
                rejected
            } else {
                self.paint(&rejected, Tone::Warn)
            },
            report.ignored,
        );

        if report.dropped > 0 {
            summary.push_str(&format!(
                ", {} dropped",
                self.paint(&report.dropped.to_string(), Tone::Bad)
            ));
        }

        summary.push_str(&format!(
            "; {} lines written to {}",
            lines,
            output.display()
        ));

        if report.end == RunEnd::Truncated {
            summary.push_str(&format!(
                " {}",
                self.paint("(input ended mid-command)", Tone::Warn)
            ));
        }

        summary
    }

    /// One-line result of a based-sum run
    pub fn format_based_sum(&self, sum: Option<i64>, output: &Path) -> String {
        let value = match sum {
            Some(sum) => self.paint(&sum.to_string(), Tone::Good),
            None => self.paint("Invalid inputs", Tone::Bad),
        };
        format!(
            "{} {} written to {}",
            self.paint("Based sum", Tone::Heading),
            value,
            output.display()
        )
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.color {
            return text.to_string();
        }
        let colored: ColoredString = match tone {
            Tone::Heading => text.cyan().bold(),
            Tone::Good => text.green(),
            Tone::Warn => text.yellow(),
            Tone::Bad => text.red(),
        };
        colored.to_string()
    }
}
