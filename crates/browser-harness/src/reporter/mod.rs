//! Run report output
//!
//! Formats a [`RunReport`](crate::report::RunReport) for humans or
//! machines.
//!
//! # Output Formats
//!
//! - **JSON**: machine-readable, for CI integration
//! - **Console**: human-readable summary with per-case status
//!
//! # Example
//!
//! ```no_run
//! use browser_harness::reporter::{OutputFormat, Reporter};
//! use browser_harness::report::RunReport;
//!
//! # fn example(report: RunReport) -> anyhow::Result<()> {
//! Reporter::new(OutputFormat::Console).report(&report)?;
//! Reporter::new(OutputFormat::JsonPretty).write_to_file(&report, "report.json")?;
//! # Ok(())
//! # }
//! ```

mod console;
mod json;

use anyhow::Result;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::report::RunReport;

pub use console::ConsoleReporter;
pub use json::JsonReporter;

/// Output format for run reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON format for machine parsing
    Json,
    /// Pretty-printed JSON
    JsonPretty,
    /// Console output
    #[default]
    Console,
}

/// Reporter for run reports
pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    /// Create a new reporter with the specified output format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Report to stdout
    pub fn report(&self, report: &RunReport) -> Result<()> {
        let output = self.format_report(report)?;
        print!("{}", output);
        io::stdout().flush()?;
        Ok(())
    }

    /// Write the formatted report to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, report: &RunReport, path: P) -> Result<()> {
        let output = self.format_report(report)?;
        fs::write(path, output)?;
        Ok(())
    }

    /// Format the report as a string
    pub fn format_report(&self, report: &RunReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => JsonReporter::format(report, false),
            OutputFormat::JsonPretty => JsonReporter::format(report, true),
            OutputFormat::Console => ConsoleReporter::format(report),
        }
    }
}
