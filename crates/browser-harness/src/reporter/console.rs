//! Console reporter for run reports
//!
//! Human-readable summary: one line per case, attachment listings for
//! failures, and an overall verdict.

use anyhow::Result;
use std::fmt::Write;

use crate::report::{CaseReport, RunReport, Status};

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Format a run report for console output
    pub fn format(report: &RunReport) -> Result<String> {
        let mut output = String::new();

        writeln!(output)?;
        writeln!(output, "════════════════════════════════════════════════════════════════")?;
        writeln!(output, "  {}", report.suite)?;
        writeln!(output, "  started {}", report.started_at)?;
        writeln!(output, "════════════════════════════════════════════════════════════════")?;
        writeln!(output)?;

        for case in &report.cases {
            Self::format_case(&mut output, case)?;
        }

        let passed = report
            .cases
            .iter()
            .filter(|c| c.status == Status::Passed)
            .count();
        let failed = report.failures().count();
        let skipped = report
            .cases
            .iter()
            .filter(|c| c.status == Status::Skipped)
            .count();

        writeln!(output)?;
        writeln!(output, "────────────────────────────────────────────────────────────────")?;
        writeln!(
            output,
            "  {} passed, {} failed, {} skipped",
            passed, failed, skipped
        )?;
        let verdict = if report.passed { "✓ PASSED" } else { "✗ FAILED" };
        writeln!(output, "  Overall: {}", verdict)?;
        writeln!(output)?;

        Ok(output)
    }

    fn format_case(output: &mut String, case: &CaseReport) -> Result<()> {
        let symbol = match case.status {
            Status::Passed => "✓",
            Status::Failed => "✗",
            Status::Skipped => "-",
        };
        writeln!(output, "  {} {} ({}ms)", symbol, case.id, case.duration_ms)?;

        if let Some(message) = &case.message {
            writeln!(output, "      {}", message)?;
        }
        for attachment in &case.attachments {
            match &attachment.source {
                Some(path) => writeln!(
                    output,
                    "      [{}] {} -> {}",
                    attachment.kind.mime(),
                    attachment.name,
                    path.display()
                )?,
                None => writeln!(
                    output,
                    "      [{}] {}",
                    attachment.kind.mime(),
                    attachment.name
                )?,
            }
        }
        Ok(())
    }
}
