//! JSON reporter for run reports

use crate::report::RunReport;
use anyhow::Result;

/// JSON format reporter
pub struct JsonReporter;

impl JsonReporter {
    /// Format a run report as JSON
    ///
    /// # Arguments
    ///
    /// * `report` - The run report to format
    /// * `pretty` - Whether to pretty-print the JSON
    pub fn format(report: &RunReport, pretty: bool) -> Result<String> {
        let output = if pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(output)
    }
}
