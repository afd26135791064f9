//! JSON formatter for chartlint results.

use serde::Serialize;

use crate::analyzer::chartlint::lint::LintResult;
use crate::analyzer::chartlint::types::CheckOutcome;
use crate::error::Result;

/// JSON output structure for one chart.
#[derive(Serialize)]
struct JsonOutput<'a> {
    chart: &'a str,
    chart_path: String,
    valid: bool,
    error_count: usize,
    warning_count: usize,
    checks: &'a [CheckOutcome],
}

impl<'a> From<&'a LintResult> for JsonOutput<'a> {
    fn from(result: &'a LintResult) -> Self {
        Self {
            chart: &result.chart_name,
            chart_path: result.chart_path.display().to_string(),
            valid: result.valid,
            error_count: result.error_count,
            warning_count: result.warning_count,
            checks: &result.outcomes,
        }
    }
}

/// Format a lint result as JSON.
pub fn format(result: &LintResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonOutput::from(result))?)
}

/// Format several results as one JSON array.
pub fn format_many(results: &[LintResult]) -> Result<String> {
    let outputs: Vec<JsonOutput<'_>> = results.iter().map(JsonOutput::from).collect();
    Ok(serde_json::to_string_pretty(&outputs)?)
}
