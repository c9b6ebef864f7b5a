//! JSON output helpers.
//!
//! Provides the run report serializer and the error-object formatter used by
//! `--json` when the run cannot start.

use anyhow::{Context, Result};

use crate::domain::RunReport;

/// Format the run report.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "succeeded": 1,
///   "total": 1,
///   "hosts": [ { "target": { "host": "...", "port": 4502 }, "steps": [ ... ] } ]
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_report(report: &RunReport) -> Result<String> {
    let obj = serde_json::json!({
        "succeeded": report.succeeded(),
        "total": report.total(),
        "hosts": report.hosts,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}
