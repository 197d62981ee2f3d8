//! Result presentation, as text or JSON.

use std::cmp::Ordering;

use serde::Serialize;

/// One evaluated operation, ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub op: &'static str,
    pub signed: bool,
    pub radix: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<&'static str>,
    pub overflow: bool,
    /// Bytes of input used, for `parse`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumed: Option<usize>,
}

/// Lowercase name of an ordering.
#[must_use]
pub fn ordering_name(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    }
}

/// Render a report for stdout.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(report: &Report, json: bool, quiet: bool) -> serde_json::Result<String> {
    if json {
        return serde_json::to_string(report);
    }
    let body = report
        .value
        .as_deref()
        .or(report.ordering)
        .unwrap_or_default();
    if report.overflow && !quiet {
        Ok(format!("{body} (overflow)"))
    } else {
        Ok(body.to_owned())
    }
}
