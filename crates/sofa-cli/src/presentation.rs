//! Terminal rendering of the result row.
//!
//! Format-only: the row arrives fully evaluated.

use sofa_core::EvaluationResult;

/// Render the row as aligned `key = value` lines in column order.
pub fn format_row(row: &EvaluationResult) -> String {
    let columns = row.columns();
    let width = columns.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

    columns
        .iter()
        .map(|(name, value)| format!("{name:<width$} = {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the row as a pretty-printed JSON object.
pub fn format_row_json(row: &EvaluationResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(row)
}
