use crate::core::TimingRow;

/// Rows as a pretty-printed JSON array, leader first
pub(crate) fn output_rows_json(rows: &[TimingRow]) -> String {
    serde_json::to_string_pretty(rows).unwrap_or_else(|_| "[]".to_string())
}
