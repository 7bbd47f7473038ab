use std::fmt::Write;

use crate::core::TimingRow;
use crate::output::format::csv_escape;

pub(crate) fn output_rows_csv(rows: &[TimingRow]) -> String {
    let mut out = String::new();
    out.push_str("driver,best_lap,sector_1,sector_2,sector_3,lap\n");

    for row in rows {
        let fields: Vec<String> = row.fields().iter().map(|f| csv_escape(f)).collect();
        let _ = writeln!(out, "{}", fields.join(","));
    }

    out
}
