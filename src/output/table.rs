use comfy_table::{Cell, Color};

use crate::core::TimingRow;
use crate::output::format::{create_styled_table, header_cell, right_cell, styled_cell};

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TimingTableOptions {
    pub(crate) use_color: bool,
}

fn build_header(use_color: bool) -> Vec<Cell> {
    ["Pos", "Driver", "Best Lap", "S1", "S2", "S3", "Lap"]
        .iter()
        .map(|h| header_cell(h, use_color))
        .collect()
}

/// Render ranked rows as a terminal table, leader first.
///
/// `Pos` is the 1-based rank in display order.
pub(crate) fn render_timing_table(
    rows: &[TimingRow],
    title: &str,
    options: TimingTableOptions,
) -> String {
    if rows.is_empty() {
        return "No drivers in session.\n".to_string();
    }

    let mut table = create_styled_table();
    if options.use_color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    table.set_header(build_header(options.use_color));

    let leader_color = if options.use_color {
        Some(Color::Green)
    } else {
        None
    };
    let best_color = if options.use_color {
        Some(Color::Magenta)
    } else {
        None
    };

    for (i, row) in rows.iter().enumerate() {
        let leader = i == 0;
        let color = if leader { leader_color } else { None };
        table.add_row(vec![
            right_cell(&(i + 1).to_string(), color, leader),
            styled_cell(&row.driver_name, color, leader),
            right_cell(&row.best_lap, best_color, false),
            right_cell(&row.sector_1, None, false),
            right_cell(&row.sector_2, None, false),
            right_cell(&row.sector_3, None, false),
            right_cell(&row.current_lap, None, false),
        ]);
    }

    format!("\n  {title}\n\n{table}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, best: &str, lap: &str) -> TimingRow {
        TimingRow {
            driver_name: name.to_string(),
            best_lap: best.to_string(),
            sector_1: "0:30".to_string(),
            sector_2: String::new(),
            sector_3: String::new(),
            current_lap: lap.to_string(),
        }
    }

    #[test]
    fn empty_rows_message() {
        let out = render_timing_table(&[], "Live Timing", TimingTableOptions::default());
        assert_eq!(out, "No drivers in session.\n");
    }

    #[test]
    fn table_lists_rows_in_order() {
        let rows = vec![row("Alice", "1:32", "12"), row("Bob", "1:33", "11")];
        let out = render_timing_table(&rows, "Live Timing", TimingTableOptions::default());
        assert!(out.contains("Live Timing"));
        for header in ["Pos", "Driver", "Best Lap", "S1", "S2", "S3", "Lap"] {
            assert!(out.contains(header), "missing header {header}");
        }
        let alice = out.find("Alice").unwrap();
        let bob = out.find("Bob").unwrap();
        assert!(alice < bob);
        assert!(out.contains("1:32"));
        assert!(!out.contains("\x1b["), "no color codes without use_color");
    }
}
