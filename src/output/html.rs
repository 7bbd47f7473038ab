use crate::core::TimingRow;
use crate::output::format::html_escape;

/// Rows as the bare `<table>` fragment the timing page polls for
pub(crate) fn output_rows_html(rows: &[TimingRow]) -> String {
    let mut out = String::from("<table>");
    for row in rows {
        out.push_str("<tr>");
        for field in row.fields() {
            out.push_str("<td>");
            out.push_str(&html_escape(field));
            out.push_str("</td>");
        }
        out.push_str("</tr>");
    }
    out.push_str("</table>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_empty_table() {
        assert_eq!(output_rows_html(&[]), "<table></table>");
    }

    #[test]
    fn html_one_cell_per_field() {
        let rows = vec![TimingRow {
            driver_name: "<Ace>".to_string(),
            best_lap: "1:32".to_string(),
            sector_1: "0:30".to_string(),
            sector_2: "0:31".to_string(),
            sector_3: "0:31".to_string(),
            current_lap: String::new(),
        }];
        assert_eq!(
            output_rows_html(&rows),
            "<table><tr><td>&lt;Ace&gt;</td><td>1:32</td><td>0:30</td><td>0:31</td><td>0:31</td><td></td></tr></table>"
        );
    }
}
