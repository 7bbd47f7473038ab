mod csv;
mod format;
mod html;
mod json;
mod table;

pub(crate) use csv::output_rows_csv;
pub(crate) use html::output_rows_html;
pub(crate) use json::output_rows_json;
pub(crate) use table::{TimingTableOptions, render_timing_table};
