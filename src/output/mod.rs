mod csv;
mod format;
mod json;
mod table;

pub(crate) use csv::output_summary_csv;
pub(crate) use json::output_summary_json;
pub(crate) use table::{render_list_table, render_summary_table, render_timesheet_table};
