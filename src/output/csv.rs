use std::fmt::Write;

use crate::cli::SortOrder;
use crate::core::Summary;
use crate::output::format::{ordered_rows, round_hours};

/// First CSV column, the bucket key, whatever the period
const KEY_COLUMN: &str = "date";

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// `date,<components...>,hours` followed by one row per bucket
pub(crate) fn output_summary_csv(summary: &Summary, order: SortOrder) -> String {
    let period = summary.period;
    let mut out = String::new();

    let header: Vec<&str> = std::iter::once(KEY_COLUMN)
        .chain(period.component_names().iter().copied())
        .chain(std::iter::once("hours"))
        .collect();
    out.push_str(&header.join(","));
    out.push('\n');

    for (start, hours) in ordered_rows(summary, order) {
        let mut fields = vec![csv_escape(&period.key(start))];
        fields.extend(period.components(start).iter().map(|c| csv_escape(c)));
        out.push_str(&fields.join(","));
        let _ = write!(out, ",{}", round_hours(hours));
        out.push('\n');
    }

    out
}
