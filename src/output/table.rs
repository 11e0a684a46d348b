use comfy_table::{Cell, Color};

use crate::cli::SortOrder;
use crate::consts::{DATE_FORMAT, TIME_FORMAT};
use crate::core::{Period, Summary, Timesheet};
use crate::output::format::{
    create_styled_table, format_hours, header_cell, ordered_rows, right_cell, styled_cell,
};
use crate::store::StoredEntry;

const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

fn period_title(period: Period) -> &'static str {
    match period {
        Period::Day => "Date",
        Period::Week => "Week",
        Period::Month => "Month",
        Period::Year => "Year",
    }
}

fn total_color(use_color: bool) -> Option<Color> {
    use_color.then_some(Color::Yellow)
}

/// Hours per bucket with a bold total row
pub(crate) fn render_summary_table(summary: &Summary, order: SortOrder, use_color: bool) -> String {
    let period = summary.period;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell(period_title(period), use_color),
        header_cell("Hours", use_color),
    ]);

    for (start, hours) in ordered_rows(summary, order) {
        let color = (use_color && hours == 0.0).then_some(Color::DarkGrey);
        table.add_row(vec![
            styled_cell(&period.key(start), color, false),
            right_cell(&format_hours(hours), color, false),
        ]);
    }

    let color = total_color(use_color);
    table.add_row(vec![
        styled_cell("Total", color, true),
        right_cell(&format_hours(summary.total()), color, true),
    ]);

    table.to_string()
}

/// One row per stored timesheet
pub(crate) fn render_list_table(entries: &[StoredEntry], use_color: bool) -> String {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Name", use_color),
        header_cell("Days", use_color),
        header_cell("Hours", use_color),
        header_cell("Created", use_color),
        header_cell("Updated", use_color),
    ]);

    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.name),
            right_cell(&entry.timesheet.len().to_string(), None, false),
            right_cell(&format_hours(entry.timesheet.total_hours()), None, false),
            Cell::new(entry.created_at.format(STAMP_FORMAT)),
            Cell::new(entry.updated_at.format(STAMP_FORMAT)),
        ]);
    }

    table.to_string()
}

/// Every recorded day with its timestamps; an open interval is marked
pub(crate) fn render_timesheet_table(timesheet: &Timesheet, use_color: bool) -> String {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Date", use_color),
        header_cell("Timestamps", use_color),
        header_cell("Hours", use_color),
    ]);

    for (date, day) in timesheet.days() {
        let times: Vec<String> = day
            .timestamps()
            .chunks(2)
            .map(|pair| match pair {
                [start, stop] => format!(
                    "{}-{}",
                    start.format(TIME_FORMAT),
                    stop.format(TIME_FORMAT)
                ),
                [start] => format!("{}-", start.format(TIME_FORMAT)),
                _ => String::new(),
            })
            .collect();
        let times = if day.is_empty() {
            "-".to_string()
        } else {
            times.join(" ")
        };
        let color = (use_color && day.is_open()).then_some(Color::Green);
        table.add_row(vec![
            Cell::new(date.format(DATE_FORMAT)),
            styled_cell(&times, color, false),
            right_cell(&format_hours(day.hours()), None, false),
        ]);
    }

    let color = total_color(use_color);
    table.add_row(vec![
        styled_cell("Total", color, true),
        Cell::new(""),
        right_cell(&format_hours(timesheet.total_hours()), color, true),
    ]);

    table.to_string()
}
