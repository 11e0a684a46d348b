//! Core module - timesheet model and summaries

mod aggregator;
mod daylog;
mod period;
mod timesheet;
mod types;

pub(crate) use aggregator::{Summary, summarize};
pub(crate) use daylog::DayLog;
pub(crate) use period::Period;
pub(crate) use timesheet::Timesheet;
pub(crate) use types::DateFilter;
