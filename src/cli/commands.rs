//! CLI subcommand definitions

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::core::Period;

use super::args::{OutputFormat, SortOrder};

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Create an empty timesheet, or import one from JSON
    Create(CreateArgs),
    /// Append timestamps to a day
    Append(AppendArgs),
    /// Start an interval (fails if one is already running)
    Start(StampArgs),
    /// Stop the running interval
    Stop(StampArgs),
    /// Summarize hours worked by day, week, month or year
    Summarize(SummarizeArgs),
    /// Show every recorded day of a timesheet
    Show,
    /// Write a timesheet as JSON
    Export(ExportArgs),
    /// List stored timesheets
    List,
    /// Delete a stored timesheet
    Delete(DeleteArgs),
    /// Merge timesheets into a new one
    Merge(MergeArgs),
}

#[derive(Debug, Args)]
pub(crate) struct CreateArgs {
    /// Import day logs from a JSON file ({"YYYY-MM-DD": ["HH:MM:SS", ...]})
    #[arg(long, value_name = "PATH")]
    pub(crate) from_json: Option<PathBuf>,

    /// Replace an existing timesheet with the same name
    #[arg(short, long)]
    pub(crate) force: bool,
}

#[derive(Debug, Args)]
pub(crate) struct AppendArgs {
    /// Day to append to (YYYYMMDD or YYYY-MM-DD, default: today)
    #[arg(short, long)]
    pub(crate) date: Option<String>,

    /// Time to append (HH:MM[:SS]); repeat for several, default: now
    #[arg(short, long = "time", value_name = "TIME")]
    pub(crate) times: Vec<String>,
}

#[derive(Debug, Args)]
pub(crate) struct StampArgs {
    /// Day of the interval (YYYYMMDD or YYYY-MM-DD, default: today)
    #[arg(short, long)]
    pub(crate) date: Option<String>,

    /// Time to record (HH:MM[:SS], default: now)
    #[arg(short, long)]
    pub(crate) time: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct SummarizeArgs {
    /// Bucket size [default: day]
    #[arg(short, long, value_enum)]
    pub(crate) period: Option<Period>,

    /// Filter from date, inclusive (YYYYMMDD or YYYY-MM-DD)
    #[arg(short, long, conflicts_with_all = ["this", "last"])]
    pub(crate) since: Option<String>,

    /// Filter until date, inclusive (YYYYMMDD or YYYY-MM-DD)
    #[arg(short, long, conflicts_with_all = ["this", "last"])]
    pub(crate) until: Option<String>,

    /// Only the current day/week/month/year
    #[arg(long, conflicts_with = "last")]
    pub(crate) this: bool,

    /// Only the previous day/week/month/year
    #[arg(long)]
    pub(crate) last: bool,

    /// Output format [default: inferred from --output, else table]
    #[arg(short, long, value_enum)]
    pub(crate) format: Option<OutputFormat>,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub(crate) output: Option<PathBuf>,

    /// Sort order for buckets [default: asc]
    #[arg(long, value_enum)]
    pub(crate) order: Option<SortOrder>,
}

#[derive(Debug, Args)]
pub(crate) struct ExportArgs {
    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub(crate) struct DeleteArgs {
    /// Timesheet to delete
    pub(crate) timesheet: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub(crate) yes: bool,
}

#[derive(Debug, Args)]
pub(crate) struct MergeArgs {
    /// Timesheets to merge, in order
    #[arg(required = true, num_args = 1..)]
    pub(crate) timesheets: Vec<String>,

    /// Name of the merged timesheet (default: next free timesheetN)
    #[arg(long, value_name = "NAME")]
    pub(crate) into: Option<String>,

    /// Replace an existing timesheet named by --into
    #[arg(short, long)]
    pub(crate) force: bool,
}
