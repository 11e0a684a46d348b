use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid time \"{input}\" (expected HH:MM, HH:MM:SS or HH:MM:SS.ffffff)")]
    InvalidTime { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Invalid timesheet name \"{input}\"")]
    InvalidName { input: String },

    #[error("Timestamps are not in chronological order")]
    UnorderedTimestamps,

    #[error("Timestamp {time} is not later than the last recorded timestamp {last}")]
    TimestampNotAfter { time: NaiveTime, last: NaiveTime },

    #[error("Cannot merge {date}: timestamps of one timesheet interleave with the other")]
    OverlappingDay { date: NaiveDate },

    #[error("An interval is already running on {date}; stop it first")]
    AlreadyStarted { date: NaiveDate },

    #[error("No running interval on {date}; start one first")]
    NotStarted { date: NaiveDate },

    #[error("Timesheet \"{name}\" not found")]
    TimesheetNotFound { name: String },

    #[error("Timesheet \"{name}\" already exists (use --force to overwrite)")]
    TimesheetExists { name: String },

    #[error("No timesheet selected: {count} stored, pass --name or set default_timesheet")]
    NoTimesheetSelected { count: usize },

    #[error("Cannot determine the store location; pass --store or set TIMESHEET_STORE")]
    NoStoreLocation,

    #[error("Stored timesheet \"{name}\" is corrupt: {source}")]
    CorruptRecord {
        name: String,
        source: serde_json::Error,
    },

    #[error("{}: {source}", .path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_date() {
        let e = AppError::InvalidDate {
            input: "abc".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid date "abc" (expected YYYYMMDD or YYYY-MM-DD)"#
        );
    }

    #[test]
    fn app_error_display_timezone() {
        let e = AppError::InvalidTimezone {
            input: "Mars/Olympus".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid timezone: Mars/Olympus");
    }

    #[test]
    fn app_error_display_not_after() {
        let e = AppError::TimestampNotAfter {
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            last: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
        };
        assert_eq!(
            e.to_string(),
            "Timestamp 09:00:00 is not later than the last recorded timestamp 10:30:00"
        );
    }

    #[test]
    fn app_error_display_overlap() {
        let e = AppError::OverlappingDay {
            date: NaiveDate::from_ymd_opt(2022, 6, 27).unwrap(),
        };
        assert!(e.to_string().starts_with("Cannot merge 2022-06-27:"));
    }

    #[test]
    fn app_error_display_file() {
        let e = AppError::File {
            path: PathBuf::from("/tmp/out.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(e.to_string(), "/tmp/out.csv: missing");
    }

    #[test]
    fn app_error_from_io_error() {
        let io = std::io::Error::other("broken pipe");
        let app: AppError = io.into();
        assert_eq!(app.to_string(), "broken pipe");
    }
}
