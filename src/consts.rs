/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wall-clock format for recorded timestamps: "09:30:00"
pub(crate) const TIME_FORMAT: &str = "%H:%M:%S";

/// Stem for generated timesheet names (timesheet1, timesheet2, ...)
pub(crate) const DEFAULT_NAME_STEM: &str = "timesheet";

/// Environment variable overriding the store location
pub(crate) const STORE_ENV: &str = "TIMESHEET_STORE";

/// Store file under the home directory when nothing else is configured
pub(crate) const DEFAULT_STORE_DIR: &str = ".timesheet";
pub(crate) const DEFAULT_STORE_FILE: &str = "timesheets.db";
