//! Persistent name -> timesheet mapping
//!
//! Commands only see the [`TimesheetStore`] trait; the SQLite file behind it
//! can be swapped for the in-memory database in tests.

mod naming;
mod sqlite;

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::consts::{DEFAULT_STORE_DIR, DEFAULT_STORE_FILE};
use crate::core::Timesheet;
use crate::error::AppError;

pub(crate) use naming::{default_name, validate_name};
pub(crate) use sqlite::SqliteStore;

/// A stored timesheet with its bookkeeping timestamps
#[derive(Debug, Clone)]
pub(crate) struct StoredEntry {
    pub(crate) name: String,
    pub(crate) timesheet: Timesheet,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

pub(crate) trait TimesheetStore {
    /// Stored names in ascending order
    fn names(&self) -> Result<Vec<String>, AppError>;

    fn entries(&self) -> Result<Vec<StoredEntry>, AppError>;

    fn contains(&self, name: &str) -> Result<bool, AppError>;

    fn load(&self, name: &str) -> Result<Timesheet, AppError>;

    /// Store `timesheet` under `name`. Without `overwrite` an existing name is
    /// an error and the stored record is left alone.
    fn save(&mut self, name: &str, timesheet: &Timesheet, overwrite: bool) -> Result<(), AppError>;

    fn delete(&mut self, name: &str) -> Result<(), AppError>;
}

/// `~/.timesheet/timesheets.db`
pub(crate) fn default_store_path() -> Result<PathBuf, AppError> {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_STORE_DIR).join(DEFAULT_STORE_FILE))
        .ok_or(AppError::NoStoreLocation)
}
