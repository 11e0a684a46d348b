//! SQLite-backed store: one row per timesheet, record kept as JSON

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, ErrorCode, OptionalExtension, params};

use super::{StoredEntry, TimesheetStore};
use crate::core::Timesheet;
use crate::error::AppError;

pub(crate) struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open or create the store file, creating its directory if needed
    pub(crate) fn open(path: &Path) -> Result<Self, AppError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| AppError::File {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA busy_timeout = 5000;")?;

        let store = Self { conn };
        store.init_schema()?;
        tracing::debug!(path = %path.display(), "opened store");
        Ok(store)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self, AppError> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), AppError> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS timesheets (
                name TEXT PRIMARY KEY NOT NULL,
                record TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
        ",
        )?;
        Ok(())
    }
}

fn decode(name: &str, record: &str) -> Result<Timesheet, AppError> {
    serde_json::from_str(record).map_err(|source| AppError::CorruptRecord {
        name: name.to_string(),
        source,
    })
}

/// Timestamps written by this store are RFC 3339; anything else reads as the epoch
fn parse_stamp(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}

impl TimesheetStore for SqliteStore {
    fn names(&self) -> Result<Vec<String>, AppError> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM timesheets ORDER BY name")?;
        let rows = stmt.query_map([], |row| row.get(0))?;

        let mut names = Vec::new();
        for row in rows {
            names.push(row?);
        }
        Ok(names)
    }

    fn entries(&self) -> Result<Vec<StoredEntry>, AppError> {
        let mut stmt = self.conn.prepare(
            "SELECT name, record, created_at, updated_at
             FROM timesheets
             ORDER BY name",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (name, record, created_at, updated_at) = row?;
            entries.push(StoredEntry {
                timesheet: decode(&name, &record)?,
                created_at: parse_stamp(&created_at),
                updated_at: parse_stamp(&updated_at),
                name,
            });
        }
        Ok(entries)
    }

    fn contains(&self, name: &str) -> Result<bool, AppError> {
        let found: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM timesheets WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    fn load(&self, name: &str) -> Result<Timesheet, AppError> {
        let record: Option<String> = self
            .conn
            .query_row(
                "SELECT record FROM timesheets WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()?;

        match record {
            Some(record) => decode(name, &record),
            None => Err(AppError::TimesheetNotFound {
                name: name.to_string(),
            }),
        }
    }

    fn save(&mut self, name: &str, timesheet: &Timesheet, overwrite: bool) -> Result<(), AppError> {
        let record = serde_json::to_string(timesheet)?;
        let now = Utc::now().to_rfc3339();

        if overwrite {
            self.conn.execute(
                "INSERT INTO timesheets (name, record, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?3)
                 ON CONFLICT(name) DO UPDATE SET
                     record = excluded.record,
                     updated_at = excluded.updated_at",
                params![name, record, now],
            )?;
        } else {
            let inserted = self.conn.execute(
                "INSERT INTO timesheets (name, record, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?3)",
                params![name, record, now],
            );
            match inserted {
                Ok(_) => {}
                Err(e) if e.sqlite_error_code() == Some(ErrorCode::ConstraintViolation) => {
                    return Err(AppError::TimesheetExists {
                        name: name.to_string(),
                    });
                }
                Err(e) => return Err(e.into()),
            }
        }

        tracing::debug!(name, days = timesheet.len(), overwrite, "saved timesheet");
        Ok(())
    }

    fn delete(&mut self, name: &str) -> Result<(), AppError> {
        let removed = self
            .conn
            .execute("DELETE FROM timesheets WHERE name = ?1", params![name])?;
        if removed == 0 {
            return Err(AppError::TimesheetNotFound {
                name: name.to_string(),
            });
        }
        tracing::debug!(name, "deleted timesheet");
        Ok(())
    }
}
