use chrono::{NaiveDate, NaiveTime};

use crate::error::AppError;

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    let s = s.trim();
    // Try YYYYMMDD
    if s.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(s, "%Y%m%d")
    {
        return Ok(d);
    }
    // Try YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    Err(AppError::InvalidDate {
        input: s.to_string(),
    })
}

/// Parse a wall-clock time; seconds and fractional seconds are optional.
pub(crate) fn parse_time(s: &str) -> Result<NaiveTime, AppError> {
    let s = s.trim();
    for format in ["%H:%M:%S%.f", "%H:%M"] {
        if let Ok(t) = NaiveTime::parse_from_str(s, format) {
            return Ok(t);
        }
    }
    Err(AppError::InvalidTime {
        input: s.to_string(),
    })
}
