use chrono::{Local, NaiveDateTime, Timelike, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::AppError;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Timezone {
    Local,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    /// Current wall-clock time in this zone, truncated to whole seconds
    pub(crate) fn now(self) -> NaiveDateTime {
        let naive = match self {
            Timezone::Local => Local::now().naive_local(),
            Timezone::Named(tz) => Utc::now().with_timezone(&tz).naive_local(),
        };
        naive.with_nanosecond(0).unwrap_or(naive)
    }
}
