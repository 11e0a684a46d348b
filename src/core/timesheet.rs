//! Named collection of day logs keyed by calendar date

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::io::Read;

use super::daylog::DayLog;
use crate::error::AppError;

/// Serialized as `{"YYYY-MM-DD": ["HH:MM:SS", ...]}`, which is both the
/// stored form and the JSON import/export format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct Timesheet {
    record: BTreeMap<NaiveDate, DayLog>,
}

impl Timesheet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn from_record(record: BTreeMap<NaiveDate, DayLog>) -> Self {
        Self { record }
    }

    pub(crate) fn get(&self, date: NaiveDate) -> Option<&DayLog> {
        self.record.get(&date)
    }

    pub(crate) fn len(&self) -> usize {
        self.record.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.record.is_empty()
    }

    /// Day logs in chronological order
    pub(crate) fn days(&self) -> impl Iterator<Item = (NaiveDate, &DayLog)> {
        self.record.iter().map(|(date, day)| (*date, day))
    }

    pub(crate) fn total_hours(&self) -> f64 {
        self.record.values().map(DayLog::hours).sum()
    }

    /// Append times to a date, starting a new day log when none exists
    pub(crate) fn append(&mut self, date: NaiveDate, times: &[NaiveTime]) -> Result<(), AppError> {
        if times.is_empty() {
            return Ok(());
        }
        let day = match self.record.entry(date) {
            Entry::Occupied(entry) => {
                let day = entry.into_mut();
                day.append(times)?;
                day
            }
            Entry::Vacant(entry) => entry.insert(DayLog::new(times.to_vec())?),
        };
        tracing::debug!(%date, added = times.len(), total = day.len(), "appended");
        Ok(())
    }

    /// Union of both records; days present on both sides are combined
    pub(crate) fn merge(&self, other: &Timesheet) -> Result<Timesheet, AppError> {
        let mut record = self.record.clone();
        for (date, theirs) in &other.record {
            match record.entry(*date) {
                Entry::Vacant(entry) => {
                    entry.insert(theirs.clone());
                }
                Entry::Occupied(mut entry) => {
                    let combined = entry
                        .get()
                        .combine(theirs)
                        .ok_or(AppError::OverlappingDay { date: *date })?;
                    entry.insert(combined);
                }
            }
        }
        Ok(Timesheet { record })
    }

    /// Fold `merge` over the timesheets in order
    pub(crate) fn merge_all<'a, I>(timesheets: I) -> Result<Timesheet, AppError>
    where
        I: IntoIterator<Item = &'a Timesheet>,
    {
        timesheets
            .into_iter()
            .try_fold(Timesheet::new(), |merged, next| merged.merge(next))
    }

    pub(crate) fn from_json_reader<R: Read>(reader: R) -> Result<Self, AppError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub(crate) fn to_json_pretty(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
