//! Bucket worked hours by period
//!
//! Each day contributes its worked hours to the bucket its date floors to.
//! Buckets between the first and last populated one are filled with zero so
//! that the output is a contiguous series.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use super::period::Period;
use super::timesheet::Timesheet;
use super::types::DateFilter;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Summary {
    pub(crate) period: Period,
    /// Hours keyed by the first day of each bucket
    pub(crate) buckets: BTreeMap<NaiveDate, f64>,
}

impl Summary {
    pub(crate) fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub(crate) fn total(&self) -> f64 {
        self.buckets.values().sum()
    }

    /// Buckets oldest first
    pub(crate) fn rows(&self) -> impl DoubleEndedIterator<Item = (NaiveDate, f64)> + '_ {
        self.buckets.iter().map(|(start, hours)| (*start, *hours))
    }
}

pub(crate) fn summarize(timesheet: &Timesheet, filter: &DateFilter, period: Period) -> Summary {
    let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for (date, day) in timesheet.days().filter(|(date, _)| filter.contains(*date)) {
        if day.is_open() {
            tracing::warn!(%date, "odd number of timestamps, ignoring the last start");
        }
        *buckets.entry(period.floor(date)).or_default() += day.hours();
    }

    fill_gaps(&mut buckets, period);
    tracing::debug!(period = period.label(), buckets = buckets.len(), "summarized");

    Summary { period, buckets }
}

fn fill_gaps(buckets: &mut BTreeMap<NaiveDate, f64>, period: Period) {
    let (Some(&first), Some(&last)) = (buckets.keys().next(), buckets.keys().next_back()) else {
        return;
    };
    let mut cursor = period.next(first);
    while let Some(start) = cursor
        && start < last
    {
        buckets.entry(start).or_insert(0.0);
        cursor = period.next(start);
    }
}
