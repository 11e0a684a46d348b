//! Timestamps recorded on a single calendar day

use chrono::{NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

const MICROS_PER_HOUR: f64 = 3.6e9;

/// Strictly increasing wall-clock times. Even positions start an interval,
/// odd positions stop it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NaiveTime>", into = "Vec<NaiveTime>")]
pub(crate) struct DayLog {
    timestamps: Vec<NaiveTime>,
}

fn is_strictly_increasing(times: &[NaiveTime]) -> bool {
    times.windows(2).all(|pair| pair[0] < pair[1])
}

impl DayLog {
    pub(crate) fn new(timestamps: Vec<NaiveTime>) -> Result<Self, AppError> {
        if !is_strictly_increasing(&timestamps) {
            return Err(AppError::UnorderedTimestamps);
        }
        Ok(Self { timestamps })
    }

    pub(crate) fn timestamps(&self) -> &[NaiveTime] {
        &self.timestamps
    }

    pub(crate) fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// An interval has been started but not stopped
    pub(crate) fn is_open(&self) -> bool {
        self.timestamps.len() % 2 == 1
    }

    /// Append a batch of times, all later than anything already recorded
    pub(crate) fn append(&mut self, times: &[NaiveTime]) -> Result<(), AppError> {
        let Some(&first) = times.first() else {
            return Ok(());
        };
        if !is_strictly_increasing(times) {
            return Err(AppError::UnorderedTimestamps);
        }
        if let Some(&last) = self.timestamps.last()
            && first <= last
        {
            return Err(AppError::TimestampNotAfter { time: first, last });
        }
        self.timestamps.extend_from_slice(times);
        Ok(())
    }

    /// Time covered by complete intervals; a trailing start is ignored
    pub(crate) fn worked(&self) -> TimeDelta {
        self.timestamps
            .chunks_exact(2)
            .fold(TimeDelta::zero(), |total, pair| total + (pair[1] - pair[0]))
    }

    pub(crate) fn hours(&self) -> f64 {
        self.worked()
            .num_microseconds()
            .map_or(0.0, |micros| micros as f64 / MICROS_PER_HOUR)
    }

    /// Concatenate two logs of the same day when one lies entirely before the
    /// other. Returns `None` when their timestamps interleave.
    pub(crate) fn combine(&self, other: &DayLog) -> Option<DayLog> {
        let (first, second) = match (self.timestamps.last(), other.timestamps.first()) {
            (None, _) | (_, None) => (self, other),
            (Some(own_last), Some(other_first)) if own_last < other_first => (self, other),
            _ => match (other.timestamps.last(), self.timestamps.first()) {
                (Some(other_last), Some(own_first)) if other_last < own_first => (other, self),
                _ => return None,
            },
        };
        let mut timestamps = first.timestamps.clone();
        timestamps.extend_from_slice(&second.timestamps);
        Some(DayLog { timestamps })
    }
}

impl TryFrom<Vec<NaiveTime>> for DayLog {
    type Error = AppError;

    fn try_from(timestamps: Vec<NaiveTime>) -> Result<Self, Self::Error> {
        DayLog::new(timestamps)
    }
}

impl From<DayLog> for Vec<NaiveTime> {
    fn from(day: DayLog) -> Self {
        day.timestamps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    fn log(times: &[NaiveTime]) -> DayLog {
        DayLog::new(times.to_vec()).unwrap()
    }

    fn sample() -> DayLog {
        log(&[
            t(0, 0, 0),
            t(1, 0, 0),
            t(1, 0, 1),
            NaiveTime::from_hms_micro_opt(2, 1, 1, 1).unwrap(),
        ])
    }

    #[test]
    fn new_rejects_unordered_or_duplicate() {
        assert!(DayLog::new(vec![t(2, 0, 0), t(1, 0, 0)]).is_err());
        assert!(DayLog::new(vec![t(1, 0, 0), t(1, 0, 0)]).is_err());
        assert!(DayLog::new(Vec::new()).is_ok());
    }

    #[test]
    fn append_extends_in_order() {
        let mut day = log(&[t(9, 0, 0)]);
        day.append(&[t(12, 0, 0), t(13, 0, 0)]).unwrap();
        assert_eq!(day.timestamps(), &[t(9, 0, 0), t(12, 0, 0), t(13, 0, 0)]);
    }

    #[test]
    fn append_empty_is_noop() {
        let mut day = sample();
        day.append(&[]).unwrap();
        assert_eq!(day, sample());
    }

    #[test]
    fn append_rejects_time_not_after_last() {
        let mut day = sample();
        let err = day.append(&[t(0, 0, 0)]).unwrap_err();
        assert!(matches!(err, AppError::TimestampNotAfter { .. }));
        assert_eq!(day, sample());
    }

    #[test]
    fn append_rejects_unordered_batch() {
        let mut day = DayLog::default();
        let err = day.append(&[t(5, 0, 0), t(4, 0, 0)]).unwrap_err();
        assert!(matches!(err, AppError::UnorderedTimestamps));
        assert!(day.is_empty());
    }

    #[test]
    fn hours_of_empty_log_is_zero() {
        assert_eq!(DayLog::default().hours(), 0.0);
    }

    #[test]
    fn hours_sum_pairs() {
        let day = log(&[t(2, 0, 0), t(3, 0, 0), t(7, 30, 0), t(8, 0, 0)]);
        assert_eq!(day.hours(), 1.5);
    }

    #[test]
    fn hours_with_seconds() {
        let day = log(&[t(0, 0, 0), t(1, 3, 1)]);
        let expected = 1.0 + 3.0 / 60.0 + 1.0 / 3600.0;
        assert!((day.hours() - expected).abs() < 1e-12);
    }

    #[test]
    fn trailing_start_is_ignored() {
        let day = log(&[t(1, 0, 0), t(3, 0, 0), t(5, 0, 0)]);
        assert!(day.is_open());
        assert_eq!(day.hours(), 2.0);
    }

    #[test]
    fn alternate_hours_across_a_day() {
        let times: Vec<_> = (1..24).step_by(2).map(|h| t(h, 0, 0)).collect();
        assert_eq!(log(&times).hours(), 12.0);
    }

    #[test]
    fn combine_earlier_then_later() {
        let later = log(&[t(3, 1, 1), t(4, 1, 1)]);
        let combined = sample().combine(&later).unwrap();
        assert_eq!(combined.len(), 6);
        assert_eq!(combined.timestamps()[4], t(3, 1, 1));
    }

    #[test]
    fn combine_puts_earlier_log_first() {
        let earlier = log(&[t(1, 0, 0)]);
        let day = log(&[t(2, 0, 0), t(3, 0, 0)]);
        let combined = day.combine(&earlier).unwrap();
        assert_eq!(combined.timestamps(), &[t(1, 0, 0), t(2, 0, 0), t(3, 0, 0)]);
    }

    #[test]
    fn combine_with_empty() {
        assert_eq!(sample().combine(&DayLog::default()), Some(sample()));
        assert_eq!(DayLog::default().combine(&sample()), Some(sample()));
    }

    #[test]
    fn combine_interleaved_fails() {
        let a = log(&[t(1, 0, 0), t(3, 0, 0)]);
        let b = log(&[t(2, 0, 0), t(4, 0, 0)]);
        assert!(a.combine(&b).is_none());
        assert!(sample().combine(&sample()).is_none());
    }

    #[test]
    fn serde_as_plain_list() {
        let day = log(&[t(9, 0, 0), t(17, 30, 0)]);
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, r#"["09:00:00","17:30:00"]"#);
        let back: DayLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, day);
    }

    #[test]
    fn deserialize_rejects_unordered() {
        let result: Result<DayLog, _> = serde_json::from_str(r#"["10:00:00","09:00:00"]"#);
        assert!(result.is_err());
    }
}
