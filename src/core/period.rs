//! Calendar buckets used for summaries
//!
//! Every bucket is identified by its first day: the date itself, the Monday
//! of its week, the first of its month, or January 1st of its year.

use chrono::{Datelike, Days, Months, NaiveDate};
use clap::ValueEnum;
use serde::Deserialize;

use crate::consts::DATE_FORMAT;

const DAYS_IN_WEEK: u64 = 7;
const MONTHS_IN_YEAR: u32 = 12;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Period {
    /// One bucket per calendar day (default)
    #[default]
    Day,
    /// Weeks starting on Monday
    Week,
    Month,
    Year,
}

impl Period {
    /// First day of the bucket containing `date`
    pub(crate) fn floor(self, date: NaiveDate) -> NaiveDate {
        match self {
            Period::Day => date,
            Period::Week => {
                let weekday = date.weekday().num_days_from_monday();
                date.checked_sub_days(Days::new(u64::from(weekday)))
                    .unwrap_or(date)
            }
            Period::Month => date.with_day(1).unwrap_or(date),
            Period::Year => date.with_ordinal(1).unwrap_or(date),
        }
    }

    /// First day of the bucket after the one containing `date`
    pub(crate) fn next(self, date: NaiveDate) -> Option<NaiveDate> {
        let start = self.floor(date);
        match self {
            Period::Day => start.succ_opt(),
            Period::Week => start.checked_add_days(Days::new(DAYS_IN_WEEK)),
            Period::Month => start.checked_add_months(Months::new(1)),
            Period::Year => start.checked_add_months(Months::new(MONTHS_IN_YEAR)),
        }
    }

    /// First day of the bucket before the one containing `date`
    pub(crate) fn previous(self, date: NaiveDate) -> Option<NaiveDate> {
        let start = self.floor(date);
        match self {
            Period::Day => start.pred_opt(),
            Period::Week => start.checked_sub_days(Days::new(DAYS_IN_WEEK)),
            Period::Month => start.checked_sub_months(Months::new(1)),
            Period::Year => start.checked_sub_months(Months::new(MONTHS_IN_YEAR)),
        }
    }

    /// Column name for the bucket key
    pub(crate) fn label(self) -> &'static str {
        match self {
            Period::Day => "date",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }

    /// Display key for a bucket; week 00 holds January days before the first Monday
    pub(crate) fn key(self, start: NaiveDate) -> String {
        match self {
            Period::Day => start.format(DATE_FORMAT).to_string(),
            Period::Week => format!("{}-{:02}", start.year(), monday_week_number(start)),
            Period::Month => start.format("%Y-%m").to_string(),
            Period::Year => start.year().to_string(),
        }
    }

    /// Names of the breakdown columns written next to the key in CSV output
    pub(crate) fn component_names(self) -> &'static [&'static str] {
        match self {
            Period::Day => &["year", "month", "day"],
            Period::Week => &["year", "week"],
            Period::Month => &["year", "month"],
            Period::Year => &[],
        }
    }

    /// Breakdown values matching `component_names`, without leading zeros
    pub(crate) fn components(self, start: NaiveDate) -> Vec<String> {
        match self {
            Period::Day => vec![
                start.year().to_string(),
                start.month().to_string(),
                start.day().to_string(),
            ],
            Period::Week => vec![
                start.year().to_string(),
                monday_week_number(start).to_string(),
            ],
            Period::Month => vec![start.year().to_string(), start.month().to_string()],
            Period::Year => Vec::new(),
        }
    }
}

/// Week of the year counting from the first Monday, as strftime's `%W`
fn monday_week_number(date: NaiveDate) -> u32 {
    (date.ordinal0() + 7 - date.weekday().num_days_from_monday()) / 7
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn floor_week_returns_monday() {
        // 2025-01-08 is a Wednesday
        assert_eq!(Period::Week.floor(d(2025, 1, 8)), d(2025, 1, 6));
        // already Monday
        assert_eq!(Period::Week.floor(d(2025, 1, 6)), d(2025, 1, 6));
        // Sunday belongs to the week that started the Monday before
        assert_eq!(Period::Week.floor(d(2025, 1, 12)), d(2025, 1, 6));
    }

    #[test]
    fn floor_week_cross_year_boundary() {
        // 2025-01-01 is Wednesday, Monday is 2024-12-30
        assert_eq!(Period::Week.floor(d(2025, 1, 1)), d(2024, 12, 30));
    }

    #[test]
    fn floor_month_and_year() {
        assert_eq!(Period::Month.floor(d(2020, 2, 29)), d(2020, 2, 1));
        assert_eq!(Period::Year.floor(d(2020, 12, 31)), d(2020, 1, 1));
        assert_eq!(Period::Day.floor(d(2020, 12, 31)), d(2020, 12, 31));
    }

    #[test]
    fn next_day() {
        assert_eq!(Period::Day.next(d(2022, 6, 19)), Some(d(2022, 6, 20)));
        assert_eq!(Period::Day.next(d(2022, 12, 31)), Some(d(2023, 1, 1)));
    }

    #[test]
    fn next_week_from_every_weekday() {
        let monday = d(2022, 6, 27);
        for offset in 0..7 {
            let date = monday + Days::new(offset);
            assert_eq!(Period::Week.next(date), Some(d(2022, 7, 4)));
        }
    }

    #[test]
    fn next_month_from_every_day_of_february() {
        let mut date = d(2020, 2, 1);
        while date < d(2020, 3, 1) {
            assert_eq!(Period::Month.next(date), Some(d(2020, 3, 1)));
            date = date.succ_opt().unwrap();
        }
        assert_eq!(Period::Month.next(d(2020, 12, 15)), Some(d(2021, 1, 1)));
    }

    #[test]
    fn next_year_from_any_day() {
        assert_eq!(Period::Year.next(d(2020, 1, 1)), Some(d(2021, 1, 1)));
        assert_eq!(Period::Year.next(d(2020, 12, 31)), Some(d(2021, 1, 1)));
    }

    #[test]
    fn next_at_end_of_calendar_is_none() {
        assert_eq!(Period::Day.next(NaiveDate::MAX), None);
    }

    #[test]
    fn previous_buckets() {
        assert_eq!(Period::Day.previous(d(2022, 3, 1)), Some(d(2022, 2, 28)));
        assert_eq!(Period::Week.previous(d(2022, 6, 29)), Some(d(2022, 6, 20)));
        assert_eq!(Period::Month.previous(d(2022, 1, 20)), Some(d(2021, 12, 1)));
        assert_eq!(Period::Year.previous(d(2022, 7, 4)), Some(d(2021, 1, 1)));
    }

    #[test]
    fn keys_per_period() {
        assert_eq!(Period::Day.key(d(2022, 6, 27)), "2022-06-27");
        assert_eq!(Period::Week.key(d(2022, 6, 27)), "2022-26");
        assert_eq!(Period::Month.key(d(2022, 6, 1)), "2022-06");
        assert_eq!(Period::Year.key(d(2022, 1, 1)), "2022");
    }

    #[test]
    fn week_number_matches_strftime() {
        let mut date = d(2021, 12, 20);
        while date < d(2023, 1, 20) {
            assert_eq!(
                monday_week_number(date),
                date.format("%W").to_string().parse::<u32>().unwrap(),
                "{date}"
            );
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn week_zero_before_first_monday() {
        // 2022-01-01 is a Saturday; its week starts on Monday 2021-12-27
        let start = Period::Week.floor(d(2022, 1, 1));
        assert_eq!(start, d(2021, 12, 27));
        assert_eq!(monday_week_number(d(2022, 1, 1)), 0);
    }

    #[test]
    fn components_strip_leading_zeros() {
        assert_eq!(Period::Day.components(d(2022, 6, 5)), ["2022", "6", "5"]);
        assert_eq!(Period::Week.components(d(2022, 1, 3)), ["2022", "1"]);
        assert_eq!(Period::Month.components(d(2022, 6, 1)), ["2022", "6"]);
        assert!(Period::Year.components(d(2022, 1, 1)).is_empty());
    }

    #[test]
    fn component_names_match_components() {
        let date = d(2022, 6, 27);
        for period in [Period::Day, Period::Week, Period::Month, Period::Year] {
            assert_eq!(
                period.component_names().len(),
                period.components(period.floor(date)).len()
            );
        }
    }
}
