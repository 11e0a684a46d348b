//! Query types shared by the summary commands

use chrono::NaiveDate;

use super::period::Period;

/// Inclusive date range; a missing bound is open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct DateFilter {
    pub(crate) since: Option<NaiveDate>,
    pub(crate) until: Option<NaiveDate>,
}

impl DateFilter {
    pub(crate) fn new(since: Option<NaiveDate>, until: Option<NaiveDate>) -> Self {
        Self { since, until }
    }

    /// Every day of the bucket containing `date`
    pub(crate) fn for_bucket(period: Period, date: NaiveDate) -> Self {
        let since = period.floor(date);
        let until = period.next(date).and_then(|next| next.pred_opt());
        Self::new(Some(since), until)
    }

    pub(crate) fn contains(&self, date: NaiveDate) -> bool {
        if let Some(s) = self.since
            && date < s
        {
            return false;
        }
        if let Some(u) = self.until
            && date > u
        {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn date_filter_no_bounds() {
        let f = DateFilter::new(None, None);
        assert!(f.contains(d(2020, 1, 1)));
        assert!(f.contains(d(2099, 12, 31)));
    }

    #[test]
    fn date_filter_since_only() {
        let f = DateFilter::new(Some(d(2025, 6, 1)), None);
        assert!(!f.contains(d(2025, 5, 31)));
        assert!(f.contains(d(2025, 6, 1))); // inclusive
        assert!(f.contains(d(2025, 6, 2)));
    }

    #[test]
    fn date_filter_until_only() {
        let f = DateFilter::new(None, Some(d(2025, 6, 30)));
        assert!(f.contains(d(2025, 6, 29)));
        assert!(f.contains(d(2025, 6, 30))); // inclusive
        assert!(!f.contains(d(2025, 7, 1)));
    }

    #[test]
    fn date_filter_single_day_range() {
        let f = DateFilter::new(Some(d(2025, 1, 15)), Some(d(2025, 1, 15)));
        assert!(!f.contains(d(2025, 1, 14)));
        assert!(f.contains(d(2025, 1, 15)));
        assert!(!f.contains(d(2025, 1, 16)));
    }

    #[test]
    fn bucket_filter_covers_whole_week() {
        // Thursday 2022-06-30 sits in the week of Monday 2022-06-27
        let f = DateFilter::for_bucket(Period::Week, d(2022, 6, 30));
        assert_eq!(f, DateFilter::new(Some(d(2022, 6, 27)), Some(d(2022, 7, 3))));
    }

    #[test]
    fn bucket_filter_month_and_year() {
        let f = DateFilter::for_bucket(Period::Month, d(2020, 2, 10));
        assert_eq!(f, DateFilter::new(Some(d(2020, 2, 1)), Some(d(2020, 2, 29))));

        let f = DateFilter::for_bucket(Period::Year, d(2021, 7, 4));
        assert_eq!(f, DateFilter::new(Some(d(2021, 1, 1)), Some(d(2021, 12, 31))));
    }

    #[test]
    fn bucket_filter_day_is_single_day() {
        let f = DateFilter::for_bucket(Period::Day, d(2022, 6, 19));
        assert!(f.contains(d(2022, 6, 19)));
        assert!(!f.contains(d(2022, 6, 20)));
        assert!(!f.contains(d(2022, 6, 18)));
    }
}
