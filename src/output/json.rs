use serde_json::Value;

use crate::cli::SortOrder;
use crate::core::Summary;
use crate::error::AppError;
use crate::output::format::{ordered_rows, round_hours};

/// Whole hours as an integer so they print as `12`, not `12.0`
fn hours_value(hours: f64) -> Value {
    let rounded = round_hours(hours);
    if rounded.fract() == 0.0 && rounded.abs() < i64::MAX as f64 {
        Value::from(rounded as i64)
    } else {
        Value::from(rounded)
    }
}

/// Pretty array of `{"<label>": key, "hours": h}` objects
pub(crate) fn output_summary_json(summary: &Summary, order: SortOrder) -> Result<String, AppError> {
    let period = summary.period;
    let rows: Vec<Value> = ordered_rows(summary, order)
        .into_iter()
        .map(|(start, hours)| {
            let mut row = serde_json::Map::new();
            row.insert(period.label().to_string(), period.key(start).into());
            row.insert("hours".to_string(), hours_value(hours));
            Value::Object(row)
        })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Period;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn weekly_json_rows() {
        let summary = Summary {
            period: Period::Week,
            buckets: BTreeMap::from([(d(2022, 6, 20), 0.0), (d(2022, 6, 27), 14.0 + 1.0 / 3.0)]),
        };
        let json = output_summary_json(&summary, SortOrder::Asc).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"week": "2022-25", "hours": 0},
                {"week": "2022-26", "hours": 14.333333},
            ])
        );
    }

    #[test]
    fn whole_hours_print_without_fraction() {
        let summary = Summary {
            period: Period::Day,
            buckets: BTreeMap::from([
                (d(2022, 6, 27), 1.5),
                (d(2022, 6, 28), 0.0),
                (d(2022, 6, 29), 5.0 / 6.0),
                (d(2022, 7, 3), 12.0),
            ]),
        };
        let json = output_summary_json(&summary, SortOrder::Asc).unwrap();
        assert!(json.contains("\"hours\": 1.5\n"), "{json}");
        assert!(json.contains("\"hours\": 0\n"), "{json}");
        assert!(json.contains("\"hours\": 0.833333\n"), "{json}");
        assert!(json.contains("\"hours\": 12\n"), "{json}");
        assert!(!json.contains(".0\n"), "{json}");
    }

    #[test]
    fn hours_value_keeps_fractions() {
        assert_eq!(hours_value(12.0).to_string(), "12");
        assert_eq!(hours_value(2.25).to_string(), "2.25");
        assert_eq!(hours_value(1.0 / 3.0).to_string(), "0.333333");
    }

    #[test]
    fn desc_order_and_empty() {
        let summary = Summary {
            period: Period::Day,
            buckets: BTreeMap::from([(d(2022, 6, 1), 1.0), (d(2022, 6, 2), 2.0)]),
        };
        let json = output_summary_json(&summary, SortOrder::Desc).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["date"], "2022-06-02");

        let empty = Summary {
            period: Period::Year,
            buckets: BTreeMap::new(),
        };
        assert_eq!(output_summary_json(&empty, SortOrder::Asc).unwrap(), "[]");
    }
}
