use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::config;

/// Shifts `instant` into `zone`, or the browser's local zone when none is configured.
pub fn to_zone(instant: DateTime<Utc>, zone: Option<Tz>) -> DateTime<FixedOffset> {
    match zone {
        Some(tz) => instant.with_timezone(&tz).fixed_offset(),
        None => instant.with_timezone(&Local).fixed_offset(),
    }
}

pub fn to_app_tz(instant: DateTime<Utc>) -> DateTime<FixedOffset> {
    to_zone(instant, config::current_time_zone())
}

pub fn now_in_app_tz() -> DateTime<FixedOffset> {
    to_app_tz(Utc::now())
}

pub fn today_in_app_tz() -> NaiveDate {
    now_in_app_tz().date_naive()
}

pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    use chrono::Datelike;
    a.year() == b.year() && a.month() == b.month()
}

/// Parses the `YYYY-MM-DD` value of a date input. Blank or malformed input yields `None`.
pub fn parse_input_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn same_month_compares_year_and_month() {
        let jan = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert!(same_month(jan, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
        assert!(!same_month(jan, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
        assert!(!same_month(jan, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()));
    }

    #[test]
    fn zone_shift_can_cross_midnight() {
        let instant = Utc.with_ymd_and_hms(2025, 1, 9, 18, 30, 0).unwrap();
        let kolkata = to_zone(instant, Some(chrono_tz::Asia::Kolkata));
        assert_eq!(kolkata.date_naive(), NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
        let utc = to_zone(instant, Some(chrono_tz::UTC));
        assert_eq!(utc.date_naive(), NaiveDate::from_ymd_opt(2025, 1, 9).unwrap());
    }

    #[test]
    fn input_dates_parse_iso_only() {
        assert_eq!(parse_input_date(" 2025-02-03 "), NaiveDate::from_ymd_opt(2025, 2, 3));
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("03/02/2025"), None);
    }
}
