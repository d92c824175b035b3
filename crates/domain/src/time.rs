//! Calendar date helpers.

use chrono::{Datelike, Local, NaiveDate};

/// Calendar date without time zone, serialized as `YYYY-MM-DD`.
pub type Date = NaiveDate;

/// Return today's date on the host's local calendar.
#[must_use]
pub fn today() -> Date {
    Local::now().date_naive()
}

/// Whole calendar months from `start` to `end`.
///
/// A month only counts once the day-of-month of `start` has been reached in
/// `end`. The result is negative when `end` precedes `start` and is truncated
/// toward zero in that case.
#[must_use]
pub fn whole_months_between(start: Date, end: Date) -> i64 {
    let packed = |date: Date| {
        let proleptic_month = i64::from(date.year()) * 12 + i64::from(date.month0());
        proleptic_month * 32 + i64::from(date.day())
    };
    (packed(end) - packed(start)) / 32
}

/// Whole completed years from `start` to `end`, leap-year aware.
#[must_use]
pub fn whole_years_between(start: Date, end: Date) -> i64 {
    whole_months_between(start, end) / 12
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn should_not_count_month_before_day_threshold() {
        assert_eq!(whole_months_between(date(2023, 1, 31), date(2023, 2, 28)), 0);
        assert_eq!(whole_months_between(date(2023, 1, 15), date(2023, 2, 15)), 1);
    }

    #[test]
    fn should_count_leap_day_birthdays_only_once_reached() {
        assert_eq!(whole_years_between(date(2000, 2, 29), date(2001, 2, 28)), 0);
        assert_eq!(whole_years_between(date(2000, 2, 29), date(2001, 3, 1)), 1);
        assert_eq!(whole_years_between(date(2000, 2, 29), date(2004, 2, 29)), 4);
    }

    #[test]
    fn should_truncate_toward_zero_when_end_precedes_start() {
        assert_eq!(whole_months_between(date(2023, 3, 10), date(2023, 1, 20)), -1);
        assert_eq!(whole_years_between(date(2024, 6, 1), date(2023, 7, 1)), 0);
    }

    #[test]
    fn should_return_zero_for_same_day() {
        let d = date(2020, 5, 10);
        assert_eq!(whole_months_between(d, d), 0);
        assert_eq!(whole_years_between(d, d), 0);
    }
}
