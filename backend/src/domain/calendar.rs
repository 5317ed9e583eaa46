//! Calendar helpers for the expense tracker.
//!
//! Date bucketing and range checks operate on plain calendar dates
//! (`NaiveDate`), so range bounds are inclusive by construction and there is
//! no time-of-day edge to get wrong.

use chrono::{Datelike, NaiveDate};

/// First and last day of `today`'s calendar month, both inclusive.
pub fn month_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today.with_day(1).unwrap_or(today);
    let (next_year, next_month) = if today.month() == 12 {
        (today.year() + 1, 1)
    } else {
        (today.year(), today.month() + 1)
    };
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .unwrap_or(today);
    (start, end)
}

/// Whether `date` falls within `today`'s calendar month.
pub fn is_in_month(date: NaiveDate, today: NaiveDate) -> bool {
    let (start, end) = month_bounds(today);
    is_in_range(date, Some(start), Some(end))
}

/// Whether `date` falls within the given bounds. Bounds are inclusive;
/// a missing bound leaves that side unrestricted.
pub fn is_in_range(date: NaiveDate, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    match (from, to) {
        (None, None) => true,
        (Some(from), None) => date >= from,
        (None, Some(to)) => date <= to,
        (Some(from), Some(to)) => date >= from && date <= to,
    }
}

/// Human-readable short date, e.g. `Jan 05, 2024`. Used for display and in
/// CSV exports.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_bounds_handles_leap_february() {
        let (start, end) = month_bounds(date(2024, 2, 20));
        assert_eq!(start, date(2024, 2, 1));
        assert_eq!(end, date(2024, 2, 29));
    }

    #[test]
    fn month_bounds_wraps_december() {
        let (start, end) = month_bounds(date(2024, 12, 3));
        assert_eq!(start, date(2024, 12, 1));
        assert_eq!(end, date(2024, 12, 31));
    }

    #[test]
    fn is_in_month_ignores_other_months() {
        let today = date(2024, 2, 20);
        assert!(is_in_month(date(2024, 2, 1), today));
        assert!(is_in_month(date(2024, 2, 29), today));
        assert!(!is_in_month(date(2024, 1, 31), today));
        assert!(!is_in_month(date(2024, 3, 1), today));
        assert!(!is_in_month(date(2023, 2, 20), today));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let from = Some(date(2024, 1, 10));
        let to = Some(date(2024, 1, 20));
        assert!(is_in_range(date(2024, 1, 10), from, to));
        assert!(is_in_range(date(2024, 1, 20), from, to));
        assert!(!is_in_range(date(2024, 1, 9), from, to));
        assert!(!is_in_range(date(2024, 1, 21), from, to));
    }

    #[test]
    fn one_sided_ranges_leave_the_other_side_open() {
        let day = date(2024, 1, 15);
        assert!(is_in_range(day, Some(date(2024, 1, 15)), None));
        assert!(is_in_range(day, None, Some(date(2024, 1, 15))));
        assert!(!is_in_range(day, Some(date(2024, 1, 16)), None));
        assert!(!is_in_range(day, None, Some(date(2024, 1, 14))));
        assert!(is_in_range(day, None, None));
    }

    #[test]
    fn short_date_format() {
        assert_eq!(format_short_date(date(2024, 1, 5)), "Jan 05, 2024");
        assert_eq!(format_short_date(date(2023, 12, 25)), "Dec 25, 2023");
    }
}
