//! Day detection for attendance dates.
//!
//! Weekdays are indexed Sunday-first (Sunday = 0 .. Saturday = 6). Friday,
//! index 5, is the weekly rest day.

use chrono::{Datelike, NaiveDate, Weekday};

/// Localized weekday names, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "الأحد",
    "الاثنين",
    "الثلاثاء",
    "الأربعاء",
    "الخميس",
    "الجمعة",
    "السبت",
];

/// Sunday-first index of the weekly rest day.
pub const REST_DAY_INDEX: usize = 5;

/// Returns the Sunday-first weekday index of `date`.
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

/// Returns the weekday for a Sunday-first index, or `None` past Saturday.
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Returns the localized weekday name of `date`.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::day_name;
/// use chrono::NaiveDate;
///
/// // 2025-03-07 is a Friday
/// let friday = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
/// assert_eq!(day_name(friday), "الجمعة");
/// ```
pub fn day_name(date: NaiveDate) -> &'static str {
    WEEKDAY_NAMES[weekday_index(date)]
}

/// Returns true if `date` falls on the weekly rest day.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::is_rest_day;
/// use chrono::NaiveDate;
///
/// assert!(is_rest_day(NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()));
/// assert!(!is_rest_day(NaiveDate::from_ymd_opt(2025, 3, 8).unwrap()));
/// ```
pub fn is_rest_day(date: NaiveDate) -> bool {
    weekday_index(date) == REST_DAY_INDEX
}
