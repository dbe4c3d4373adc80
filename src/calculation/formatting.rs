//! Display formatting for times and durations.
//!
//! These conversions are for presentation only and play no part in the
//! hours calculation.

use chrono::Datelike;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::{ABSENT_MARKER, MonthKey};

/// Localized marker for times before noon.
pub const AM_MARKER: &str = "ص";

/// Localized marker for times from noon onwards.
pub const PM_MARKER: &str = "م";

/// Localized month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

/// Converts a 24-hour `HH:mm` time to the 12-hour clock with a localized
/// AM/PM marker.
///
/// Blank input and the absence marker render as `-`. Input that is not
/// `hours:minutes` with numeric hours is returned unchanged.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::format_to_12_hour;
///
/// assert_eq!(format_to_12_hour("00:15"), "12:15 ص");
/// assert_eq!(format_to_12_hour("13:05"), "1:05 م");
/// assert_eq!(format_to_12_hour("-"), "-");
/// ```
pub fn format_to_12_hour(time24: &str) -> String {
    if time24.is_empty() || time24 == ABSENT_MARKER {
        return ABSENT_MARKER.to_string();
    }

    let mut parts = time24.split(':');
    let (Some(hours), Some(minutes)) = (parts.next(), parts.next()) else {
        return time24.to_string();
    };
    let Ok(hours) = hours.trim().parse::<u32>() else {
        return time24.to_string();
    };

    let marker = if hours >= 12 { PM_MARKER } else { AM_MARKER };
    let hours = match hours % 12 {
        0 => 12,
        h => h,
    };

    format!("{}:{} {}", hours, minutes, marker)
}

/// Formats decimal hours as an `H:MM` duration.
///
/// Minutes are rounded to the nearest whole minute; a remainder that rounds
/// up to 60 rolls into the next hour.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::format_duration;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_duration(Decimal::from_str("8.5").unwrap()), "8:30");
/// assert_eq!(format_duration(Decimal::from_str("2.999").unwrap()), "3:00");
/// assert_eq!(format_duration(Decimal::ZERO), "0:00");
/// ```
pub fn format_duration(hours_decimal: Decimal) -> String {
    if hours_decimal.is_zero() {
        return "0:00".to_string();
    }

    let whole = hours_decimal.floor();
    let minutes = ((hours_decimal - whole) * Decimal::from(60))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0);
    let whole = whole.to_i64().unwrap_or(0);

    if minutes == 60 {
        return format!("{}:00", whole + 1);
    }

    format!("{}:{:02}", whole, minutes)
}

/// Parses an `H:MM` duration back into decimal hours.
///
/// This is the inverse of [`format_duration`] for durations that are a
/// whole number of minutes.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTime`] unless the input is a whole number
/// of hours, a colon, and two minute digits below 60.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{format_duration, parse_duration};
///
/// let hours = parse_duration("10:45").unwrap();
/// assert_eq!(hours.to_string(), "10.75");
/// assert_eq!(format_duration(hours), "10:45");
/// ```
pub fn parse_duration(value: &str) -> EngineResult<Decimal> {
    let invalid = || EngineError::InvalidTime {
        value: value.to_string(),
    };

    let (hours, minutes) = value.trim().split_once(':').ok_or_else(invalid)?;
    if minutes.len() != 2 {
        return Err(invalid());
    }

    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    if minutes >= 60 {
        return Err(invalid());
    }

    Ok(Decimal::from(hours) + Decimal::from(minutes) / Decimal::from(60))
}

/// Returns the localized name of a month.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::month_name;
/// use attendance_engine::models::MonthKey;
///
/// let month: MonthKey = "2025-03".parse().unwrap();
/// assert_eq!(month_name(month), "مارس");
/// ```
pub fn month_name(month: MonthKey) -> &'static str {
    MONTH_NAMES[(month.month() - 1) as usize]
}

/// Returns the localized month name of a date.
pub fn month_name_of(date: chrono::NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}
