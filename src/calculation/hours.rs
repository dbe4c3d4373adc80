//! Regular/overtime hours calculation.
//!
//! This module converts a checkin and checkout time into regular, overtime
//! and total hours using the configured end-of-workday boundary and daily
//! regular-hours cap.

use chrono::{NaiveTime, Timelike};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::config::WorkdayRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{ABSENT_MARKER, HoursResult};

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Parses an `HH:mm` string into minutes since midnight.
///
/// Parsing is lenient: empty input, the `-` absence marker and anything that
/// does not start with two numeric `:`-separated fields count as midnight.
/// A blank field inside the pair reads as zero, so `"09:"` is 09:00.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::parse_time_minutes;
///
/// assert_eq!(parse_time_minutes("09:30"), 570);
/// assert_eq!(parse_time_minutes("-"), 0);
/// assert_eq!(parse_time_minutes("soon"), 0);
/// ```
pub fn parse_time_minutes(value: &str) -> u32 {
    let value = value.trim();
    if value.is_empty() || value == ABSENT_MARKER {
        return 0;
    }

    let mut parts = value.split(':');
    let hours = parts.next().and_then(parse_field);
    let minutes = parts.next().and_then(parse_field);

    match (hours, minutes) {
        (Some(h), Some(m)) => h.checked_mul(60).and_then(|v| v.checked_add(m)).unwrap_or(0),
        _ => 0,
    }
}

fn parse_field(field: &str) -> Option<u32> {
    match field.trim() {
        "" => Some(0),
        digits => digits.parse().ok(),
    }
}

/// Rounds an hour quantity to two decimal places.
pub fn round_hours(hours: Decimal) -> Decimal {
    hours.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Splits a worked interval, given in minutes since midnight, into regular
/// and overtime hours.
///
/// - Checkout at or before the boundary: everything worked is regular.
/// - Checkout after the boundary: regular time runs from checkin to the
///   boundary, limited to the cap and floored at zero; every minute past the
///   boundary is overtime, uncapped.
/// - Regular hours are then clamped to the cap in both cases.
///
/// Regular and overtime are rounded to two decimals and the total is the sum
/// of the rounded parts, so `total == regular + overtime` always holds.
///
/// # Errors
///
/// Returns [`EngineError::CheckoutBeforeCheckin`] when `checkout <= checkin`.
/// Overnight shifts are not supported.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::split_minutes;
/// use attendance_engine::config::WorkdayRules;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rules = WorkdayRules::default();
/// let result = split_minutes(9 * 60, 19 * 60 + 30, &rules).unwrap();
///
/// assert_eq!(result.regular_hours, Decimal::from_str("8").unwrap());
/// assert_eq!(result.overtime_hours, Decimal::from_str("2.5").unwrap());
/// assert_eq!(result.total_hours, Decimal::from_str("10.5").unwrap());
/// ```
pub fn split_minutes(checkin: u32, checkout: u32, rules: &WorkdayRules) -> EngineResult<HoursResult> {
    if checkout <= checkin {
        return Err(EngineError::CheckoutBeforeCheckin);
    }

    let boundary = rules.end_of_work_day_minutes();
    let cap = rules.regular_hours_cap;

    let (regular, overtime) = if checkout <= boundary {
        (Decimal::from(checkout - checkin) / MINUTES_PER_HOUR, Decimal::ZERO)
    } else {
        let until_boundary = Decimal::from(i64::from(boundary) - i64::from(checkin));
        let regular_minutes = until_boundary.min(cap * MINUTES_PER_HOUR).max(Decimal::ZERO);
        (
            regular_minutes / MINUTES_PER_HOUR,
            Decimal::from(checkout - boundary) / MINUTES_PER_HOUR,
        )
    };

    let regular_hours = round_hours(regular.min(cap));
    let overtime_hours = round_hours(overtime);
    let total_hours = round_hours(regular_hours + overtime_hours);

    Ok(HoursResult {
        total_hours,
        regular_hours,
        overtime_hours,
        error: None,
    })
}

/// Splits the interval between two wall-clock times.
///
/// Seconds are ignored; see [`split_minutes`] for the rules.
pub fn split_times(
    checkin: NaiveTime,
    checkout: NaiveTime,
    rules: &WorkdayRules,
) -> EngineResult<HoursResult> {
    split_minutes(minutes_of(checkin), minutes_of(checkout), rules)
}

fn minutes_of(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Calculates hours from two `HH:mm` strings.
///
/// Rejected inputs do not fail: the returned [`HoursResult`] carries the
/// user-facing message in `error` and zero for every hour bucket.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::calculate_hours;
/// use attendance_engine::config::WorkdayRules;
/// use rust_decimal::Decimal;
///
/// let rules = WorkdayRules::default();
///
/// let ok = calculate_hours("09:00", "17:00", &rules);
/// assert!(ok.is_valid());
/// assert_eq!(ok.total_hours, Decimal::from(8));
///
/// let rejected = calculate_hours("14:00", "13:00", &rules);
/// assert_eq!(rejected.error.as_deref(), Some("checkout must be after checkin"));
/// assert!(rejected.total_hours.is_zero());
/// ```
pub fn calculate_hours(checkin: &str, checkout: &str, rules: &WorkdayRules) -> HoursResult {
    let checkin_minutes = parse_time_minutes(checkin);
    let checkout_minutes = parse_time_minutes(checkout);

    match split_minutes(checkin_minutes, checkout_minutes, rules) {
        Ok(result) => {
            debug!(
                checkin,
                checkout,
                regular = %result.regular_hours,
                overtime = %result.overtime_hours,
                "Calculated hours"
            );
            result
        }
        Err(err) => {
            debug!(checkin, checkout, error = %err, "Rejected hours calculation");
            HoursResult::rejected(err.to_string())
        }
    }
}
