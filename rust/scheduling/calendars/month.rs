use chrono::prelude::*;

use crate::error::{ScheduleError, ScheduleResult};

/// Return the number of days in a given month and year.
///
/// Returns zero for a `month` outside [1, 12].
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let mut day = 31;
    while day > 0 && NaiveDate::from_ymd_opt(year, month, day).is_none() {
        day -= 1;
    }
    day
}

/// Test whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Return the date in a given month and year with the given day-of-month, clamped to the
/// last day of that month when the month is shorter.
pub fn get_day_clamped(year: i32, month: u32, day: u32) -> ScheduleResult<NaiveDate> {
    if day == 0 {
        return Err(ScheduleError::invalid("`day` must be in [1, 31]."));
    }
    let last = days_in_month(year, month);
    NaiveDate::from_ymd_opt(year, month, day.min(last))
        .ok_or_else(|| ScheduleError::invalid("`year` and `month` do not define a valid month."))
}
