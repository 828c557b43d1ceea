use chrono::prelude::*;
use chrono::Days;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ScheduleError, ScheduleResult};
use crate::scheduling::calendars::days_in_month;
use crate::scheduling::TimeOfDayOffset;

/// Create an [Instant] at midnight.
///
/// Panics if date values are invalid.
pub fn ndt(year: i32, month: u32, day: u32) -> Instant {
    ndt_hm(year, month, day, 0, 0)
}

/// Create an [Instant] at a given hour and minute.
///
/// Panics if date or time values are invalid.
pub fn ndt_hm(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Instant {
    Instant(
        NaiveDate::from_ymd_opt(year, month, day)
            .expect("`year`, `month` `day` are invalid.")
            .and_hms_opt(hour, minute, 0)
            .expect("`hour`, `minute` are invalid."),
    )
}

/// An absolute point in time, expressed in a single reference time zone.
///
/// All calculations in this crate assume inputs are already normalized to one zone, so the
/// wrapped value is a naive date-time and ordering is plain chronological ordering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instant(NaiveDateTime);

impl Instant {
    /// Wrap a `NaiveDateTime`.
    pub fn new(datetime: NaiveDateTime) -> Self {
        Instant(datetime)
    }

    /// Create an [Instant] from calendar and clock components.
    pub fn try_from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> ScheduleResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, minute, second))
            .map(Instant)
            .ok_or_else(|| ScheduleError::invalid("`year`, `month`, `day` or time are invalid."))
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Whole minutes elapsed since the start of the day. Seconds are truncated.
    pub fn time_of_day(&self) -> TimeOfDayOffset {
        let t = self.0.time();
        TimeOfDayOffset::from_minutes_unchecked(t.hour() * 60 + t.minute())
    }

    pub fn earlier_than(&self, other: &Instant) -> bool {
        self.0 < other.0
    }

    pub fn later_than(&self, other: &Instant) -> bool {
        self.0 > other.0
    }

    pub fn equal_to(&self, other: &Instant) -> bool {
        self.0 == other.0
    }

    pub fn no_earlier_than(&self, other: &Instant) -> bool {
        !self.earlier_than(other)
    }

    pub fn no_later_than(&self, other: &Instant) -> bool {
        !self.later_than(other)
    }

    /// Return the midnight starting the calendar day of `self`.
    pub fn current_day_at_midnight(&self) -> Instant {
        Instant(self.0.date().and_time(NaiveTime::MIN))
    }

    /// Return the midnight starting the calendar day after `self`.
    pub fn next_day_at_midnight(&self) -> ScheduleResult<Instant> {
        self.date_at_midnight_by_adding_day_interval(1)
    }

    /// Return the midnight `days` calendar days after the day of `self`.
    ///
    /// `days` must be non-negative; use [Instant::add_day_interval] to move backwards.
    pub fn date_at_midnight_by_adding_day_interval(&self, days: i64) -> ScheduleResult<Instant> {
        let days = u64::try_from(days)
            .map_err(|_| ScheduleError::invalid("`days` must be non-negative."))?;
        self.current_day_at_midnight()
            .0
            .checked_add_days(Days::new(days))
            .map(Instant)
            .ok_or_else(|| ScheduleError::out_of_range("date exceeds the supported calendar."))
    }

    /// Whether `self` and `other` share a calendar day.
    pub fn on_same_day(&self, other: &Instant) -> bool {
        self.current_day_at_midnight() == other.current_day_at_midnight()
    }

    /// Return midnight of the first day of the calendar month containing `self`.
    pub fn first_day_in_current_month(&self) -> Instant {
        let date = self.0.date();
        Instant((date - Days::new(u64::from(date.day0()))).and_time(NaiveTime::MIN))
    }

    /// Number of calendar days in the month containing `self`, accounting for leap years.
    pub fn num_of_days_in_current_month(&self) -> u32 {
        days_in_month(self.0.year(), self.0.month())
    }
}

impl From<NaiveDateTime> for Instant {
    fn from(item: NaiveDateTime) -> Self {
        Instant(item)
    }
}

impl From<Instant> for NaiveDateTime {
    fn from(item: Instant) -> Self {
        item.0
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}
