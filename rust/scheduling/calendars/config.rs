use chrono::Weekday;
use indexmap::set::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};
use crate::scheduling::{CycleBoundary, WeekendRoll};

#[cfg(feature = "python")]
use pyo3::pyclass;

/// The calendar conventions used by every week- and weekend-sensitive calculation.
///
/// A calendar is formed of 2 components:
///
/// - `week_start`: the first day of a calendar week, which anchors weekly cycles. Defaults to
///   Monday.
/// - `weekend`: the days of the week on which daily prompts may be skipped. Defaults to
///   Saturday and Sunday.
///
/// The weekend may not contain all seven days, so rolling forward to a weekday always
/// terminates.
#[cfg_attr(feature = "python", pyclass(module = "esmlib.rs", eq))]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCalendarConfig", into = "RawCalendarConfig")]
pub struct CalendarConfig {
    pub(crate) week_start: Weekday,
    pub(crate) weekend: IndexSet<Weekday>,
}

/// Unvalidated serde representation of [CalendarConfig].
#[derive(Clone, Serialize, Deserialize)]
struct RawCalendarConfig {
    week_start: Weekday,
    weekend: IndexSet<Weekday>,
}

impl CalendarConfig {
    /// Create a calendar configuration.
    ///
    /// `weekend` is a vector of days (0=Mon,.., 6=Sun) that are excluded from daily prompting.
    pub fn try_new(week_start: u8, weekend: Vec<u8>) -> ScheduleResult<Self> {
        let to_weekday = |v: u8| {
            Weekday::try_from(v).map_err(|_| ScheduleError::invalid("weekday must be in [0, 6]."))
        };
        let week_start = to_weekday(week_start)?;
        let weekend = weekend
            .into_iter()
            .map(to_weekday)
            .collect::<ScheduleResult<IndexSet<Weekday>>>()?;
        Self::try_from_weekdays(week_start, weekend)
    }

    /// Create a calendar configuration from `chrono` weekdays.
    pub fn try_from_weekdays(
        week_start: Weekday,
        weekend: IndexSet<Weekday>,
    ) -> ScheduleResult<Self> {
        if weekend.len() >= 7 {
            return Err(ScheduleError::invalid(
                "`weekend` cannot contain every day of the week.",
            ));
        }
        Ok(CalendarConfig {
            week_start,
            weekend,
        })
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn weekend(&self) -> &IndexSet<Weekday> {
        &self.weekend
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            week_start: Weekday::Mon,
            weekend: IndexSet::from_iter([Weekday::Sat, Weekday::Sun]),
        }
    }
}

impl TryFrom<RawCalendarConfig> for CalendarConfig {
    type Error = ScheduleError;

    fn try_from(raw: RawCalendarConfig) -> Result<Self, Self::Error> {
        CalendarConfig::try_from_weekdays(raw.week_start, raw.weekend)
    }
}

impl From<CalendarConfig> for RawCalendarConfig {
    fn from(item: CalendarConfig) -> Self {
        RawCalendarConfig {
            week_start: item.week_start,
            weekend: item.weekend,
        }
    }
}

impl WeekendRoll for CalendarConfig {
    fn is_weekend_day(&self, weekday: Weekday) -> bool {
        self.weekend.contains(&weekday)
    }

    fn week_start(&self) -> Weekday {
        self.week_start
    }
}

impl CycleBoundary for CalendarConfig {}
