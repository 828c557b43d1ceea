use serde::{Deserialize, Serialize};

use crate::error::ScheduleResult;
use crate::scheduling::{
    dates_to_schedule, CalendarConfig, CycleBoundary, Instant, Recurrence, TimesOfDay,
};

#[cfg(feature = "python")]
use pyo3::pyclass;

/// An experience sampling schedule: a recurrence policy, daily trigger times and an optional
/// start and end.
///
/// The schedule holds no record of its current cycle; it is recomputed from a clock reading
/// each time it is asked.
#[cfg_attr(feature = "python", pyclass(module = "esmlib.rs", eq))]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EsmSchedule {
    pub recurrence: Recurrence,
    pub times: TimesOfDay,
    pub start_date: Option<Instant>,
    pub end_date: Option<Instant>,
    pub calendar: CalendarConfig,
}

impl EsmSchedule {
    /// Create a schedule using the default [CalendarConfig].
    pub fn new(
        recurrence: Recurrence,
        times: TimesOfDay,
        start_date: Option<Instant>,
        end_date: Option<Instant>,
    ) -> Self {
        EsmSchedule {
            recurrence,
            times,
            start_date,
            end_date,
            calendar: CalendarConfig::default(),
        }
    }

    /// Replace the calendar conventions.
    pub fn with_calendar(self, calendar: CalendarConfig) -> Self {
        EsmSchedule { calendar, ..self }
    }

    pub fn has_start_date(&self) -> bool {
        self.start_date.is_some()
    }

    pub fn has_end_date(&self) -> bool {
        self.end_date.is_some()
    }

    /// Whether the schedule stops at a known date. A start date is not required.
    pub fn is_fixed_duration(&self) -> bool {
        self.has_end_date()
    }

    /// Return the start of the cycle containing `today`, monthly cycles anchored to the
    /// schedule start date.
    pub fn current_cycle_start(&self, today: &Instant) -> ScheduleResult<Instant> {
        self.calendar
            .current_cycle_start(&self.recurrence, today, self.start_date.as_ref())
    }

    /// Return the start of the cycle following the one containing `today`.
    pub fn next_cycle_start(&self, today: &Instant) -> ScheduleResult<Instant> {
        self.calendar
            .next_cycle_start(&self.recurrence, today, self.start_date.as_ref())
    }

    /// Return every trigger in the cycle containing `now`, bounded by the schedule start and
    /// end dates.
    pub fn current_cycle_triggers(&self, now: &Instant) -> ScheduleResult<Vec<Instant>> {
        let mut start = self.current_cycle_start(now)?;
        let mut end = self.next_cycle_start(now)?;
        if let Recurrence::Daily { .. } = self.recurrence {
            // a daily cycle never spans the weekend it skips over
            end = end.min(start.next_day_at_midnight()?);
        }
        if let Some(s) = self.start_date {
            start = start.max(s);
        }
        if let Some(e) = self.end_date {
            end = end.min(e);
        }
        dates_to_schedule(self.times.as_slice(), &start, &end)
    }
}
