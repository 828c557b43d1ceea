use chrono::prelude::*;
use chrono::Months;
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};
use crate::scheduling::calendars::get_day_clamped;
use crate::scheduling::{Instant, WeekendRoll};

#[cfg(feature = "python")]
use pyo3::pyclass;

/// A recurrence policy for experience sampling prompts.
#[cfg_attr(feature = "python", pyclass(module = "esmlib.rs", eq))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recurrence {
    /// A new cycle every calendar day, optionally skipping weekend days.
    Daily { include_weekends: bool },
    /// A new cycle every calendar week, starting on the calendar's first day of the week.
    Weekly {},
    /// A new cycle every calendar month.
    Monthly {},
}

/// Determine where experience sampling cycles begin, according to a [WeekendRoll] calendar.
///
/// Every method is recomputed from its arguments; there is no persisted cycle state.
pub trait CycleBoundary: WeekendRoll {
    /// Return the start of the next daily cycle after `today`.
    ///
    /// This is the following midnight, rolled forward over weekend days, preserving midnight,
    /// unless `include_weekends` is set.
    fn daily_esm_next_cycle_start_date(
        &self,
        today: &Instant,
        include_weekends: bool,
    ) -> ScheduleResult<Instant> {
        let next = today.next_day_at_midnight()?;
        if include_weekends {
            Ok(next)
        } else {
            self.date_in_future_by_skipping_weekends(&next)
        }
    }

    /// Return the start of the next weekly cycle: one week after the first day of the week
    /// containing `today`.
    fn weekly_esm_next_cycle_start_date(&self, today: &Instant) -> ScheduleResult<Instant> {
        self.first_day_in_current_week(today)?.add_week_interval(1)
    }

    /// Return the start of the next monthly cycle: midnight on the first day of the calendar
    /// month after `today`.
    fn monthly_esm_next_cycle_start_date(&self, today: &Instant) -> ScheduleResult<Instant> {
        today
            .first_day_in_current_month()
            .naive()
            .checked_add_months(Months::new(1))
            .map(Instant::new)
            .ok_or_else(|| ScheduleError::out_of_range("date exceeds the supported calendar."))
    }

    /// Return midnight of the day in the month of `today` whose day-of-month matches `anchor`.
    ///
    /// If the month is too short for the anchor's day-of-month the last day of the month is
    /// used, e.g. an anchor on the 31st maps to the 30th of April.
    fn cycle_start_date_of_month_with_original_start_date(
        &self,
        today: &Instant,
        anchor: &Instant,
    ) -> ScheduleResult<Instant> {
        let date = get_day_clamped(today.date().year(), today.date().month(), anchor.date().day())?;
        Ok(Instant::new(date.and_time(NaiveTime::MIN)))
    }

    /// Return the start of the cycle containing `today` under a [Recurrence] policy.
    ///
    /// Monthly cycles are aligned to the day-of-month of `anchor` when one is given and to the
    /// first of the month otherwise. For daily cycles that exclude weekends a weekend `today`
    /// has no cycle of its own and the start of the following weekday is returned.
    fn current_cycle_start(
        &self,
        policy: &Recurrence,
        today: &Instant,
        anchor: Option<&Instant>,
    ) -> ScheduleResult<Instant> {
        match (policy, anchor) {
            (Recurrence::Daily { include_weekends: true }, _) => Ok(today.current_day_at_midnight()),
            (Recurrence::Daily { include_weekends: false }, _) => {
                self.nearest_non_weekend_at_midnight(today)
            }
            (Recurrence::Weekly {}, _) => self.first_day_in_current_week(today),
            (Recurrence::Monthly {}, None) => Ok(today.first_day_in_current_month()),
            (Recurrence::Monthly {}, Some(a)) => {
                let start = self.cycle_start_date_of_month_with_original_start_date(today, a)?;
                if start.later_than(today) {
                    // the anchored day has not arrived yet, so the cycle began last month
                    let previous_month = today.first_day_in_current_month().add_day_interval(-1)?;
                    self.cycle_start_date_of_month_with_original_start_date(&previous_month, a)
                } else {
                    Ok(start)
                }
            }
        }
    }

    /// Return the start of the cycle after the one containing `today` under a [Recurrence]
    /// policy.
    ///
    /// Monthly cycles with an `anchor` advance to the anchored day of the following month.
    fn next_cycle_start(
        &self,
        policy: &Recurrence,
        today: &Instant,
        anchor: Option<&Instant>,
    ) -> ScheduleResult<Instant> {
        let next = match (policy, anchor) {
            (Recurrence::Daily { include_weekends }, _) => {
                self.daily_esm_next_cycle_start_date(today, *include_weekends)
            }
            (Recurrence::Weekly {}, _) => self.weekly_esm_next_cycle_start_date(today),
            (Recurrence::Monthly {}, None) => self.monthly_esm_next_cycle_start_date(today),
            (Recurrence::Monthly {}, Some(a)) => {
                let current = self.current_cycle_start(policy, today, anchor)?;
                let next_month = self.monthly_esm_next_cycle_start_date(&current)?;
                self.cycle_start_date_of_month_with_original_start_date(&next_month, a)
            }
        }?;
        tracing::debug!(%today, %next, ?policy, "computed next cycle start");
        Ok(next)
    }
}
