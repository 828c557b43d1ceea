//! Calendar arithmetic and trigger schedules for experience sampling prompts.
//!
//! The purpose of this module is to decide, for a recurrence policy and a clock reading,
//! exactly when prompts should fire, including examples such as;
//! - Daily prompting that skips weekend days, rolling the next cycle to a weekday.
//! - Weekly prompting aligned to a configurable first day of the week.
//! - Monthly prompting aligned either to the first of the month or to the day-of-month of an
//!   original start date, clamped for short months.
//! - Expansion of a list of daily trigger times into every trigger instant of a window.
//!
//! No value here holds mutable state. A cycle and its triggers are recomputed from a start
//! date, a policy and a caller supplied "now" whenever they are needed.
//!
//! # Instants and Calendars
//!
//! ## Instants
//!
//! An [`Instant`] is a date-time in a single reference time zone. It carries the calendar
//! normalisation methods that need no conventions, such as
//! [`Instant::current_day_at_midnight`] or [`Instant::first_day_in_current_month`], and the
//! interval arithmetic [`Instant::add_minutes`], [`Instant::add_day_interval`] and
//! [`Instant::add_week_interval`].
//!
//! ## Calendars
//!
//! A [`CalendarConfig`] defines the first day of the week and the weekend days. It implements
//! the [`WeekendRoll`] trait which provides weekend detection and rolling forward to the
//! nearest weekday.
//!
//! ### Example
//! This example uses the default calendar, with a Saturday and Sunday weekend, to roll
//! Saturday 6th January 2024 forward to the Monday.
//! ```rust
//! # use esmlib::scheduling::{CalendarConfig, ndt, ndt_hm, WeekendRoll};
//! let cal = CalendarConfig::default();
//! assert_eq!(ndt(2024, 1, 8), cal.nearest_non_weekend_at_midnight(&ndt_hm(2024, 1, 6, 9, 0)).unwrap());
//! assert_eq!(ndt_hm(2024, 1, 8, 9, 0), cal.date_in_future_by_skipping_weekends(&ndt_hm(2024, 1, 6, 9, 0)).unwrap());
//! ```
//!
//! # Cycles
//!
//! A [`Recurrence`] policy is daily, weekly or monthly. The [`CycleBoundary`] trait, also
//! implemented by [`CalendarConfig`], determines where the current and next cycles begin.
//!
//! ### Example
//! A daily cycle evaluated on Friday 5th January 2024 that excludes weekends next begins on
//! Monday, while a monthly cycle anchored to the 31st begins on the last day of short months.
//! ```rust
//! # use esmlib::scheduling::{CalendarConfig, CycleBoundary, ndt, ndt_hm};
//! let cal = CalendarConfig::default();
//! let friday = ndt_hm(2024, 1, 5, 10, 0);
//! assert_eq!(ndt(2024, 1, 8), cal.daily_esm_next_cycle_start_date(&friday, false).unwrap());
//!
//! let anchor = ndt(2023, 1, 31);
//! assert_eq!(
//!     ndt(2024, 4, 30),
//!     cal.cycle_start_date_of_month_with_original_start_date(&ndt(2024, 4, 2), &anchor).unwrap()
//! );
//! ```
//!
//! # Schedules
//!
//! [`dates_to_schedule`] expands strictly ascending [`TimeOfDayOffset`] values into trigger
//! instants within a [`ScheduleWindow`], and [`can_schedule_times`] reports whether a trigger
//! is still to come today. An [`EsmSchedule`] combines a policy, trigger times and optional
//! start and end dates.
//!
//! ### Example
//! ```rust
//! # use esmlib::scheduling::{EsmSchedule, Recurrence, TimesOfDay, hm, ndt, ndt_hm};
//! let schedule = EsmSchedule::new(
//!     Recurrence::Weekly {},
//!     TimesOfDay::try_new(vec![hm(8, 0), hm(20, 0)]).unwrap(),
//!     None,
//!     Some(ndt(2024, 1, 3)),
//! );
//! let triggers = schedule.current_cycle_triggers(&ndt_hm(2024, 1, 2, 9, 0)).unwrap();
//! assert_eq!(
//!     triggers,
//!     vec![
//!         ndt_hm(2024, 1, 1, 8, 0),
//!         ndt_hm(2024, 1, 1, 20, 0),
//!         ndt_hm(2024, 1, 2, 8, 0),
//!         ndt_hm(2024, 1, 2, 20, 0),
//!     ]
//! );
//! ```

mod calendars;
mod cycle;
mod esm;
mod instant;
mod interval;
mod schedule;

mod serde;

#[cfg(feature = "python")]
pub(crate) mod py;

pub use crate::scheduling::{
    calendars::{days_in_month, get_day_clamped, is_leap_year, CalendarConfig, WeekendRoll},
    cycle::{CycleBoundary, Recurrence},
    esm::EsmSchedule,
    instant::{ndt, ndt_hm, Instant},
    schedule::{
        can_schedule_times, dates_to_schedule, hm, next_trigger, slot_availability,
        validate_times, ScheduleWindow, SlotAvailability, TimeOfDayOffset, TimesOfDay,
    },
};
