use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ScheduleError, ScheduleResult};
use crate::scheduling::Instant;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A trigger time within a day, as whole minutes after midnight in [0, 1440).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TimeOfDayOffset(u32);

/// Create a [TimeOfDayOffset] from an hour and minute.
///
/// Panics if the values do not define a time within a day.
pub fn hm(hour: u32, minute: u32) -> TimeOfDayOffset {
    TimeOfDayOffset::try_hm(hour, minute).expect("`hour`, `minute` are invalid.")
}

impl TimeOfDayOffset {
    /// Create an offset from minutes after midnight.
    pub fn try_from_minutes(minutes: u32) -> ScheduleResult<Self> {
        if minutes >= MINUTES_PER_DAY {
            Err(ScheduleError::invalid("time of day must be less than 24 hours."))
        } else {
            Ok(TimeOfDayOffset(minutes))
        }
    }

    /// Create an offset from an hour in [0, 23] and minute in [0, 59].
    pub fn try_hm(hour: u32, minute: u32) -> ScheduleResult<Self> {
        if minute >= 60 {
            return Err(ScheduleError::invalid("`minute` must be in [0, 59]."));
        }
        Self::try_from_minutes(hour.saturating_mul(60).saturating_add(minute))
    }

    pub(crate) fn from_minutes_unchecked(minutes: u32) -> Self {
        TimeOfDayOffset(minutes)
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }

    pub fn hour(&self) -> u32 {
        self.0 / 60
    }

    pub fn minute(&self) -> u32 {
        self.0 % 60
    }
}

impl TryFrom<u32> for TimeOfDayOffset {
    type Error = ScheduleError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        TimeOfDayOffset::try_from_minutes(minutes)
    }
}

impl From<TimeOfDayOffset> for u32 {
    fn from(item: TimeOfDayOffset) -> Self {
        item.0
    }
}

impl fmt::Display for TimeOfDayOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Check that trigger times are strictly ascending, i.e. sorted and without duplicates.
pub fn validate_times(times: &[TimeOfDayOffset]) -> ScheduleResult<()> {
    if times.iter().any(|t| t.0 >= MINUTES_PER_DAY) {
        return Err(ScheduleError::invalid("time of day must be less than 24 hours."));
    }
    if times.iter().tuple_windows().any(|(a, b)| a >= b) {
        return Err(ScheduleError::invalid(
            "`times` must be sorted ascending and contain no duplicates.",
        ));
    }
    Ok(())
}

/// A validated, strictly ascending list of trigger times within a day.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TimeOfDayOffset>", into = "Vec<TimeOfDayOffset>")]
pub struct TimesOfDay(Vec<TimeOfDayOffset>);

impl TimesOfDay {
    pub fn try_new(times: Vec<TimeOfDayOffset>) -> ScheduleResult<Self> {
        validate_times(&times)?;
        Ok(TimesOfDay(times))
    }

    pub fn as_slice(&self) -> &[TimeOfDayOffset] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl TryFrom<Vec<TimeOfDayOffset>> for TimesOfDay {
    type Error = ScheduleError;

    fn try_from(times: Vec<TimeOfDayOffset>) -> Result<Self, Self::Error> {
        TimesOfDay::try_new(times)
    }
}

impl From<TimesOfDay> for Vec<TimeOfDayOffset> {
    fn from(item: TimesOfDay) -> Self {
        item.0
    }
}

/// A span of time with an inclusive `start` and an exclusive `end`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleWindow {
    pub start: Instant,
    pub end: Instant,
}

impl ScheduleWindow {
    pub fn new(start: Instant, end: Instant) -> Self {
        ScheduleWindow { start, end }
    }

    /// Whether no instant lies in the window.
    pub fn is_empty(&self) -> bool {
        self.end.no_later_than(&self.start)
    }

    /// Whether `date` lies in the window.
    pub fn contains(&self, date: &Instant) -> bool {
        date.no_earlier_than(&self.start) && date.earlier_than(&self.end)
    }

    /// Expand trigger times into every trigger instant in the window.
    ///
    /// See [dates_to_schedule].
    pub fn dates(&self, times: &[TimeOfDayOffset]) -> ScheduleResult<Vec<Instant>> {
        dates_to_schedule(times, &self.start, &self.end)
    }
}

/// Return every trigger instant in `[start, end)` for the given trigger times.
///
/// Each calendar day from the day of `start` is combined with each time in `times`, and only
/// instants inside the window are kept. The result is strictly ascending and is empty when
/// `end` is not after `start` or `times` is empty.
///
/// `times` must be strictly ascending, otherwise an error is returned.
///
/// # Examples
/// ```rust
/// # use esmlib::scheduling::{dates_to_schedule, hm, ndt, ndt_hm};
/// let dates = dates_to_schedule(&[hm(8, 0), hm(20, 0)], &ndt(2024, 1, 1), &ndt(2024, 1, 3));
/// assert_eq!(
///     dates.unwrap(),
///     vec![
///         ndt_hm(2024, 1, 1, 8, 0),
///         ndt_hm(2024, 1, 1, 20, 0),
///         ndt_hm(2024, 1, 2, 8, 0),
///         ndt_hm(2024, 1, 2, 20, 0),
///     ]
/// );
/// ```
pub fn dates_to_schedule(
    times: &[TimeOfDayOffset],
    start: &Instant,
    end: &Instant,
) -> ScheduleResult<Vec<Instant>> {
    validate_times(times)?;
    let window = ScheduleWindow::new(*start, *end);
    if window.is_empty() || times.is_empty() {
        return Ok(vec![]);
    }

    let mut days: Vec<Instant> = vec![];
    let mut day = start.current_day_at_midnight();
    while day.earlier_than(end) {
        days.push(day);
        day = day.next_day_at_midnight()?;
    }

    let dates: Vec<Instant> = days
        .iter()
        .cartesian_product(times.iter())
        .map(|(d, t)| d.add_minutes(t.minutes()))
        .filter_ok(|date| window.contains(date))
        .collect::<ScheduleResult<Vec<Instant>>>()?;
    tracing::trace!(%start, %end, count = dates.len(), "expanded trigger schedule");
    Ok(dates)
}

/// Where the next trigger falls relative to a reference time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotAvailability {
    /// A trigger remains on the same day, at or after the reference time.
    Today(Instant),
    /// Every trigger today has passed; the first trigger tomorrow is given.
    Tomorrow(Instant),
    /// No trigger times are configured.
    Unschedulable,
}

/// Determine whether a trigger remains today, falling back to tomorrow's first trigger.
pub fn slot_availability(
    times: &[TimeOfDayOffset],
    now: &Instant,
) -> ScheduleResult<SlotAvailability> {
    validate_times(times)?;
    let midnight = now.current_day_at_midnight();
    for time in times {
        let date = midnight.add_minutes(time.minutes())?;
        if date.no_earlier_than(now) {
            return Ok(SlotAvailability::Today(date));
        }
    }
    match times.first() {
        Some(first) => Ok(SlotAvailability::Tomorrow(
            now.next_day_at_midnight()?.add_minutes(first.minutes())?,
        )),
        None => Ok(SlotAvailability::Unschedulable),
    }
}

/// Return whether at least one trigger time today is at or after `now`.
pub fn can_schedule_times(times: &[TimeOfDayOffset], now: &Instant) -> ScheduleResult<bool> {
    Ok(matches!(
        slot_availability(times, now)?,
        SlotAvailability::Today(_)
    ))
}

/// Return the first trigger at or after `now`, which is tomorrow's first trigger if every
/// trigger today has passed. `None` if `times` is empty.
pub fn next_trigger(times: &[TimeOfDayOffset], now: &Instant) -> ScheduleResult<Option<Instant>> {
    match slot_availability(times, now)? {
        SlotAvailability::Today(d) | SlotAvailability::Tomorrow(d) => Ok(Some(d)),
        SlotAvailability::Unschedulable => Ok(None),
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::{ndt, ndt_hm};

    fn fixture_times() -> Vec<TimeOfDayOffset> {
        vec![hm(8, 0), hm(20, 0)]
    }

    #[test]
    fn test_time_of_day_offset() {
        assert_eq!(hm(8, 30).minutes(), 510);
        assert_eq!(hm(23, 59).to_string(), "23:59");
        assert!(TimeOfDayOffset::try_hm(24, 0).is_err());
        assert!(TimeOfDayOffset::try_hm(10, 60).is_err());
        assert!(TimeOfDayOffset::try_from_minutes(1440).is_err());
    }

    #[test]
    fn test_validate_times() {
        assert!(validate_times(&[]).is_ok());
        assert!(validate_times(&[hm(8, 0), hm(9, 0)]).is_ok());
        assert!(validate_times(&[hm(9, 0), hm(8, 0)]).is_err());
        assert!(validate_times(&[hm(9, 0), hm(9, 0)]).is_err());
        assert!(TimesOfDay::try_new(vec![hm(12, 0), hm(7, 0)]).is_err());
    }

    #[test]
    fn test_dates_to_schedule() {
        let result = dates_to_schedule(&fixture_times(), &ndt(2024, 1, 1), &ndt(2024, 1, 3));
        assert_eq!(
            result.unwrap(),
            vec![
                ndt_hm(2024, 1, 1, 8, 0),
                ndt_hm(2024, 1, 1, 20, 0),
                ndt_hm(2024, 1, 2, 8, 0),
                ndt_hm(2024, 1, 2, 20, 0),
            ]
        );
    }

    #[test]
    fn test_dates_to_schedule_partial_days() {
        let result = dates_to_schedule(
            &fixture_times(),
            &ndt_hm(2024, 1, 1, 12, 0),
            &ndt_hm(2024, 1, 3, 8, 0),
        );
        assert_eq!(
            result.unwrap(),
            vec![
                ndt_hm(2024, 1, 1, 20, 0),
                ndt_hm(2024, 1, 2, 8, 0),
                ndt_hm(2024, 1, 2, 20, 0),
            ]
        );

        let result = dates_to_schedule(
            &fixture_times(),
            &ndt_hm(2024, 1, 1, 8, 0),
            &ndt_hm(2024, 1, 1, 8, 1),
        );
        assert_eq!(result.unwrap(), vec![ndt_hm(2024, 1, 1, 8, 0)]);
    }

    #[test]
    fn test_dates_to_schedule_empty() {
        let start = ndt(2024, 1, 1);
        assert!(dates_to_schedule(&fixture_times(), &start, &start)
            .unwrap()
            .is_empty());
        assert!(dates_to_schedule(&fixture_times(), &start, &ndt(2023, 12, 1))
            .unwrap()
            .is_empty());
        assert!(dates_to_schedule(&[], &start, &ndt(2024, 2, 1))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_dates_to_schedule_unsorted() {
        let result = dates_to_schedule(
            &[hm(20, 0), hm(8, 0)],
            &ndt(2024, 1, 1),
            &ndt(2024, 1, 3),
        );
        match result {
            Err(ScheduleError::InvalidArgument(_)) => assert!(true),
            _ => assert!(false),
        }
    }

    #[test]
    fn test_schedule_window() {
        let window = ScheduleWindow::new(ndt(2024, 1, 1), ndt(2024, 1, 2));
        assert!(!window.is_empty());
        assert!(window.contains(&ndt(2024, 1, 1)));
        assert!(!window.contains(&ndt(2024, 1, 2)));
        assert_eq!(window.dates(&fixture_times()).unwrap().len(), 2);
        assert!(ScheduleWindow::new(ndt(2024, 1, 2), ndt(2024, 1, 1)).is_empty());
    }

    #[test]
    fn test_can_schedule_times() {
        let times = fixture_times();
        assert!(!can_schedule_times(&times, &ndt_hm(2024, 1, 1, 21, 0)).unwrap());
        assert!(can_schedule_times(&times, &ndt_hm(2024, 1, 1, 10, 0)).unwrap());
        assert!(can_schedule_times(&times, &ndt_hm(2024, 1, 1, 20, 0)).unwrap());
        assert!(!can_schedule_times(&[], &ndt_hm(2024, 1, 1, 0, 0)).unwrap());
    }

    #[test]
    fn test_slot_availability() {
        let times = fixture_times();
        assert_eq!(
            slot_availability(&times, &ndt_hm(2024, 1, 1, 10, 0)).unwrap(),
            SlotAvailability::Today(ndt_hm(2024, 1, 1, 20, 0))
        );
        assert_eq!(
            slot_availability(&times, &ndt_hm(2024, 1, 31, 21, 0)).unwrap(),
            SlotAvailability::Tomorrow(ndt_hm(2024, 2, 1, 8, 0))
        );
        assert_eq!(
            slot_availability(&[], &ndt(2024, 1, 1)).unwrap(),
            SlotAvailability::Unschedulable
        );
    }

    #[test]
    fn test_next_trigger() {
        let times = fixture_times();
        assert_eq!(
            next_trigger(&times, &ndt_hm(2024, 1, 1, 7, 59)).unwrap(),
            Some(ndt_hm(2024, 1, 1, 8, 0))
        );
        assert_eq!(
            next_trigger(&times, &ndt_hm(2024, 1, 1, 20, 1)).unwrap(),
            Some(ndt_hm(2024, 1, 2, 8, 0))
        );
        assert_eq!(next_trigger(&[], &ndt(2024, 1, 1)).unwrap(), None);
    }
}
