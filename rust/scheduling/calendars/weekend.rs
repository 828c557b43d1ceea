use chrono::prelude::*;

use crate::error::{ScheduleError, ScheduleResult};
use crate::scheduling::calendars::get_day_clamped;
use crate::scheduling::Instant;

/// Week and weekend conventions, with date rolling over weekends.
pub trait WeekendRoll {
    /// Returns whether the day of the week is part of the weekend.
    fn is_weekend_day(&self, weekday: Weekday) -> bool;

    /// Returns the first day of a calendar week.
    fn week_start(&self) -> Weekday;

    /// Returns whether the calendar day of `date` is a weekend day.
    fn is_weekend(&self, date: &Instant) -> bool {
        self.is_weekend_day(date.weekday())
    }

    /// Returns whether the calendar day of `date` is not a weekend day.
    fn is_weekday(&self, date: &Instant) -> bool {
        !self.is_weekend(date)
    }

    /// Return the number of whole days from the day of `date` to the nearest weekday at or
    /// after it. Zero if `date` is already a weekday.
    fn days_to_nearest_weekday(&self, date: &Instant) -> ScheduleResult<i64> {
        let mut weekday = date.weekday();
        let mut days = 0_i64;
        while self.is_weekend_day(weekday) {
            if days >= 7 {
                return Err(ScheduleError::invalid(
                    "calendar weekend covers every day of the week.",
                ));
            }
            weekday = weekday.succ();
            days += 1;
        }
        Ok(days)
    }

    /// Return the midnight of `date`, if a weekday, or of the next weekday after `date`.
    fn nearest_non_weekend_at_midnight(&self, date: &Instant) -> ScheduleResult<Instant> {
        let days = self.days_to_nearest_weekday(date)?;
        date.date_at_midnight_by_adding_day_interval(days)
    }

    /// Return `date`, if a weekday, or the same time of day on the next weekday after `date`.
    fn date_in_future_by_skipping_weekends(&self, date: &Instant) -> ScheduleResult<Instant> {
        let days = self.days_to_nearest_weekday(date)?;
        date.add_day_interval(days)
    }

    /// Return midnight of the first day of the calendar week containing `date`.
    fn first_day_in_current_week(&self, date: &Instant) -> ScheduleResult<Instant> {
        let offset = (date.weekday().num_days_from_monday() + 7
            - self.week_start().num_days_from_monday())
            % 7;
        date.current_day_at_midnight()
            .add_day_interval(-i64::from(offset))
    }

    /// Return the number of non-weekend days in the calendar month containing `date`.
    fn num_of_weekdays_in_current_month(&self, date: &Instant) -> u32 {
        let (year, month) = (date.date().year(), date.date().month());
        (1..=date.num_of_days_in_current_month())
            .filter_map(|day| get_day_clamped(year, month, day).ok())
            .filter(|d| !self.is_weekend_day(d.weekday()))
            .count() as u32
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::{ndt, ndt_hm, CalendarConfig};

    fn fixture_cal() -> CalendarConfig {
        CalendarConfig::default()
    }

    #[test]
    fn test_is_weekend() {
        let cal = fixture_cal();
        assert!(cal.is_weekend(&ndt(2024, 1, 6))); // Saturday
        assert!(cal.is_weekend(&ndt_hm(2024, 1, 7, 23, 59))); // Sunday
        assert!(!cal.is_weekend(&ndt(2024, 1, 8))); // Monday
        assert!(cal.is_weekday(&ndt(2024, 1, 5))); // Friday
    }

    #[test]
    fn test_nearest_non_weekend_at_midnight() {
        let cal = fixture_cal();
        let options: Vec<(Instant, Instant)> = vec![
            (ndt_hm(2024, 1, 5, 14, 0), ndt(2024, 1, 5)), // Friday unchanged
            (ndt_hm(2024, 1, 6, 14, 0), ndt(2024, 1, 8)), // Saturday +2
            (ndt_hm(2024, 1, 7, 14, 0), ndt(2024, 1, 8)), // Sunday +1
            (ndt(2024, 3, 30), ndt(2024, 4, 1)),          // crosses month end
        ];
        for option in options {
            assert_eq!(option.1, cal.nearest_non_weekend_at_midnight(&option.0).unwrap());
        }
    }

    #[test]
    fn test_date_in_future_by_skipping_weekends() {
        let cal = fixture_cal();
        assert_eq!(
            cal.date_in_future_by_skipping_weekends(&ndt_hm(2024, 1, 6, 9, 30))
                .unwrap(),
            ndt_hm(2024, 1, 8, 9, 30)
        );
        assert_eq!(
            cal.date_in_future_by_skipping_weekends(&ndt_hm(2024, 1, 7, 21, 0))
                .unwrap(),
            ndt_hm(2024, 1, 8, 21, 0)
        );
        assert_eq!(
            cal.date_in_future_by_skipping_weekends(&ndt_hm(2024, 1, 3, 21, 0))
                .unwrap(),
            ndt_hm(2024, 1, 3, 21, 0)
        );
    }

    #[test]
    fn test_custom_weekend_roll() {
        // Friday and Saturday weekend
        let cal = CalendarConfig::try_new(6, vec![4, 5]).unwrap();
        assert_eq!(
            cal.nearest_non_weekend_at_midnight(&ndt_hm(2024, 1, 5, 10, 0))
                .unwrap(),
            ndt(2024, 1, 7)
        );
        assert_eq!(
            cal.nearest_non_weekend_at_midnight(&ndt(2024, 1, 7)).unwrap(),
            ndt(2024, 1, 7)
        );
    }

    #[test]
    fn test_first_day_in_current_week() {
        let cal = fixture_cal();
        assert_eq!(
            cal.first_day_in_current_week(&ndt_hm(2024, 1, 3, 12, 0)).unwrap(),
            ndt(2024, 1, 1)
        );
        assert_eq!(
            cal.first_day_in_current_week(&ndt_hm(2024, 1, 7, 23, 0)).unwrap(),
            ndt(2024, 1, 1)
        );
        assert_eq!(
            cal.first_day_in_current_week(&ndt(2024, 1, 8)).unwrap(),
            ndt(2024, 1, 8)
        );

        let sunday_cal = CalendarConfig::try_new(6, vec![5, 6]).unwrap();
        assert_eq!(
            sunday_cal
                .first_day_in_current_week(&ndt_hm(2024, 1, 3, 12, 0))
                .unwrap(),
            ndt(2023, 12, 31)
        );
    }

    #[test]
    fn test_num_of_weekdays_in_current_month() {
        let cal = fixture_cal();
        assert_eq!(cal.num_of_weekdays_in_current_month(&ndt(2024, 1, 17)), 23);
        assert_eq!(cal.num_of_weekdays_in_current_month(&ndt(2024, 2, 1)), 21);
        assert_eq!(cal.num_of_weekdays_in_current_month(&ndt(2023, 2, 1)), 20);
        assert_eq!(cal.num_of_weekdays_in_current_month(&ndt(2024, 6, 30)), 20);
    }
}
