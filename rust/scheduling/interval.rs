use chrono::{Days, TimeDelta};

use crate::error::{ScheduleError, ScheduleResult};
use crate::scheduling::Instant;

fn out_of_range() -> ScheduleError {
    ScheduleError::out_of_range("date exceeds the supported calendar.")
}

impl Instant {
    /// Shift forward by a number of minutes, crossing day boundaries as needed.
    pub fn add_minutes(&self, minutes: u32) -> ScheduleResult<Instant> {
        self.naive()
            .checked_add_signed(TimeDelta::minutes(i64::from(minutes)))
            .map(Instant::new)
            .ok_or_else(out_of_range)
    }

    /// Shift by a signed number of calendar days, preserving the time of day.
    pub fn add_day_interval(&self, days: i64) -> ScheduleResult<Instant> {
        let shift = Days::new(days.unsigned_abs());
        let new_date = if days < 0 {
            self.naive().checked_sub_days(shift)
        } else {
            self.naive().checked_add_days(shift)
        };
        new_date.map(Instant::new).ok_or_else(out_of_range)
    }

    /// Shift forward by `7 * weeks` calendar days, preserving the time of day.
    pub fn add_week_interval(&self, weeks: u32) -> ScheduleResult<Instant> {
        self.naive()
            .checked_add_days(Days::new(u64::from(weeks) * 7))
            .map(Instant::new)
            .ok_or_else(out_of_range)
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::{ndt, ndt_hm};
    use chrono::NaiveDateTime;

    #[test]
    fn test_add_minutes() {
        let t = ndt_hm(2024, 1, 1, 23, 30);
        assert_eq!(t.add_minutes(0).unwrap(), t);
        assert_eq!(t.add_minutes(45).unwrap(), ndt_hm(2024, 1, 2, 0, 15));
        assert_eq!(t.add_minutes(60 * 24 * 2).unwrap(), ndt_hm(2024, 1, 3, 23, 30));
    }

    #[test]
    fn test_add_day_interval() {
        let t = ndt_hm(2024, 3, 1, 8, 15);
        assert_eq!(t.add_day_interval(-1).unwrap(), ndt_hm(2024, 2, 29, 8, 15));
        assert_eq!(t.add_day_interval(31).unwrap(), ndt_hm(2024, 4, 1, 8, 15));
        assert_eq!(t.add_day_interval(0).unwrap(), t);
    }

    #[test]
    fn test_add_week_interval() {
        let t = ndt_hm(2024, 12, 25, 20, 0);
        assert_eq!(t.add_week_interval(1).unwrap(), ndt_hm(2025, 1, 1, 20, 0));
        assert_eq!(t.add_week_interval(0).unwrap(), t);
    }

    #[test]
    fn test_out_of_range() {
        let max = Instant::new(NaiveDateTime::MAX);
        assert_eq!(max.add_minutes(1), Err(out_of_range()));
        assert_eq!(max.add_day_interval(1), Err(out_of_range()));
        assert_eq!(max.add_week_interval(1), Err(out_of_range()));
        let min = Instant::new(NaiveDateTime::MIN);
        assert_eq!(min.add_day_interval(-1), Err(out_of_range()));
        assert_eq!(ndt(2024, 1, 1).add_day_interval(-1).unwrap(), ndt(2023, 12, 31));
    }
}
