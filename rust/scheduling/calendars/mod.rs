mod config;
mod month;
mod weekend;

pub use crate::scheduling::calendars::{
    config::CalendarConfig,
    month::{days_in_month, get_day_clamped, is_leap_year},
    weekend::WeekendRoll,
};
