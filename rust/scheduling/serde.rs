use crate::json::JSON;
use crate::scheduling::{CalendarConfig, EsmSchedule, Recurrence, ScheduleWindow, TimesOfDay};

impl JSON for CalendarConfig {}
impl JSON for Recurrence {}
impl JSON for TimesOfDay {}
impl JSON for ScheduleWindow {}
impl JSON for EsmSchedule {}
