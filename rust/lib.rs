//! This is the documentation for esmlib
//!
//! Calendar and trigger calculations for periodic experience sampling prompts. See the
//! [`scheduling`] module for the full description.

#[cfg(test)]
mod tests;

pub mod error;
pub use error::{ScheduleError, ScheduleResult};

pub mod json;

pub mod scheduling;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use crate::json::json_py::from_json_py;
    use crate::scheduling::py::{can_schedule_times_py, dates_to_schedule_py, next_trigger_py};
    use crate::scheduling::{CalendarConfig, EsmSchedule, Recurrence};

    // JSON
    m.add_function(wrap_pyfunction!(from_json_py, m)?)?;

    // Calendars
    m.add_class::<CalendarConfig>()?;
    m.add_class::<Recurrence>()?;

    // Schedules
    m.add_class::<EsmSchedule>()?;
    m.add_function(wrap_pyfunction!(dates_to_schedule_py, m)?)?;
    m.add_function(wrap_pyfunction!(can_schedule_times_py, m)?)?;
    m.add_function(wrap_pyfunction!(next_trigger_py, m)?)?;

    Ok(())
}
