//! Wrapper module to export to Python using pyo3 bindings.

mod calendar;
mod schedule;

use crate::error::ScheduleError;
use crate::scheduling::TimeOfDayOffset;
use pyo3::exceptions::{PyOverflowError, PyValueError};
use pyo3::PyErr;

pub(crate) use crate::scheduling::py::schedule::{
    can_schedule_times_py, dates_to_schedule_py, next_trigger_py,
};

impl From<ScheduleError> for PyErr {
    fn from(err: ScheduleError) -> Self {
        match err {
            ScheduleError::InvalidArgument(_) => PyValueError::new_err(err.to_string()),
            ScheduleError::OutOfRange(_) => PyOverflowError::new_err(err.to_string()),
        }
    }
}

/// Convert Python `(hour, minute)` tuples to validated trigger times.
pub(crate) fn times_from_py(times: Vec<(u32, u32)>) -> Result<Vec<TimeOfDayOffset>, PyErr> {
    times
        .into_iter()
        .map(|(h, m)| TimeOfDayOffset::try_hm(h, m).map_err(PyErr::from))
        .collect()
}
