use crate::json::json_py::DeserializedObj;
use crate::json::JSON;
use crate::scheduling::py::times_from_py;
use crate::scheduling::{
    can_schedule_times, dates_to_schedule, next_trigger, CalendarConfig, EsmSchedule, Instant,
    Recurrence, TimesOfDay,
};

use chrono::prelude::*;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Return every trigger datetime in ``[start, end)`` for a sorted list of ``(hour, minute)``
/// trigger times.
#[pyfunction]
#[pyo3(name = "dates_to_schedule")]
pub(crate) fn dates_to_schedule_py(
    times: Vec<(u32, u32)>,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> PyResult<Vec<NaiveDateTime>> {
    let times = times_from_py(times)?;
    Ok(dates_to_schedule(&times, &start.into(), &end.into())?
        .into_iter()
        .map(|d| d.naive())
        .collect())
}

/// Return whether any trigger time today is at or after ``now``.
#[pyfunction]
#[pyo3(name = "can_schedule_times")]
pub(crate) fn can_schedule_times_py(times: Vec<(u32, u32)>, now: NaiveDateTime) -> PyResult<bool> {
    let times = times_from_py(times)?;
    Ok(can_schedule_times(&times, &now.into())?)
}

/// Return the first trigger at or after ``now``, or *None* if there are no trigger times.
#[pyfunction]
#[pyo3(name = "next_trigger")]
pub(crate) fn next_trigger_py(
    times: Vec<(u32, u32)>,
    now: NaiveDateTime,
) -> PyResult<Option<NaiveDateTime>> {
    let times = times_from_py(times)?;
    Ok(next_trigger(&times, &now.into())?.map(|d| d.naive()))
}

#[pymethods]
impl EsmSchedule {
    #[new]
    #[pyo3(signature = (recurrence, times, start_date=None, end_date=None, calendar=None))]
    fn new_py(
        recurrence: Recurrence,
        times: Vec<(u32, u32)>,
        start_date: Option<NaiveDateTime>,
        end_date: Option<NaiveDateTime>,
        calendar: Option<CalendarConfig>,
    ) -> PyResult<Self> {
        let times = TimesOfDay::try_new(times_from_py(times)?)?;
        Ok(EsmSchedule::new(
            recurrence,
            times,
            start_date.map(Instant::new),
            end_date.map(Instant::new),
        )
        .with_calendar(calendar.unwrap_or_default()))
    }

    #[pyo3(name = "has_start_date")]
    fn has_start_date_py(&self) -> bool {
        self.has_start_date()
    }

    #[pyo3(name = "has_end_date")]
    fn has_end_date_py(&self) -> bool {
        self.has_end_date()
    }

    #[pyo3(name = "is_fixed_duration")]
    fn is_fixed_duration_py(&self) -> bool {
        self.is_fixed_duration()
    }

    /// Return the start of the cycle containing `today`.
    #[pyo3(name = "current_cycle_start")]
    fn current_cycle_start_py(&self, today: NaiveDateTime) -> PyResult<NaiveDateTime> {
        Ok(self.current_cycle_start(&today.into())?.naive())
    }

    /// Return the start of the cycle after the one containing `today`.
    #[pyo3(name = "next_cycle_start")]
    fn next_cycle_start_py(&self, today: NaiveDateTime) -> PyResult<NaiveDateTime> {
        Ok(self.next_cycle_start(&today.into())?.naive())
    }

    /// Return every trigger datetime in the cycle containing `now`.
    ///
    /// Parameters
    /// ----------
    /// now: datetime
    ///
    /// Returns
    /// -------
    /// list[datetime]
    #[pyo3(name = "current_cycle_triggers")]
    fn current_cycle_triggers_py(&self, now: NaiveDateTime) -> PyResult<Vec<NaiveDateTime>> {
        Ok(self
            .current_cycle_triggers(&now.into())?
            .into_iter()
            .map(|d| d.naive())
            .collect())
    }

    // JSON
    /// Return a JSON representation of the object.
    ///
    /// Returns
    /// -------
    /// str
    #[pyo3(name = "to_json")]
    fn to_json_py(&self) -> PyResult<String> {
        match DeserializedObj::EsmSchedule(self.clone()).to_json() {
            Ok(v) => Ok(v),
            Err(_) => Err(PyValueError::new_err(
                "Failed to serialize `EsmSchedule` to JSON.",
            )),
        }
    }

    fn __repr__(&self) -> String {
        format!("<esm.EsmSchedule at {:p}>", self)
    }
}
