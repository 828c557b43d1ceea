use crate::json::json_py::DeserializedObj;
use crate::json::JSON;
use crate::scheduling::{CalendarConfig, CycleBoundary, Instant, WeekendRoll};
use chrono::NaiveDateTime;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

#[pymethods]
impl CalendarConfig {
    /// Create a new *CalendarConfig* object.
    ///
    /// Parameters
    /// ----------
    /// week_start: int
    ///     The first day of the week, 0 for Monday.
    /// weekend: list[int],
    ///     List of integers defining the weekends, [5, 6] for Saturday and Sunday.
    #[new]
    #[pyo3(signature = (week_start=0, weekend=vec![5, 6]))]
    fn new_py(week_start: u8, weekend: Vec<u8>) -> PyResult<Self> {
        Ok(CalendarConfig::try_new(week_start, weekend)?)
    }

    /// The first day of the week, 0 for Monday.
    #[getter(week_start)]
    fn week_start_py(&self) -> u8 {
        self.week_start.num_days_from_monday() as u8
    }

    /// A list of days in the week defined as weekends.
    #[getter(weekend)]
    fn weekend_py(&self) -> Vec<u8> {
        self.weekend
            .iter()
            .map(|x| x.num_days_from_monday() as u8)
            .collect()
    }

    /// Return whether the `date` falls on a weekend.
    ///
    /// Parameters
    /// ----------
    /// date: datetime
    ///     Date to test
    ///
    /// Returns
    /// -------
    /// bool
    #[pyo3(name = "is_weekend")]
    fn is_weekend_py(&self, date: NaiveDateTime) -> bool {
        self.is_weekend(&date.into())
    }

    /// Return midnight of `date`, or of the next weekday if `date` falls on a weekend.
    ///
    /// Parameters
    /// ----------
    /// date: datetime
    ///
    /// Returns
    /// -------
    /// datetime
    #[pyo3(name = "nearest_non_weekend_at_midnight")]
    fn nearest_non_weekend_at_midnight_py(&self, date: NaiveDateTime) -> PyResult<NaiveDateTime> {
        Ok(self.nearest_non_weekend_at_midnight(&date.into())?.naive())
    }

    /// Return `date`, or the same time on the next weekday if `date` falls on a weekend.
    ///
    /// Parameters
    /// ----------
    /// date: datetime
    ///
    /// Returns
    /// -------
    /// datetime
    #[pyo3(name = "date_in_future_by_skipping_weekends")]
    fn date_in_future_by_skipping_weekends_py(
        &self,
        date: NaiveDateTime,
    ) -> PyResult<NaiveDateTime> {
        Ok(self.date_in_future_by_skipping_weekends(&date.into())?.naive())
    }

    /// Return midnight of the first day of the week containing `date`.
    #[pyo3(name = "first_day_in_current_week")]
    fn first_day_in_current_week_py(&self, date: NaiveDateTime) -> PyResult<NaiveDateTime> {
        Ok(self.first_day_in_current_week(&date.into())?.naive())
    }

    /// Return the number of non-weekend days in the month containing `date`.
    #[pyo3(name = "num_of_weekdays_in_current_month")]
    fn num_of_weekdays_in_current_month_py(&self, date: NaiveDateTime) -> u32 {
        self.num_of_weekdays_in_current_month(&date.into())
    }

    /// Return the start of the next daily cycle after `today`.
    ///
    /// Parameters
    /// ----------
    /// today: datetime
    /// include_weekends: bool
    ///     If *False* a cycle starting on a weekend is rolled to the next weekday.
    ///
    /// Returns
    /// -------
    /// datetime
    #[pyo3(name = "daily_esm_next_cycle_start_date")]
    fn daily_esm_next_cycle_start_date_py(
        &self,
        today: NaiveDateTime,
        include_weekends: bool,
    ) -> PyResult<NaiveDateTime> {
        Ok(self
            .daily_esm_next_cycle_start_date(&today.into(), include_weekends)?
            .naive())
    }

    /// Return the start of the next weekly cycle after `today`.
    #[pyo3(name = "weekly_esm_next_cycle_start_date")]
    fn weekly_esm_next_cycle_start_date_py(&self, today: NaiveDateTime) -> PyResult<NaiveDateTime> {
        Ok(self.weekly_esm_next_cycle_start_date(&today.into())?.naive())
    }

    /// Return the first of the month after `today`.
    #[pyo3(name = "monthly_esm_next_cycle_start_date")]
    fn monthly_esm_next_cycle_start_date_py(
        &self,
        today: NaiveDateTime,
    ) -> PyResult<NaiveDateTime> {
        Ok(self.monthly_esm_next_cycle_start_date(&today.into())?.naive())
    }

    /// Return midnight of the day in the month of `today` matching the day-of-month of
    /// `original_start_date`, clamped to the end of short months.
    ///
    /// Parameters
    /// ----------
    /// today: datetime
    /// original_start_date: datetime
    ///
    /// Returns
    /// -------
    /// datetime
    #[pyo3(name = "cycle_start_date_of_month_with_original_start_date")]
    fn cycle_start_date_of_month_with_original_start_date_py(
        &self,
        today: NaiveDateTime,
        original_start_date: NaiveDateTime,
    ) -> PyResult<NaiveDateTime> {
        let anchor: Instant = original_start_date.into();
        Ok(self
            .cycle_start_date_of_month_with_original_start_date(&today.into(), &anchor)?
            .naive())
    }

    fn __getnewargs__(&self) -> (u8, Vec<u8>) {
        (self.week_start_py(), self.weekend_py())
    }

    // JSON
    /// Return a JSON representation of the object.
    ///
    /// Returns
    /// -------
    /// str
    #[pyo3(name = "to_json")]
    fn to_json_py(&self) -> PyResult<String> {
        match DeserializedObj::CalendarConfig(self.clone()).to_json() {
            Ok(v) => Ok(v),
            Err(_) => Err(PyValueError::new_err(
                "Failed to serialize `CalendarConfig` to JSON.",
            )),
        }
    }

    fn __repr__(&self) -> String {
        format!("<esm.CalendarConfig at {:p}>", self)
    }
}
