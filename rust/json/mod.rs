//! JSON round-tripping of calendars, policies and schedules, with the ``serde`` crate.
//!
//! Schedules are persisted by the caller, so every serializable value in this crate
//! implements [JSON]. Deserialization runs the same validation as the constructors.

#[cfg(feature = "python")]
pub mod json_py;

use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

/// Handles the `to` and `from` JSON conversion.
pub trait JSON: Serialize + for<'de> Deserialize<'de> {
    /// Return a JSON string representing the object.
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Return an indented JSON string representing the object.
    fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Create an object from a JSON string representation.
    fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Create an object from a JSON string representation, reporting malformed or invalid
    /// content as [ScheduleError::InvalidArgument].
    fn try_from_json(json: &str) -> ScheduleResult<Self> {
        Self::from_json(json).map_err(|e| ScheduleError::invalid(&e.to_string()))
    }
}
