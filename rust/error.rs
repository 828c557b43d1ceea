//! Error types returned by the calendar and schedule calculations.

use thiserror::Error;

/// Failure of a single calendar or schedule calculation.
///
/// Every error is local to the call that raised it. No calculation in this crate has a
/// transient failure mode, so nothing is retried.
///
/// # Examples
/// ```
/// use esmlib::ScheduleError;
///
/// let err = ScheduleError::InvalidArgument("`days` must be non-negative.".to_string());
/// assert_eq!(format!("{}", err), "Invalid argument: `days` must be non-negative.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// An input violated the contract of the operation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Date arithmetic left the representable calendar range.
    #[error("Out of range: {0}")]
    OutOfRange(String),
}

/// Convenience alias used throughout the crate.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

impl ScheduleError {
    pub(crate) fn invalid(msg: &str) -> Self {
        tracing::warn!(reason = msg, "rejected calendar input");
        ScheduleError::InvalidArgument(msg.to_string())
    }

    pub(crate) fn out_of_range(msg: &str) -> Self {
        ScheduleError::OutOfRange(msg.to_string())
    }
}
