use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by the daily attendance state machine.
#[derive(Error, Debug)]
pub enum AttendanceError {
    /// A record already exists for this user and day.
    #[error("Already clocked in on {0}")]
    AlreadyClockedIn(NaiveDate),

    /// Clock-out was requested without an open record for the day.
    #[error("No open attendance record on {0}")]
    NoOpenRecord(NaiveDate),

    /// The day's record is already closed; nothing more can happen today.
    #[error("Attendance on {0} is already complete")]
    DayComplete(NaiveDate),
}
