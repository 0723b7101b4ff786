//! Attendance domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One user's attendance record for one calendar day.
///
/// A record is open between clock-in and clock-out; once `clock_out` is
/// set, the day is complete and the record is never touched again.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub user_id: String,
    pub work_date: NaiveDate,
    pub clock_in: NaiveDateTime,
    pub clock_out: Option<NaiveDateTime>,
    pub clock_in_location: Option<String>,
    pub clock_out_location: Option<String>,
}

impl AttendanceRecord {
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }
}

/// Input model for opening a day's attendance record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAttendanceRecord {
    pub user_id: String,
    pub work_date: NaiveDate,
    pub clock_in: NaiveDateTime,
    pub clock_in_location: Option<String>,
}

/// Where a user stands in today's clock-in/clock-out cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttendanceStatus {
    /// No record today; clock-in is the next action.
    PendingClockIn,
    /// Open record; clock-out is the next action.
    PendingClockOut,
    /// Record closed; the day is done.
    Complete,
}

impl AttendanceStatus {
    /// Derives the status from the day's record, if any.
    pub fn derive(record: Option<&AttendanceRecord>) -> Self {
        match record {
            None => AttendanceStatus::PendingClockIn,
            Some(r) if r.is_open() => AttendanceStatus::PendingClockOut,
            Some(_) => AttendanceStatus::Complete,
        }
    }
}
