use chrono::{NaiveDate, NaiveDateTime};
use log::debug;
use std::sync::Arc;

use super::attendance_errors::AttendanceError;
use super::attendance_model::{AttendanceRecord, AttendanceStatus, NewAttendanceRecord};
use super::attendance_traits::{AttendanceRepositoryTrait, AttendanceServiceTrait};
use crate::errors::Result;

/// Service driving the one-record-per-day attendance cycle.
pub struct AttendanceService {
    attendance_repo: Arc<dyn AttendanceRepositoryTrait>,
}

impl AttendanceService {
    pub fn new(attendance_repo: Arc<dyn AttendanceRepositoryTrait>) -> Self {
        Self { attendance_repo }
    }
}

#[async_trait::async_trait]
impl AttendanceServiceTrait for AttendanceService {
    /// Opens today's record. Rejected when any record for the day
    /// already exists, open or closed.
    async fn clock_in(
        &self,
        user_id: &str,
        now: NaiveDateTime,
        location: Option<String>,
    ) -> Result<AttendanceRecord> {
        let day = now.date();
        if self.attendance_repo.find_for_day(user_id, day)?.is_some() {
            return Err(AttendanceError::AlreadyClockedIn(day).into());
        }

        debug!("User {} clocking in on {}", user_id, day);
        self.attendance_repo
            .insert(NewAttendanceRecord {
                user_id: user_id.to_string(),
                work_date: day,
                clock_in: now,
                clock_in_location: location,
            })
            .await
    }

    /// Closes today's open record. A closed day is terminal.
    async fn clock_out(
        &self,
        user_id: &str,
        now: NaiveDateTime,
        location: Option<String>,
    ) -> Result<AttendanceRecord> {
        let day = now.date();
        let record = self
            .attendance_repo
            .find_for_day(user_id, day)?
            .ok_or(AttendanceError::NoOpenRecord(day))?;

        if !record.is_open() {
            return Err(AttendanceError::DayComplete(day).into());
        }

        debug!("User {} clocking out on {}", user_id, day);
        self.attendance_repo.close(record.id, now, location).await
    }

    fn status_for_day(&self, user_id: &str, day: NaiveDate) -> Result<AttendanceStatus> {
        let record = self.attendance_repo.find_for_day(user_id, day)?;
        Ok(AttendanceStatus::derive(record.as_ref()))
    }

    fn history_for_user(&self, user_id: &str) -> Result<Vec<AttendanceRecord>> {
        self.attendance_repo.list_for_user(user_id)
    }
}
