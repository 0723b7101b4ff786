use chrono::{NaiveDate, NaiveDateTime};

use crate::attendance::attendance_model::{
    AttendanceRecord, AttendanceStatus, NewAttendanceRecord,
};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for attendance repository operations.
#[async_trait]
pub trait AttendanceRepositoryTrait: Send + Sync {
    fn find_for_day(&self, user_id: &str, day: NaiveDate) -> Result<Option<AttendanceRecord>>;
    fn list_for_user(&self, user_id: &str) -> Result<Vec<AttendanceRecord>>;
    async fn insert(&self, new_record: NewAttendanceRecord) -> Result<AttendanceRecord>;
    async fn close(
        &self,
        record_id: String,
        clock_out: NaiveDateTime,
        clock_out_location: Option<String>,
    ) -> Result<AttendanceRecord>;
}

/// Trait for the daily attendance workflow.
#[async_trait]
pub trait AttendanceServiceTrait: Send + Sync {
    async fn clock_in(
        &self,
        user_id: &str,
        now: NaiveDateTime,
        location: Option<String>,
    ) -> Result<AttendanceRecord>;
    async fn clock_out(
        &self,
        user_id: &str,
        now: NaiveDateTime,
        location: Option<String>,
    ) -> Result<AttendanceRecord>;
    fn status_for_day(&self, user_id: &str, day: NaiveDate) -> Result<AttendanceStatus>;
    fn history_for_user(&self, user_id: &str) -> Result<Vec<AttendanceRecord>>;
}
