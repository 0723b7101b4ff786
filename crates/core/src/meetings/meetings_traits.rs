use chrono::NaiveDateTime;

use crate::auth::Session;
use crate::errors::Result;
use crate::meetings::meetings_model::{Meeting, MeetingStatus, NewMeeting};
use async_trait::async_trait;

/// Trait for meeting repository operations.
#[async_trait]
pub trait MeetingRepositoryTrait: Send + Sync {
    fn get_by_id(&self, meeting_id: &str) -> Result<Meeting>;
    /// Meetings scheduled at or after `from`, soonest first.
    fn list_upcoming(&self, from: NaiveDateTime) -> Result<Vec<Meeting>>;
    async fn insert(&self, created_by: &str, new_meeting: NewMeeting) -> Result<Meeting>;
    async fn set_status(&self, meeting_id: String, status: MeetingStatus) -> Result<Meeting>;
}

/// Trait for meeting service operations.
#[async_trait]
pub trait MeetingServiceTrait: Send + Sync {
    fn get_meeting(&self, meeting_id: &str) -> Result<Meeting>;
    fn upcoming_meetings(&self, from: NaiveDateTime) -> Result<Vec<Meeting>>;
    async fn schedule_meeting(&self, session: &Session, new_meeting: NewMeeting)
        -> Result<Meeting>;
    async fn cancel_meeting(&self, session: &Session, meeting_id: String) -> Result<Meeting>;
}
