use chrono::{NaiveDateTime, Utc};
use log::debug;
use std::sync::Arc;

use super::meetings_model::{Meeting, MeetingStatus, NewMeeting};
use super::meetings_traits::{MeetingRepositoryTrait, MeetingServiceTrait};
use crate::auth::Session;
use crate::errors::Result;
use crate::notifications::{NewNotification, NotificationServiceTrait};
use crate::profiles::ProfileRepositoryTrait;

const MEETING_SCHEDULED_KIND: &str = "meeting_scheduled";
const MEETING_CANCELLED_KIND: &str = "meeting_cancelled";

/// Service for admin-managed meetings.
///
/// Scheduling and cancelling fan one notification out to every profile.
/// The fan-out is sequential and best-effort: a failure partway leaves
/// the notifications already written in place and surfaces the error.
pub struct MeetingService {
    meeting_repo: Arc<dyn MeetingRepositoryTrait>,
    profile_repo: Arc<dyn ProfileRepositoryTrait>,
    notifications: Arc<dyn NotificationServiceTrait>,
}

impl MeetingService {
    pub fn new(
        meeting_repo: Arc<dyn MeetingRepositoryTrait>,
        profile_repo: Arc<dyn ProfileRepositoryTrait>,
        notifications: Arc<dyn NotificationServiceTrait>,
    ) -> Self {
        Self {
            meeting_repo,
            profile_repo,
            notifications,
        }
    }

    async fn notify_everyone(
        &self,
        kind: &str,
        title: String,
        message: Option<String>,
        reference_id: &str,
    ) -> Result<()> {
        for profile in self.profile_repo.list()? {
            self.notifications
                .notify(NewNotification {
                    user_id: profile.id,
                    kind: kind.to_string(),
                    title: title.clone(),
                    message: message.clone(),
                    reference_id: Some(reference_id.to_string()),
                })
                .await?;
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl MeetingServiceTrait for MeetingService {
    fn get_meeting(&self, meeting_id: &str) -> Result<Meeting> {
        self.meeting_repo.get_by_id(meeting_id)
    }

    fn upcoming_meetings(&self, from: NaiveDateTime) -> Result<Vec<Meeting>> {
        self.meeting_repo.list_upcoming(from)
    }

    async fn schedule_meeting(
        &self,
        session: &Session,
        new_meeting: NewMeeting,
    ) -> Result<Meeting> {
        session.require_admin(Utc::now().naive_utc())?;
        new_meeting.validate()?;

        let meeting = self
            .meeting_repo
            .insert(&session.user_id, new_meeting)
            .await?;
        debug!("Scheduled meeting '{}' ({})", meeting.title, meeting.id);

        self.notify_everyone(
            MEETING_SCHEDULED_KIND,
            format!("New meeting: {}", meeting.title),
            meeting.description.clone(),
            &meeting.id,
        )
        .await?;

        Ok(meeting)
    }

    async fn cancel_meeting(&self, session: &Session, meeting_id: String) -> Result<Meeting> {
        session.require_admin(Utc::now().naive_utc())?;

        let meeting = self
            .meeting_repo
            .set_status(meeting_id, MeetingStatus::Cancelled)
            .await?;
        debug!("Cancelled meeting '{}' ({})", meeting.title, meeting.id);

        self.notify_everyone(
            MEETING_CANCELLED_KIND,
            format!("Meeting cancelled: {}", meeting.title),
            None,
            &meeting.id,
        )
        .await?;

        Ok(meeting)
    }
}
