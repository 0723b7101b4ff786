use trueinvest_core::meetings::{Meeting, MeetingRepositoryTrait, MeetingStatus, NewMeeting};
use trueinvest_core::Result;

use super::model::{MeetingDB, NewMeetingDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::meetings;
use crate::schema::meetings::dsl::*;
use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct MeetingRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl MeetingRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        MeetingRepository { pool, writer }
    }
}

#[async_trait]
impl MeetingRepositoryTrait for MeetingRepository {
    fn get_by_id(&self, meeting_id: &str) -> Result<Meeting> {
        let mut conn = get_connection(&self.pool)?;
        let meeting_db = meetings
            .find(meeting_id)
            .first::<MeetingDB>(&mut conn)
            .map_err(StorageError::from)?;
        Meeting::try_from(meeting_db)
    }

    fn list_upcoming(&self, from: NaiveDateTime) -> Result<Vec<Meeting>> {
        let mut conn = get_connection(&self.pool)?;
        let meetings_db = meetings
            .filter(scheduled_at.ge(from))
            .order(scheduled_at.asc())
            .load::<MeetingDB>(&mut conn)
            .map_err(StorageError::from)?;
        meetings_db.into_iter().map(Meeting::try_from).collect()
    }

    async fn insert(&self, meeting_creator: &str, new_meeting: NewMeeting) -> Result<Meeting> {
        let meeting_creator = meeting_creator.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Meeting> {
                let new_meeting_db = NewMeetingDB {
                    id: Some(Uuid::new_v4().to_string()),
                    title: new_meeting.title,
                    description: new_meeting.description,
                    scheduled_at: new_meeting.scheduled_at,
                    link: new_meeting.link,
                    status: MeetingStatus::Scheduled.as_str().to_string(),
                    created_by: meeting_creator,
                    created_at: Utc::now().naive_utc(),
                };

                let result_db = diesel::insert_into(meetings::table)
                    .values(&new_meeting_db)
                    .returning(MeetingDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Meeting::try_from(result_db)
            })
            .await
    }

    async fn set_status(&self, meeting_id: String, new_status: MeetingStatus) -> Result<Meeting> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Meeting> {
                diesel::update(meetings.find(&meeting_id))
                    .set(status.eq(new_status.as_str()))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                let result_db = meetings
                    .find(&meeting_id)
                    .first::<MeetingDB>(conn)
                    .map_err(StorageError::from)?;
                Meeting::try_from(result_db)
            })
            .await
    }
}
