//! Database models for meetings.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use trueinvest_core::meetings::{Meeting, MeetingStatus};
use trueinvest_core::Error;

/// Database model for meetings
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::meetings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct MeetingDB {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub scheduled_at: NaiveDateTime,
    pub link: Option<String>,
    pub status: String,
    pub created_by: String,
    pub created_at: NaiveDateTime,
}

/// Database model for creating a meeting
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::meetings)]
#[serde(rename_all = "camelCase")]
pub struct NewMeetingDB {
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub scheduled_at: NaiveDateTime,
    pub link: Option<String>,
    pub status: String,
    pub created_by: String,
    pub created_at: NaiveDateTime,
}

// Unknown status text is rejected, not defaulted.
impl TryFrom<MeetingDB> for Meeting {
    type Error = Error;

    fn try_from(db: MeetingDB) -> Result<Self, Self::Error> {
        Ok(Self {
            id: db.id,
            title: db.title,
            description: db.description,
            scheduled_at: db.scheduled_at,
            link: db.link,
            status: db.status.parse::<MeetingStatus>()?,
            created_by: db.created_by,
            created_at: db.created_at,
        })
    }
}
