//! Database models for activity records.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use trueinvest_core::activities::{Activity, NewActivity};

/// Database model for activities
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::activities)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ActivityDB {
    pub id: String,
    pub user_id: String,
    pub kind: String,
    pub title: String,
    pub description: Option<String>,
    pub client_name: Option<String>,
    pub client_contact: Option<String>,
    pub occurred_at: NaiveDateTime,
    pub status: Option<String>,
    pub points_earned: Option<i32>,
    pub created_at: NaiveDateTime,
}

/// Database model for logging an activity
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::activities)]
#[serde(rename_all = "camelCase")]
pub struct NewActivityDB {
    pub id: Option<String>,
    pub user_id: String,
    pub kind: String,
    pub title: String,
    pub description: Option<String>,
    pub client_name: Option<String>,
    pub client_contact: Option<String>,
    pub occurred_at: NaiveDateTime,
    pub status: Option<String>,
    pub points_earned: Option<i32>,
    pub created_at: NaiveDateTime,
}

// Conversion to domain models
impl From<ActivityDB> for Activity {
    fn from(db: ActivityDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            kind: db.kind,
            title: db.title,
            description: db.description,
            client_name: db.client_name,
            client_contact: db.client_contact,
            occurred_at: db.occurred_at,
            status: db.status,
            points_earned: db.points_earned,
            created_at: db.created_at,
        }
    }
}

// The insert timestamp is stamped by the repository.
impl From<NewActivity> for NewActivityDB {
    fn from(domain: NewActivity) -> Self {
        Self {
            id: None,
            user_id: domain.user_id,
            kind: domain.kind,
            title: domain.title,
            description: domain.description,
            client_name: domain.client_name,
            client_contact: domain.client_contact,
            occurred_at: domain.occurred_at,
            status: domain.status,
            points_earned: domain.points_earned,
            created_at: NaiveDateTime::default(),
        }
    }
}
