//! Database models for notifications.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use trueinvest_core::notifications::{NewNotification, Notification};

/// Database model for notifications
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::notifications)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct NotificationDB {
    pub id: String,
    pub user_id: String,
    pub kind: String,
    pub title: String,
    pub message: Option<String>,
    pub reference_id: Option<String>,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
}

/// Database model for creating a notification
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::notifications)]
#[serde(rename_all = "camelCase")]
pub struct NewNotificationDB {
    pub id: Option<String>,
    pub user_id: String,
    pub kind: String,
    pub title: String,
    pub message: Option<String>,
    pub reference_id: Option<String>,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
}

// Conversion to domain models
impl From<NotificationDB> for Notification {
    fn from(db: NotificationDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            kind: db.kind,
            title: db.title,
            message: db.message,
            reference_id: db.reference_id,
            is_read: db.is_read,
            created_at: db.created_at,
        }
    }
}

// The insert timestamp is stamped by the repository.
impl From<NewNotification> for NewNotificationDB {
    fn from(domain: NewNotification) -> Self {
        Self {
            id: None,
            user_id: domain.user_id,
            kind: domain.kind,
            title: domain.title,
            message: domain.message,
            reference_id: domain.reference_id,
            is_read: false,
            created_at: NaiveDateTime::default(),
        }
    }
}
