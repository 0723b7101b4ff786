//! Notification domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A notification delivered to one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    /// Free-text kind tag, e.g. "meeting_scheduled".
    pub kind: String,
    pub title: String,
    pub message: Option<String>,
    /// Id of the record this notification refers to, when any.
    pub reference_id: Option<String>,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    pub user_id: String,
    pub kind: String,
    pub title: String,
    pub message: Option<String>,
    pub reference_id: Option<String>,
}
