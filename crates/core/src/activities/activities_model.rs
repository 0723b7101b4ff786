//! Activity domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// A logged broker activity (visit, call, showing, ...).
///
/// `points_earned` is an informational snapshot; activities do not feed
/// the points ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub user_id: String,
    /// Free-text kind tag: visit, call, showing, follow-up.
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

/// Input model for logging an activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    pub user_id: String,
    pub kind: String,
    pub title: String,
    pub description: Option<String>,
    pub client_name: Option<String>,
    pub client_contact: Option<String>,
    pub occurred_at: NaiveDateTime,
    pub status: Option<String>,
    pub points_earned: Option<i32>,
}

impl NewActivity {
    /// Validates the activity data before any write.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "title".to_string(),
            )));
        }
        if self.kind.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "kind".to_string(),
            )));
        }
        Ok(())
    }
}
