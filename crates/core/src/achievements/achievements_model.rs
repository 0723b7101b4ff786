//! Achievement domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An admin-defined achievement badge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    /// Points granted when the achievement unlocks, if any.
    pub reward_points: Option<i32>,
    /// Free-text requirement tag, e.g. "sales" or "streak".
    pub requirement_kind: Option<String>,
    pub requirement_value: Option<i32>,
    pub created_at: NaiveDateTime,
}

/// One user's unlock of an achievement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserAchievement {
    pub id: String,
    pub user_id: String,
    pub achievement_id: String,
    pub unlocked_at: NaiveDateTime,
}
