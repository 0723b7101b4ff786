//! Database models for achievements.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::profiles::ProfileDB;
use trueinvest_core::achievements::{Achievement, UserAchievement};

/// Database model for the achievement catalog
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::achievements)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AchievementDB {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub reward_points: Option<i32>,
    pub requirement_kind: Option<String>,
    pub requirement_value: Option<i32>,
    pub created_at: NaiveDateTime,
}

/// Database model for unlock rows
#[derive(
    Queryable,
    Identifiable,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(AchievementDB, foreign_key = achievement_id))]
#[diesel(belongs_to(ProfileDB, foreign_key = user_id))]
#[diesel(table_name = crate::schema::user_achievements)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct UserAchievementDB {
    pub id: String,
    pub user_id: String,
    pub achievement_id: String,
    pub unlocked_at: NaiveDateTime,
}

/// Database model for creating an unlock row
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::user_achievements)]
#[serde(rename_all = "camelCase")]
pub struct NewUserAchievementDB {
    pub id: Option<String>,
    pub user_id: String,
    pub achievement_id: String,
    pub unlocked_at: NaiveDateTime,
}

// Conversion to domain models
impl From<AchievementDB> for Achievement {
    fn from(db: AchievementDB) -> Self {
        Self {
            id: db.id,
            title: db.title,
            description: db.description,
            icon: db.icon,
            reward_points: db.reward_points,
            requirement_kind: db.requirement_kind,
            requirement_value: db.requirement_value,
            created_at: db.created_at,
        }
    }
}

impl From<UserAchievementDB> for UserAchievement {
    fn from(db: UserAchievementDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            achievement_id: db.achievement_id,
            unlocked_at: db.unlocked_at,
        }
    }
}
