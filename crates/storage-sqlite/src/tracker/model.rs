//! Database models for goal events.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::goals::GoalDB;
use crate::profiles::ProfileDB;
use trueinvest_core::tracker::{GoalEvent, NewGoalEvent};

/// Database model for goal events
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
#[diesel(belongs_to(GoalDB, foreign_key = goal_id))]
#[diesel(belongs_to(ProfileDB, foreign_key = user_id))]
#[diesel(table_name = crate::schema::goal_events)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GoalEventDB {
    pub id: String,
    pub user_id: String,
    pub goal_id: String,
    pub occurred_at: NaiveDateTime,
    pub points_awarded: i32,
}

/// Database model for appending a goal event
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::goal_events)]
#[serde(rename_all = "camelCase")]
pub struct NewGoalEventDB {
    pub id: Option<String>,
    pub user_id: String,
    pub goal_id: String,
    pub occurred_at: NaiveDateTime,
    pub points_awarded: i32,
}

// Conversion to domain models
impl From<GoalEventDB> for GoalEvent {
    fn from(db: GoalEventDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            goal_id: db.goal_id,
            occurred_at: db.occurred_at,
            points_awarded: db.points_awarded,
        }
    }
}

impl From<NewGoalEvent> for NewGoalEventDB {
    fn from(domain: NewGoalEvent) -> Self {
        Self {
            id: None,
            user_id: domain.user_id,
            goal_id: domain.goal_id,
            occurred_at: domain.occurred_at,
            points_awarded: domain.points_awarded,
        }
    }
}
