//! Database models for goals.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use trueinvest_core::goals::{Goal, GoalKind, GoalPeriod, NewGoal};
use trueinvest_core::Error;

/// Database model for goals
#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GoalDB {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub target_value: i32,
    pub reward_points: i32,
    pub period: String,
    pub kind: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// Database model for creating a new goal
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[serde(rename_all = "camelCase")]
pub struct NewGoalDB {
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub target_value: i32,
    pub reward_points: i32,
    pub period: String,
    pub kind: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

// Conversion to domain models. The kind/period columns are free text at
// the storage level; rows that fail to parse are rejected rather than
// coerced.
impl TryFrom<GoalDB> for Goal {
    type Error = Error;

    fn try_from(db: GoalDB) -> Result<Self, Self::Error> {
        Ok(Self {
            id: db.id,
            title: db.title,
            description: db.description,
            category: db.category,
            target_value: db.target_value,
            reward_points: db.reward_points,
            period: db.period.parse::<GoalPeriod>()?,
            kind: db.kind.parse::<GoalKind>()?,
            is_active: db.is_active,
            created_at: db.created_at,
        })
    }
}

// The insert timestamp is stamped by the repository.
impl From<NewGoal> for NewGoalDB {
    fn from(domain: NewGoal) -> Self {
        Self {
            id: domain.id,
            title: domain.title,
            description: domain.description,
            category: domain.category,
            target_value: domain.target_value,
            reward_points: domain.reward_points,
            period: domain.period.as_str().to_string(),
            kind: domain.kind.as_str().to_string(),
            is_active: domain.is_active,
            created_at: NaiveDateTime::default(),
        }
    }
}
