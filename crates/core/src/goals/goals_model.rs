//! Goal catalog domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_GOAL_DESCRIPTION_LEN, MAX_GOAL_TITLE_LEN};
use crate::{errors::ValidationError, Error, Result};

/// Whether a goal can be completed once or repeatedly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalKind {
    OneTime,
    Recurring,
}

impl GoalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalKind::OneTime => "one-time",
            GoalKind::Recurring => "recurring",
        }
    }
}

impl fmt::Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "one-time" => Ok(GoalKind::OneTime),
            "recurring" => Ok(GoalKind::Recurring),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown goal kind '{}'",
                other
            )))),
        }
    }
}

/// Reporting period a goal belongs to. Informational only: nothing
/// schedules or resets goals on period boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalPeriod {
    Daily,
    Weekly,
    #[default]
    Monthly,
}

impl GoalPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalPeriod::Daily => "daily",
            GoalPeriod::Weekly => "weekly",
            GoalPeriod::Monthly => "monthly",
        }
    }
}

impl fmt::Display for GoalPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalPeriod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "daily" => Ok(GoalPeriod::Daily),
            "weekly" => Ok(GoalPeriod::Weekly),
            "monthly" => Ok(GoalPeriod::Monthly),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown goal period '{}'",
                other
            )))),
        }
    }
}

/// Domain model representing an admin-defined goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// Free-text type tag: sales, meetings, visits, leads, points.
    pub category: String,
    pub target_value: i32,
    pub reward_points: i32,
    pub period: GoalPeriod,
    pub kind: GoalKind,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub target_value: i32,
    pub reward_points: i32,
    pub period: GoalPeriod,
    pub kind: GoalKind,
    pub is_active: bool,
}

impl NewGoal {
    /// Validates the new goal data before any write.
    pub fn validate(&self) -> Result<()> {
        validate_goal_fields(
            &self.title,
            self.description.as_deref(),
            self.target_value,
            self.reward_points,
        )
    }
}

/// Input model for updating an existing goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub target_value: i32,
    pub reward_points: i32,
    pub period: GoalPeriod,
    pub kind: GoalKind,
    pub is_active: bool,
}

impl GoalUpdate {
    /// Validates the goal update data before any write.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        validate_goal_fields(
            &self.title,
            self.description.as_deref(),
            self.target_value,
            self.reward_points,
        )
    }
}

fn validate_goal_fields(
    title: &str,
    description: Option<&str>,
    target_value: i32,
    reward_points: i32,
) -> Result<()> {
    if title.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "title".to_string(),
        )));
    }
    if title.chars().count() > MAX_GOAL_TITLE_LEN {
        return Err(Error::Validation(ValidationError::TooLong {
            field: "title",
            max: MAX_GOAL_TITLE_LEN,
        }));
    }
    if let Some(description) = description {
        if description.chars().count() > MAX_GOAL_DESCRIPTION_LEN {
            return Err(Error::Validation(ValidationError::TooLong {
                field: "description",
                max: MAX_GOAL_DESCRIPTION_LEN,
            }));
        }
    }
    if target_value < 1 {
        return Err(Error::Validation(ValidationError::NotPositive(
            "targetValue",
        )));
    }
    if reward_points < 1 {
        return Err(Error::Validation(ValidationError::NotPositive(
            "rewardPoints",
        )));
    }
    Ok(())
}
