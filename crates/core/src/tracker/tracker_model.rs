//! Goal event log domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::goals::{Goal, GoalKind};

/// An immutable record of one completion of a goal by a user.
///
/// `points_awarded` snapshots the goal's reward at completion time; it is
/// never re-derived from the goal, so later reward edits do not change
/// what an undo revokes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalEvent {
    pub id: String,
    pub user_id: String,
    pub goal_id: String,
    pub occurred_at: NaiveDateTime,
    pub points_awarded: i32,
}

/// Input model for appending a completion event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoalEvent {
    pub user_id: String,
    pub goal_id: String,
    pub occurred_at: NaiveDateTime,
    pub points_awarded: i32,
}

/// Implicit per-(user, goal) state, derived from the event count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "state")]
pub enum CompletionState {
    /// One-time goal with no completion event.
    Incomplete,
    /// One-time goal with a completion event; only undo remains.
    Completed,
    /// Recurring goal; completion stays available without bound.
    Recurring { completions: u32 },
}

impl CompletionState {
    /// Derives the state from a goal kind and the event count.
    pub fn derive(kind: GoalKind, completions: u32) -> Self {
        match kind {
            GoalKind::OneTime if completions == 0 => CompletionState::Incomplete,
            GoalKind::OneTime => CompletionState::Completed,
            GoalKind::Recurring => CompletionState::Recurring { completions },
        }
    }

    /// Whether the complete transition is allowed from this state.
    pub fn can_complete(&self) -> bool {
        !matches!(self, CompletionState::Completed)
    }

    /// Whether the undo transition is allowed from this state.
    pub fn can_undo(&self) -> bool {
        match self {
            CompletionState::Incomplete => false,
            CompletionState::Completed => true,
            CompletionState::Recurring { completions } => *completions > 0,
        }
    }
}

/// Per-goal progress view for one user: the goal, how often it was
/// completed, and the points those completions earned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal: Goal,
    pub completions: u32,
    pub points_earned: i32,
    pub state: CompletionState,
}
