use chrono::Utc;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use super::tracker_errors::TrackerError;
use super::tracker_model::{CompletionState, GoalEvent, GoalProgress, NewGoalEvent};
use super::tracker_traits::{GoalEventRepositoryTrait, TrackerServiceTrait};
use crate::errors::Result;
use crate::goals::{GoalKind, GoalRepositoryTrait};
use crate::ledger::LedgerServiceTrait;

/// Service driving the goal completion state machine.
///
/// Every transition is two sequential writes: the event-log mutation,
/// then the ledger mutation. There is no atomicity between the two; a
/// failure after the first write leaves the event log and the ledger
/// divergent, and no reconciliation runs afterwards.
pub struct TrackerService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
    event_repo: Arc<dyn GoalEventRepositoryTrait>,
    ledger: Arc<dyn LedgerServiceTrait>,
}

impl TrackerService {
    pub fn new(
        goal_repo: Arc<dyn GoalRepositoryTrait>,
        event_repo: Arc<dyn GoalEventRepositoryTrait>,
        ledger: Arc<dyn LedgerServiceTrait>,
    ) -> Self {
        Self {
            goal_repo,
            event_repo,
            ledger,
        }
    }
}

#[async_trait::async_trait]
impl TrackerServiceTrait for TrackerService {
    /// Marks a goal complete for a user.
    ///
    /// For one-time goals the transition is only allowed from
    /// `Incomplete`; a second completion is rejected outright rather than
    /// left to UI affordance. Recurring goals accept completions without
    /// bound. The awarded points snapshot the goal's current reward.
    async fn complete_goal(&self, user_id: &str, goal_id: &str) -> Result<GoalEvent> {
        let goal = self.goal_repo.get_by_id(goal_id)?;
        if !goal.is_active {
            return Err(TrackerError::GoalInactive(goal_id.to_string()).into());
        }

        if goal.kind == GoalKind::OneTime {
            let completions = self.event_repo.count_for(user_id, goal_id)?;
            if completions > 0 {
                return Err(TrackerError::AlreadyCompleted(goal_id.to_string()).into());
            }
        }

        let event = self
            .event_repo
            .insert(NewGoalEvent {
                user_id: user_id.to_string(),
                goal_id: goal_id.to_string(),
                occurred_at: Utc::now().naive_utc(),
                points_awarded: goal.reward_points,
            })
            .await?;

        debug!(
            "User {} completed goal {} for {} points",
            user_id, goal_id, event.points_awarded
        );
        self.ledger.award(user_id, event.points_awarded).await?;

        Ok(event)
    }

    /// Undoes the most recent completion of a goal for a user.
    ///
    /// The event with the latest timestamp is removed (last-in-first-out)
    /// and exactly its `points_awarded` snapshot is revoked. Returns the
    /// removed event.
    async fn undo_goal(&self, user_id: &str, goal_id: &str) -> Result<GoalEvent> {
        let event = self
            .event_repo
            .latest_for(user_id, goal_id)?
            .ok_or_else(|| TrackerError::NothingToUndo(goal_id.to_string()))?;

        self.event_repo.delete(event.id.clone()).await?;

        debug!(
            "User {} undid goal {} revoking {} points",
            user_id, goal_id, event.points_awarded
        );
        self.ledger.revoke(user_id, event.points_awarded).await?;

        Ok(event)
    }

    /// Builds the per-goal progress view for a user across all active
    /// goals, recomputed from the event log on every read.
    fn progress_for_user(&self, user_id: &str) -> Result<Vec<GoalProgress>> {
        let goals = self.goal_repo.load_active_goals()?;
        let events = self.event_repo.list_for_user(user_id)?;

        let mut per_goal: HashMap<&str, (u32, i32)> = HashMap::new();
        for event in &events {
            let entry = per_goal.entry(event.goal_id.as_str()).or_default();
            entry.0 += 1;
            entry.1 += event.points_awarded;
        }

        Ok(goals
            .into_iter()
            .map(|goal| {
                let (completions, points_earned) =
                    per_goal.get(goal.id.as_str()).copied().unwrap_or((0, 0));
                let state = CompletionState::derive(goal.kind, completions);
                GoalProgress {
                    goal,
                    completions,
                    points_earned,
                    state,
                }
            })
            .collect())
    }
}
