use crate::errors::Result;
use crate::tracker::tracker_model::{GoalEvent, GoalProgress, NewGoalEvent};
use async_trait::async_trait;

/// Trait for goal event log repository operations.
///
/// The log is append/delete only; events are never updated in place.
#[async_trait]
pub trait GoalEventRepositoryTrait: Send + Sync {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<GoalEvent>>;
    fn list_for_goal(&self, goal_id: &str) -> Result<Vec<GoalEvent>>;
    fn count_for(&self, user_id: &str, goal_id: &str) -> Result<i64>;
    /// The event with the latest `occurred_at` for this (user, goal)
    /// pair, or `None` when the pair has no events.
    fn latest_for(&self, user_id: &str, goal_id: &str) -> Result<Option<GoalEvent>>;
    async fn insert(&self, new_event: NewGoalEvent) -> Result<GoalEvent>;
    async fn delete(&self, event_id: String) -> Result<usize>;
}

/// Trait for the completion state machine.
#[async_trait]
pub trait TrackerServiceTrait: Send + Sync {
    async fn complete_goal(&self, user_id: &str, goal_id: &str) -> Result<GoalEvent>;
    async fn undo_goal(&self, user_id: &str, goal_id: &str) -> Result<GoalEvent>;
    fn progress_for_user(&self, user_id: &str) -> Result<Vec<GoalProgress>>;
}
