use log::debug;
use std::sync::Arc;

use super::goals_model::{Goal, GoalUpdate, NewGoal};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::errors::Result;

/// Service for the admin-managed goal catalog.
pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(goal_repo: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService { goal_repo }
    }
}

#[async_trait::async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goal(&self, goal_id: &str) -> Result<Goal> {
        self.goal_repo.get_by_id(goal_id)
    }

    fn get_goals(&self) -> Result<Vec<Goal>> {
        self.goal_repo.load_goals()
    }

    /// Lists goals brokers can currently complete.
    fn get_active_goals(&self) -> Result<Vec<Goal>> {
        self.goal_repo.load_active_goals()
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;
        debug!("Creating goal '{}'", new_goal.title);
        self.goal_repo.insert_new_goal(new_goal).await
    }

    async fn update_goal(&self, goal_update: GoalUpdate) -> Result<Goal> {
        goal_update.validate()?;
        self.goal_repo.update_goal(goal_update).await
    }

    /// Deletes a goal together with its event log entries.
    async fn delete_goal(&self, goal_id: String) -> Result<usize> {
        debug!("Deleting goal {} and its events", goal_id);
        self.goal_repo.delete_goal(goal_id).await
    }
}
