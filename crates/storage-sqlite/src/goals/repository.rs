use trueinvest_core::goals::{Goal, GoalRepositoryTrait, GoalUpdate, NewGoal};
use trueinvest_core::Result;

use super::model::{GoalDB, NewGoalDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::goal_events;
use crate::schema::goals;
use crate::schema::goals::dsl::*;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct GoalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        GoalRepository { pool, writer }
    }

    fn load_with_filter(&self, active_only: bool) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = goals.into_boxed();
        if active_only {
            query = query.filter(is_active.eq(true));
        }
        let goals_db = query
            .order(created_at.asc())
            .load::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        goals_db.into_iter().map(Goal::try_from).collect()
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn get_by_id(&self, goal_id: &str) -> Result<Goal> {
        let mut conn = get_connection(&self.pool)?;
        let goal_db = goals
            .find(goal_id)
            .first::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Goal::try_from(goal_db)
    }

    fn load_goals(&self) -> Result<Vec<Goal>> {
        self.load_with_filter(false)
    }

    fn load_active_goals(&self) -> Result<Vec<Goal>> {
        self.load_with_filter(true)
    }

    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let mut new_goal_db: NewGoalDB = new_goal.into();
                if new_goal_db.id.is_none() {
                    new_goal_db.id = Some(Uuid::new_v4().to_string());
                }
                new_goal_db.created_at = Utc::now().naive_utc();

                let result_db = diesel::insert_into(goals::table)
                    .values(&new_goal_db)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Goal::try_from(result_db)
            })
            .await
    }

    async fn update_goal(&self, goal_update: GoalUpdate) -> Result<Goal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let goal_id = goal_update.id.clone();
                diesel::update(goals.find(&goal_id))
                    .set((
                        title.eq(goal_update.title),
                        description.eq(goal_update.description),
                        category.eq(goal_update.category),
                        target_value.eq(goal_update.target_value),
                        reward_points.eq(goal_update.reward_points),
                        period.eq(goal_update.period.as_str()),
                        kind.eq(goal_update.kind.as_str()),
                        is_active.eq(goal_update.is_active),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                let result_db = goals
                    .find(&goal_id)
                    .first::<GoalDB>(conn)
                    .map_err(StorageError::from)?;
                Goal::try_from(result_db)
            })
            .await
    }

    /// Removes the goal's events and then the goal itself. Both deletes
    /// run in the writer's transaction, so a failure leaves the catalog
    /// untouched rather than stranding events without their goal.
    async fn delete_goal(&self, goal_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(goal_events::table.filter(goal_events::goal_id.eq(&goal_id)))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Ok(diesel::delete(goals.find(&goal_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
