use trueinvest_core::tracker::{GoalEvent, GoalEventRepositoryTrait, NewGoalEvent};
use trueinvest_core::Result;

use super::model::{GoalEventDB, NewGoalEventDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::goal_events;
use crate::schema::goal_events::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct GoalEventRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GoalEventRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        GoalEventRepository { pool, writer }
    }
}

#[async_trait]
impl GoalEventRepositoryTrait for GoalEventRepository {
    fn list_for_user(&self, for_user: &str) -> Result<Vec<GoalEvent>> {
        let mut conn = get_connection(&self.pool)?;
        let events_db = goal_events
            .filter(user_id.eq(for_user))
            .order(occurred_at.asc())
            .load::<GoalEventDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(events_db.into_iter().map(GoalEvent::from).collect())
    }

    fn list_for_goal(&self, for_goal: &str) -> Result<Vec<GoalEvent>> {
        let mut conn = get_connection(&self.pool)?;
        let events_db = goal_events
            .filter(goal_id.eq(for_goal))
            .order(occurred_at.asc())
            .load::<GoalEventDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(events_db.into_iter().map(GoalEvent::from).collect())
    }

    fn count_for(&self, for_user: &str, for_goal: &str) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        let count = goal_events
            .filter(user_id.eq(for_user))
            .filter(goal_id.eq(for_goal))
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(count)
    }

    fn latest_for(&self, for_user: &str, for_goal: &str) -> Result<Option<GoalEvent>> {
        let mut conn = get_connection(&self.pool)?;
        // Id order breaks same-instant ties deterministically.
        let event_db = goal_events
            .filter(user_id.eq(for_user))
            .filter(goal_id.eq(for_goal))
            .order((occurred_at.desc(), id.desc()))
            .first::<GoalEventDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(event_db.map(GoalEvent::from))
    }

    async fn insert(&self, new_event: NewGoalEvent) -> Result<GoalEvent> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<GoalEvent> {
                let mut new_event_db: NewGoalEventDB = new_event.into();
                new_event_db.id = Some(Uuid::new_v4().to_string());

                let result_db = diesel::insert_into(goal_events::table)
                    .values(&new_event_db)
                    .returning(GoalEventDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(GoalEvent::from(result_db))
            })
            .await
    }

    async fn delete(&self, event_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(goal_events.find(&event_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
