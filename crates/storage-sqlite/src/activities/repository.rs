use trueinvest_core::activities::{Activity, ActivityRepositoryTrait, NewActivity};
use trueinvest_core::Result;

use super::model::{ActivityDB, NewActivityDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::activities;
use crate::schema::activities::dsl::*;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct ActivityRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ActivityRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ActivityRepository { pool, writer }
    }
}

#[async_trait]
impl ActivityRepositoryTrait for ActivityRepository {
    fn list_for_user(&self, for_user: &str) -> Result<Vec<Activity>> {
        let mut conn = get_connection(&self.pool)?;
        let activities_db = activities
            .filter(user_id.eq(for_user))
            .order(occurred_at.desc())
            .load::<ActivityDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(activities_db.into_iter().map(Activity::from).collect())
    }

    async fn insert(&self, new_activity: NewActivity) -> Result<Activity> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Activity> {
                let mut new_activity_db: NewActivityDB = new_activity.into();
                new_activity_db.id = Some(Uuid::new_v4().to_string());
                new_activity_db.created_at = Utc::now().naive_utc();

                let result_db = diesel::insert_into(activities::table)
                    .values(&new_activity_db)
                    .returning(ActivityDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Activity::from(result_db))
            })
            .await
    }

    async fn delete(&self, activity_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(activities.find(&activity_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
