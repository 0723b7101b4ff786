use trueinvest_core::notifications::{
    NewNotification, Notification, NotificationRepositoryTrait,
};
use trueinvest_core::Result;

use super::model::{NewNotificationDB, NotificationDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::notifications;
use crate::schema::notifications::dsl::*;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct NotificationRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl NotificationRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        NotificationRepository { pool, writer }
    }
}

#[async_trait]
impl NotificationRepositoryTrait for NotificationRepository {
    fn list_for_user(&self, for_user: &str) -> Result<Vec<Notification>> {
        let mut conn = get_connection(&self.pool)?;
        let notifications_db = notifications
            .filter(user_id.eq(for_user))
            .order(created_at.desc())
            .load::<NotificationDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(notifications_db
            .into_iter()
            .map(Notification::from)
            .collect())
    }

    fn unread_count(&self, for_user: &str) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        let count = notifications
            .filter(user_id.eq(for_user))
            .filter(is_read.eq(false))
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(count)
    }

    async fn insert(&self, new_notification: NewNotification) -> Result<Notification> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Notification> {
                let mut new_notification_db: NewNotificationDB = new_notification.into();
                new_notification_db.id = Some(Uuid::new_v4().to_string());
                new_notification_db.created_at = Utc::now().naive_utc();

                let result_db = diesel::insert_into(notifications::table)
                    .values(&new_notification_db)
                    .returning(NotificationDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Notification::from(result_db))
            })
            .await
    }

    async fn mark_read(&self, notification_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::update(notifications.find(&notification_id))
                    .set(is_read.eq(true))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
