use trueinvest_core::maintenance::MaintenanceRepositoryTrait;
use trueinvest_core::Result;

use crate::db::WriteHandle;
use crate::errors::StorageError;
use crate::schema::{
    activities, attendance_records, goal_events, profiles, sales, user_achievements, user_roles,
};
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

pub struct MaintenanceRepository {
    writer: WriteHandle,
}

impl MaintenanceRepository {
    pub fn new(writer: WriteHandle) -> Self {
        MaintenanceRepository { writer }
    }
}

/// Deletes every dependent row of the user. Shared by reset and delete;
/// must run inside the writer's transaction.
fn delete_dependents(conn: &mut SqliteConnection, target: &str) -> Result<()> {
    diesel::delete(goal_events::table.filter(goal_events::user_id.eq(target)))
        .execute(conn)
        .map_err(StorageError::from)?;
    diesel::delete(user_achievements::table.filter(user_achievements::user_id.eq(target)))
        .execute(conn)
        .map_err(StorageError::from)?;
    diesel::delete(attendance_records::table.filter(attendance_records::user_id.eq(target)))
        .execute(conn)
        .map_err(StorageError::from)?;
    diesel::delete(activities::table.filter(activities::user_id.eq(target)))
        .execute(conn)
        .map_err(StorageError::from)?;
    diesel::delete(sales::table.filter(sales::user_id.eq(target)))
        .execute(conn)
        .map_err(StorageError::from)?;
    Ok(())
}

#[async_trait]
impl MaintenanceRepositoryTrait for MaintenanceRepository {
    async fn reset_user_data(&self, user_id: &str) -> Result<()> {
        let target = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                delete_dependents(conn, &target)?;

                diesel::update(profiles::table.find(&target))
                    .set((
                        profiles::points_total.eq(0),
                        profiles::updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn delete_user(&self, user_id: &str) -> Result<()> {
        let target = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                delete_dependents(conn, &target)?;

                diesel::delete(user_roles::table.filter(user_roles::user_id.eq(&target)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                diesel::delete(profiles::table.find(&target))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }
}
