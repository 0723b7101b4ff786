use trueinvest_core::achievements::{
    Achievement, AchievementRepositoryTrait, UserAchievement,
};
use trueinvest_core::Result;

use super::model::{AchievementDB, NewUserAchievementDB, UserAchievementDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::achievements::dsl as achievements_dsl;
use crate::schema::user_achievements;
use crate::schema::user_achievements::dsl as unlocks_dsl;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct AchievementRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AchievementRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        AchievementRepository { pool, writer }
    }
}

#[async_trait]
impl AchievementRepositoryTrait for AchievementRepository {
    fn get_by_id(&self, achievement_id: &str) -> Result<Achievement> {
        let mut conn = get_connection(&self.pool)?;
        let achievement_db = achievements_dsl::achievements
            .find(achievement_id)
            .first::<AchievementDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Achievement::from(achievement_db))
    }

    fn list_catalog(&self) -> Result<Vec<Achievement>> {
        let mut conn = get_connection(&self.pool)?;
        let achievements_db = achievements_dsl::achievements
            .order(achievements_dsl::created_at.asc())
            .load::<AchievementDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(achievements_db.into_iter().map(Achievement::from).collect())
    }

    fn list_unlocked_for_user(&self, for_user: &str) -> Result<Vec<UserAchievement>> {
        let mut conn = get_connection(&self.pool)?;
        let unlocks_db = unlocks_dsl::user_achievements
            .filter(unlocks_dsl::user_id.eq(for_user))
            .order(unlocks_dsl::unlocked_at.desc())
            .load::<UserAchievementDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(unlocks_db.into_iter().map(UserAchievement::from).collect())
    }

    fn is_unlocked(&self, for_user: &str, for_achievement: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let count = unlocks_dsl::user_achievements
            .filter(unlocks_dsl::user_id.eq(for_user))
            .filter(unlocks_dsl::achievement_id.eq(for_achievement))
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(count > 0)
    }

    async fn insert_unlock(
        &self,
        for_user: &str,
        for_achievement: &str,
    ) -> Result<UserAchievement> {
        let for_user = for_user.to_string();
        let for_achievement = for_achievement.to_string();
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<UserAchievement> {
                    let new_unlock = NewUserAchievementDB {
                        id: Some(Uuid::new_v4().to_string()),
                        user_id: for_user,
                        achievement_id: for_achievement,
                        unlocked_at: Utc::now().naive_utc(),
                    };

                    let result_db = diesel::insert_into(user_achievements::table)
                        .values(&new_unlock)
                        .returning(UserAchievementDB::as_returning())
                        .get_result(conn)
                        .map_err(StorageError::from)?;
                    Ok(UserAchievement::from(result_db))
                },
            )
            .await
    }
}
