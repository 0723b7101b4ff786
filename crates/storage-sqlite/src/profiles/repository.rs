use trueinvest_core::profiles::{NewProfile, Profile, ProfileRepositoryTrait, ProfileUpdate};
use trueinvest_core::Result;

use super::model::{NewProfileDB, ProfileDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::profiles;
use crate::schema::profiles::dsl::*;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct ProfileRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ProfileRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ProfileRepository { pool, writer }
    }
}

#[async_trait]
impl ProfileRepositoryTrait for ProfileRepository {
    fn get_by_id(&self, profile_id: &str) -> Result<Profile> {
        let mut conn = get_connection(&self.pool)?;
        let profile_db = profiles
            .find(profile_id)
            .first::<ProfileDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Profile::from(profile_db))
    }

    fn list(&self) -> Result<Vec<Profile>> {
        let mut conn = get_connection(&self.pool)?;
        let profiles_db = profiles
            .order(name.asc())
            .load::<ProfileDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(profiles_db.into_iter().map(Profile::from).collect())
    }

    fn list_by_points_desc(&self) -> Result<Vec<Profile>> {
        let mut conn = get_connection(&self.pool)?;
        // Ties fall back to id order so the ranking stays stable
        // between reads.
        let profiles_db = profiles
            .order((points_total.desc(), id.asc()))
            .load::<ProfileDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(profiles_db.into_iter().map(Profile::from).collect())
    }

    async fn create(&self, new_profile: NewProfile) -> Result<Profile> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Profile> {
                let now = Utc::now().naive_utc();
                let new_profile_db = NewProfileDB {
                    id: Some(
                        new_profile
                            .id
                            .unwrap_or_else(|| Uuid::new_v4().to_string()),
                    ),
                    name: new_profile.name,
                    email: new_profile.email,
                    phone: new_profile.phone,
                    photo_url: new_profile.photo_url,
                    points_total: 0,
                    created_at: now,
                    updated_at: now,
                };

                let result_db = diesel::insert_into(profiles::table)
                    .values(&new_profile_db)
                    .returning(ProfileDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Profile::from(result_db))
            })
            .await
    }

    async fn update(&self, profile_update: ProfileUpdate) -> Result<Profile> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Profile> {
                let profile_id = profile_update.id.clone();
                diesel::update(profiles.find(&profile_id))
                    .set((
                        name.eq(profile_update.name),
                        email.eq(profile_update.email),
                        phone.eq(profile_update.phone),
                        photo_url.eq(profile_update.photo_url),
                        updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                let result_db = profiles
                    .find(&profile_id)
                    .first::<ProfileDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Profile::from(result_db))
            })
            .await
    }

    fn get_points_total(&self, profile_id: &str) -> Result<i32> {
        let mut conn = get_connection(&self.pool)?;
        let points = profiles
            .find(profile_id)
            .select(points_total)
            .first::<i32>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(points)
    }

    async fn set_points_total(&self, profile_id: &str, points: i32) -> Result<()> {
        let profile_id = profile_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                diesel::update(profiles.find(&profile_id))
                    .set((
                        points_total.eq(points),
                        updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }
}
