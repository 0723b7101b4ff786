use trueinvest_core::roles::{AppRole, RoleGrant, RoleRepositoryTrait};
use trueinvest_core::Result;

use super::model::{NewRoleGrantDB, RoleGrantDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::user_roles;
use crate::schema::user_roles::dsl::*;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct RoleRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl RoleRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        RoleRepository { pool, writer }
    }
}

#[async_trait]
impl RoleRepositoryTrait for RoleRepository {
    fn has_role(&self, for_user: &str, wanted: AppRole) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let count = user_roles
            .filter(user_id.eq(for_user))
            .filter(role.eq(wanted.as_str()))
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(count > 0)
    }

    fn list_for_user(&self, for_user: &str) -> Result<Vec<RoleGrant>> {
        let mut conn = get_connection(&self.pool)?;
        let grants_db = user_roles
            .filter(user_id.eq(for_user))
            .load::<RoleGrantDB>(&mut conn)
            .map_err(StorageError::from)?;
        grants_db.into_iter().map(RoleGrant::try_from).collect()
    }

    async fn grant(&self, for_user: &str, granted: AppRole) -> Result<RoleGrant> {
        let for_user = for_user.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<RoleGrant> {
                let new_grant = NewRoleGrantDB {
                    id: Some(Uuid::new_v4().to_string()),
                    user_id: for_user,
                    role: granted.as_str().to_string(),
                    created_at: Utc::now().naive_utc(),
                };

                let result_db = diesel::insert_into(user_roles::table)
                    .values(&new_grant)
                    .returning(RoleGrantDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                RoleGrant::try_from(result_db)
            })
            .await
    }

    async fn revoke(&self, for_user: &str, revoked: AppRole) -> Result<usize> {
        let for_user = for_user.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    user_roles
                        .filter(user_id.eq(&for_user))
                        .filter(role.eq(revoked.as_str())),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
