//! Database models for role grants.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use trueinvest_core::roles::{AppRole, RoleGrant};
use trueinvest_core::Error;

/// Database model for role grants
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::user_roles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct RoleGrantDB {
    pub id: String,
    pub user_id: String,
    pub role: String,
    pub created_at: NaiveDateTime,
}

/// Database model for creating a role grant
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::user_roles)]
#[serde(rename_all = "camelCase")]
pub struct NewRoleGrantDB {
    pub id: Option<String>,
    pub user_id: String,
    pub role: String,
    pub created_at: NaiveDateTime,
}

// Unknown role text is rejected, not defaulted.
impl TryFrom<RoleGrantDB> for RoleGrant {
    type Error = Error;

    fn try_from(db: RoleGrantDB) -> Result<Self, Self::Error> {
        Ok(Self {
            id: db.id,
            user_id: db.user_id,
            role: db.role.parse::<AppRole>()?,
            created_at: db.created_at,
        })
    }
}
