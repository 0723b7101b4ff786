//! Database models for sale records.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use trueinvest_core::sales::{NewSale, Sale};

/// Database model for sales
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::sales)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct SaleDB {
    pub id: String,
    pub user_id: String,
    pub property_name: String,
    pub client_name: Option<String>,
    pub value: f64,
    pub commission: Option<f64>,
    pub points_earned: Option<i32>,
    pub status: Option<String>,
    pub sold_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

/// Database model for recording a sale
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::sales)]
#[serde(rename_all = "camelCase")]
pub struct NewSaleDB {
    pub id: Option<String>,
    pub user_id: String,
    pub property_name: String,
    pub client_name: Option<String>,
    pub value: f64,
    pub commission: Option<f64>,
    pub points_earned: Option<i32>,
    pub status: Option<String>,
    pub sold_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

// Conversion to domain models
impl From<SaleDB> for Sale {
    fn from(db: SaleDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            property_name: db.property_name,
            client_name: db.client_name,
            value: db.value,
            commission: db.commission,
            points_earned: db.points_earned,
            status: db.status,
            sold_at: db.sold_at,
            created_at: db.created_at,
        }
    }
}

// The insert timestamp is stamped by the repository.
impl From<NewSale> for NewSaleDB {
    fn from(domain: NewSale) -> Self {
        Self {
            id: None,
            user_id: domain.user_id,
            property_name: domain.property_name,
            client_name: domain.client_name,
            value: domain.value,
            commission: domain.commission,
            points_earned: domain.points_earned,
            status: domain.status,
            sold_at: domain.sold_at,
            created_at: NaiveDateTime::default(),
        }
    }
}
