use trueinvest_core::sales::{NewSale, Sale, SaleRepositoryTrait};
use trueinvest_core::Result;

use super::model::{NewSaleDB, SaleDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::sales;
use crate::schema::sales::dsl::*;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct SaleRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SaleRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SaleRepository { pool, writer }
    }
}

#[async_trait]
impl SaleRepositoryTrait for SaleRepository {
    fn list_for_user(&self, for_user: &str) -> Result<Vec<Sale>> {
        let mut conn = get_connection(&self.pool)?;
        let sales_db = sales
            .filter(user_id.eq(for_user))
            .order(sold_at.desc())
            .load::<SaleDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(sales_db.into_iter().map(Sale::from).collect())
    }

    async fn insert(&self, new_sale: NewSale) -> Result<Sale> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Sale> {
                let mut new_sale_db: NewSaleDB = new_sale.into();
                new_sale_db.id = Some(Uuid::new_v4().to_string());
                new_sale_db.created_at = Utc::now().naive_utc();

                let result_db = diesel::insert_into(sales::table)
                    .values(&new_sale_db)
                    .returning(SaleDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Sale::from(result_db))
            })
            .await
    }

    async fn delete(&self, sale_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(sales.find(&sale_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
