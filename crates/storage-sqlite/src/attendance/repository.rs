use trueinvest_core::attendance::{
    AttendanceRecord, AttendanceRepositoryTrait, NewAttendanceRecord,
};
use trueinvest_core::Result;

use super::model::{AttendanceRecordDB, NewAttendanceRecordDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::attendance_records;
use crate::schema::attendance_records::dsl::*;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct AttendanceRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AttendanceRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        AttendanceRepository { pool, writer }
    }
}

#[async_trait]
impl AttendanceRepositoryTrait for AttendanceRepository {
    fn find_for_day(&self, for_user: &str, day: NaiveDate) -> Result<Option<AttendanceRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let record_db = attendance_records
            .filter(user_id.eq(for_user))
            .filter(work_date.eq(day))
            .first::<AttendanceRecordDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(record_db.map(AttendanceRecord::from))
    }

    fn list_for_user(&self, for_user: &str) -> Result<Vec<AttendanceRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let records_db = attendance_records
            .filter(user_id.eq(for_user))
            .order(work_date.desc())
            .load::<AttendanceRecordDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(records_db.into_iter().map(AttendanceRecord::from).collect())
    }

    async fn insert(&self, new_record: NewAttendanceRecord) -> Result<AttendanceRecord> {
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<AttendanceRecord> {
                    let mut new_record_db: NewAttendanceRecordDB = new_record.into();
                    new_record_db.id = Some(Uuid::new_v4().to_string());

                    let result_db = diesel::insert_into(attendance_records::table)
                        .values(&new_record_db)
                        .returning(AttendanceRecordDB::as_returning())
                        .get_result(conn)
                        .map_err(StorageError::from)?;
                    Ok(AttendanceRecord::from(result_db))
                },
            )
            .await
    }

    async fn close(
        &self,
        record_id: String,
        out_at: NaiveDateTime,
        out_location: Option<String>,
    ) -> Result<AttendanceRecord> {
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<AttendanceRecord> {
                    diesel::update(attendance_records.find(&record_id))
                        .set((
                            clock_out.eq(Some(out_at)),
                            clock_out_location.eq(out_location),
                        ))
                        .execute(conn)
                        .map_err(StorageError::from)?;

                    let result_db = attendance_records
                        .find(&record_id)
                        .first::<AttendanceRecordDB>(conn)
                        .map_err(StorageError::from)?;
                    Ok(AttendanceRecord::from(result_db))
                },
            )
            .await
    }
}
