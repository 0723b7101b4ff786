//! Database models for attendance records.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use trueinvest_core::attendance::{AttendanceRecord, NewAttendanceRecord};

/// Database model for attendance records
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::attendance_records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecordDB {
    pub id: String,
    pub user_id: String,
    pub work_date: NaiveDate,
    pub clock_in: NaiveDateTime,
    pub clock_out: Option<NaiveDateTime>,
    pub clock_in_location: Option<String>,
    pub clock_out_location: Option<String>,
}

/// Database model for opening an attendance record
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::attendance_records)]
#[serde(rename_all = "camelCase")]
pub struct NewAttendanceRecordDB {
    pub id: Option<String>,
    pub user_id: String,
    pub work_date: NaiveDate,
    pub clock_in: NaiveDateTime,
    pub clock_in_location: Option<String>,
}

// Conversion to domain models
impl From<AttendanceRecordDB> for AttendanceRecord {
    fn from(db: AttendanceRecordDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            work_date: db.work_date,
            clock_in: db.clock_in,
            clock_out: db.clock_out,
            clock_in_location: db.clock_in_location,
            clock_out_location: db.clock_out_location,
        }
    }
}

impl From<NewAttendanceRecord> for NewAttendanceRecordDB {
    fn from(domain: NewAttendanceRecord) -> Self {
        Self {
            id: None,
            user_id: domain.user_id,
            work_date: domain.work_date,
            clock_in: domain.clock_in,
            clock_in_location: domain.clock_in_location,
        }
    }
}
