//! Attendance module - daily clock-in/clock-out records.

mod attendance_errors;
mod attendance_model;
mod attendance_service;
mod attendance_traits;


pub use attendance_errors::AttendanceError;
pub use attendance_model::{AttendanceRecord, AttendanceStatus, NewAttendanceRecord};
pub use attendance_service::AttendanceService;
pub use attendance_traits::{AttendanceRepositoryTrait, AttendanceServiceTrait};
