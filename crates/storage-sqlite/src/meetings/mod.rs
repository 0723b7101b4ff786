//! SQLite storage implementation for meetings.

mod model;
mod repository;

pub use model::{MeetingDB, NewMeetingDB};
pub use repository::MeetingRepository;
