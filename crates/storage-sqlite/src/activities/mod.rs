//! SQLite storage implementation for activity records.

mod model;
mod repository;

pub use model::{ActivityDB, NewActivityDB};
pub use repository::ActivityRepository;
