//! SQLite storage implementation for achievements.

mod model;
mod repository;

pub use model::{AchievementDB, NewUserAchievementDB, UserAchievementDB};
pub use repository::AchievementRepository;
