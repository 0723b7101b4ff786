//! Achievements module - badge catalog and per-user unlocks.

mod achievements_errors;
mod achievements_model;
mod achievements_service;
mod achievements_traits;


pub use achievements_errors::AchievementError;
pub use achievements_model::{Achievement, UserAchievement};
pub use achievements_service::AchievementService;
pub use achievements_traits::{AchievementRepositoryTrait, AchievementServiceTrait};
