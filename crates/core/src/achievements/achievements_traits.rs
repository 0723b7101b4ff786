use crate::achievements::achievements_model::{Achievement, UserAchievement};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for achievement repository operations.
#[async_trait]
pub trait AchievementRepositoryTrait: Send + Sync {
    fn get_by_id(&self, achievement_id: &str) -> Result<Achievement>;
    fn list_catalog(&self) -> Result<Vec<Achievement>>;
    fn list_unlocked_for_user(&self, user_id: &str) -> Result<Vec<UserAchievement>>;
    fn is_unlocked(&self, user_id: &str, achievement_id: &str) -> Result<bool>;
    async fn insert_unlock(&self, user_id: &str, achievement_id: &str) -> Result<UserAchievement>;
}

/// Trait for achievement service operations.
#[async_trait]
pub trait AchievementServiceTrait: Send + Sync {
    fn catalog(&self) -> Result<Vec<Achievement>>;
    fn unlocked_for_user(&self, user_id: &str) -> Result<Vec<UserAchievement>>;
    /// Unlocks an achievement for a user, awarding its reward points
    /// through the ledger when it carries any. Duplicate unlocks are
    /// rejected.
    async fn unlock(&self, user_id: &str, achievement_id: &str) -> Result<UserAchievement>;
}
