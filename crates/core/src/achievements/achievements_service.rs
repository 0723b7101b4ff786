use log::debug;
use std::sync::Arc;

use super::achievements_errors::AchievementError;
use super::achievements_model::{Achievement, UserAchievement};
use super::achievements_traits::{AchievementRepositoryTrait, AchievementServiceTrait};
use crate::errors::Result;
use crate::ledger::LedgerServiceTrait;

/// Service for the achievement catalog and unlocks.
pub struct AchievementService {
    achievement_repo: Arc<dyn AchievementRepositoryTrait>,
    ledger: Arc<dyn LedgerServiceTrait>,
}

impl AchievementService {
    pub fn new(
        achievement_repo: Arc<dyn AchievementRepositoryTrait>,
        ledger: Arc<dyn LedgerServiceTrait>,
    ) -> Self {
        Self {
            achievement_repo,
            ledger,
        }
    }
}

#[async_trait::async_trait]
impl AchievementServiceTrait for AchievementService {
    fn catalog(&self) -> Result<Vec<Achievement>> {
        self.achievement_repo.list_catalog()
    }

    fn unlocked_for_user(&self, user_id: &str) -> Result<Vec<UserAchievement>> {
        self.achievement_repo.list_unlocked_for_user(user_id)
    }

    async fn unlock(&self, user_id: &str, achievement_id: &str) -> Result<UserAchievement> {
        let achievement = self.achievement_repo.get_by_id(achievement_id)?;
        if self.achievement_repo.is_unlocked(user_id, achievement_id)? {
            return Err(AchievementError::AlreadyUnlocked(achievement_id.to_string()).into());
        }

        let unlock = self
            .achievement_repo
            .insert_unlock(user_id, achievement_id)
            .await?;
        debug!("User {} unlocked achievement {}", user_id, achievement_id);

        if let Some(reward_points) = achievement.reward_points {
            if reward_points > 0 {
                self.ledger.award(user_id, reward_points).await?;
            }
        }

        Ok(unlock)
    }
}
