use thiserror::Error;

/// Errors raised by achievement unlocks.
#[derive(Error, Debug)]
pub enum AchievementError {
    /// The user already holds this achievement.
    #[error("Achievement '{0}' is already unlocked")]
    AlreadyUnlocked(String),
}
