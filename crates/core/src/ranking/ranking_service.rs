use std::sync::Arc;

use crate::errors::Result;
use crate::profiles::{LeaderboardEntry, ProfileRepositoryTrait};

/// Trait for ranking view operations.
pub trait RankingServiceTrait: Send + Sync {
    /// 1-based position of a user in the points ordering, or `None` if
    /// the user has no profile.
    fn rank(&self, user_id: &str) -> Result<Option<u32>>;

    /// Top-N public projection for the leaderboard display.
    fn leaderboard(&self, limit: usize) -> Result<Vec<LeaderboardEntry>>;
}

/// Read-only projection sorting users by ledger value.
///
/// Recomputed from a full profile read on every call; ties are broken by
/// the store's stable order, not by any business rule.
pub struct RankingService {
    profile_repo: Arc<dyn ProfileRepositoryTrait>,
}

impl RankingService {
    pub fn new(profile_repo: Arc<dyn ProfileRepositoryTrait>) -> Self {
        Self { profile_repo }
    }
}

impl RankingServiceTrait for RankingService {
    fn rank(&self, user_id: &str) -> Result<Option<u32>> {
        let profiles = self.profile_repo.list_by_points_desc()?;
        Ok(profiles
            .iter()
            .position(|p| p.id == user_id)
            .map(|idx| idx as u32 + 1))
    }

    fn leaderboard(&self, limit: usize) -> Result<Vec<LeaderboardEntry>> {
        let profiles = self.profile_repo.list_by_points_desc()?;
        Ok(profiles
            .iter()
            .take(limit)
            .map(LeaderboardEntry::from)
            .collect())
    }
}
