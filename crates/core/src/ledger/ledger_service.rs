use log::debug;
use std::sync::Arc;

use crate::errors::{Result, ValidationError};
use crate::profiles::ProfileRepositoryTrait;

/// Trait for points ledger operations.
///
/// The total is denormalized state on the profile, mutated imperatively
/// alongside goal event writes; it is not recomputed from the event log.
#[async_trait::async_trait]
pub trait LedgerServiceTrait: Send + Sync {
    /// Adds `amount` points to the user's total. Returns the new total.
    async fn award(&self, user_id: &str, amount: i32) -> Result<i32>;

    /// Subtracts `amount` points from the user's total, flooring at
    /// zero. Returns the new total.
    async fn revoke(&self, user_id: &str, amount: i32) -> Result<i32>;

    /// Current total for a user.
    fn points_total(&self, user_id: &str) -> Result<i32>;
}

/// Service mutating the denormalized per-user points total.
///
/// Both operations are read-then-write without a version check: two
/// sessions mutating the same user concurrently can lose one update.
/// The SQLite backend narrows the window by serializing writes, but the
/// read still happens outside the write transaction.
pub struct LedgerService {
    profile_repo: Arc<dyn ProfileRepositoryTrait>,
}

impl LedgerService {
    pub fn new(profile_repo: Arc<dyn ProfileRepositoryTrait>) -> Self {
        Self { profile_repo }
    }

    fn validate_amount(amount: i32) -> Result<()> {
        if amount < 1 {
            return Err(ValidationError::NotPositive("amount").into());
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl LedgerServiceTrait for LedgerService {
    async fn award(&self, user_id: &str, amount: i32) -> Result<i32> {
        Self::validate_amount(amount)?;
        let current = self.profile_repo.get_points_total(user_id)?;
        let updated = current + amount;
        self.profile_repo.set_points_total(user_id, updated).await?;
        debug!("Awarded {} points to {} (total {})", amount, user_id, updated);
        Ok(updated)
    }

    async fn revoke(&self, user_id: &str, amount: i32) -> Result<i32> {
        Self::validate_amount(amount)?;
        let current = self.profile_repo.get_points_total(user_id)?;
        // Totals never go negative, whatever the event log says.
        let updated = (current - amount).max(0);
        self.profile_repo.set_points_total(user_id, updated).await?;
        debug!(
            "Revoked {} points from {} (total {})",
            amount, user_id, updated
        );
        Ok(updated)
    }

    fn points_total(&self, user_id: &str) -> Result<i32> {
        self.profile_repo.get_points_total(user_id)
    }
}
