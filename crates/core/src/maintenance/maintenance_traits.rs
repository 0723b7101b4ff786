use crate::auth::Session;
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for the destructive admin cascades.
///
/// Implementations run each cascade inside one storage transaction, so a
/// failure leaves either everything or nothing deleted.
#[async_trait]
pub trait MaintenanceRepositoryTrait: Send + Sync {
    /// Deletes all goal events, achievement unlocks, attendance records,
    /// activities, and sales for the user, then zeroes `points_total`.
    async fn reset_user_data(&self, user_id: &str) -> Result<()>;

    /// The reset cascade plus the user's role grants and the profile row.
    async fn delete_user(&self, user_id: &str) -> Result<()>;
}

/// Trait for the admin maintenance surface.
#[async_trait]
pub trait MaintenanceServiceTrait: Send + Sync {
    async fn reset_user_data(&self, session: &Session, user_id: &str) -> Result<()>;
    async fn delete_user(&self, session: &Session, user_id: &str) -> Result<()>;
}
