use crate::activities::activities_model::{Activity, NewActivity};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for activity repository operations.
#[async_trait]
pub trait ActivityRepositoryTrait: Send + Sync {
    /// Lists a user's activities, most recent first.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Activity>>;
    async fn insert(&self, new_activity: NewActivity) -> Result<Activity>;
    async fn delete(&self, activity_id: String) -> Result<usize>;
}

/// Trait for activity service operations.
#[async_trait]
pub trait ActivityServiceTrait: Send + Sync {
    fn activities_for_user(&self, user_id: &str) -> Result<Vec<Activity>>;
    async fn log_activity(&self, new_activity: NewActivity) -> Result<Activity>;
    async fn delete_activity(&self, activity_id: String) -> Result<usize>;
}
