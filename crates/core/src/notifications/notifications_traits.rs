use crate::errors::Result;
use crate::notifications::notifications_model::{NewNotification, Notification};
use async_trait::async_trait;

/// Trait for notification repository operations.
#[async_trait]
pub trait NotificationRepositoryTrait: Send + Sync {
    /// Lists a user's notifications, newest first.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Notification>>;
    fn unread_count(&self, user_id: &str) -> Result<i64>;
    async fn insert(&self, new_notification: NewNotification) -> Result<Notification>;
    async fn mark_read(&self, notification_id: String) -> Result<usize>;
}

/// Trait for notification service operations.
#[async_trait]
pub trait NotificationServiceTrait: Send + Sync {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Notification>>;
    fn unread_count(&self, user_id: &str) -> Result<i64>;
    async fn notify(&self, new_notification: NewNotification) -> Result<Notification>;
    async fn mark_read(&self, notification_id: String) -> Result<usize>;
}
