use std::sync::Arc;

use super::notifications_model::{NewNotification, Notification};
use super::notifications_traits::{NotificationRepositoryTrait, NotificationServiceTrait};
use crate::errors::Result;

/// Service for per-user notifications.
pub struct NotificationService {
    notification_repo: Arc<dyn NotificationRepositoryTrait>,
}

impl NotificationService {
    pub fn new(notification_repo: Arc<dyn NotificationRepositoryTrait>) -> Self {
        Self { notification_repo }
    }
}

#[async_trait::async_trait]
impl NotificationServiceTrait for NotificationService {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Notification>> {
        self.notification_repo.list_for_user(user_id)
    }

    fn unread_count(&self, user_id: &str) -> Result<i64> {
        self.notification_repo.unread_count(user_id)
    }

    async fn notify(&self, new_notification: NewNotification) -> Result<Notification> {
        self.notification_repo.insert(new_notification).await
    }

    async fn mark_read(&self, notification_id: String) -> Result<usize> {
        self.notification_repo.mark_read(notification_id).await
    }
}
