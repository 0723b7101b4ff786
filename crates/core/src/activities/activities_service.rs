use std::sync::Arc;

use super::activities_model::{Activity, NewActivity};
use super::activities_traits::{ActivityRepositoryTrait, ActivityServiceTrait};
use crate::errors::Result;

/// Service for plain activity records.
pub struct ActivityService {
    activity_repo: Arc<dyn ActivityRepositoryTrait>,
}

impl ActivityService {
    pub fn new(activity_repo: Arc<dyn ActivityRepositoryTrait>) -> Self {
        Self { activity_repo }
    }
}

#[async_trait::async_trait]
impl ActivityServiceTrait for ActivityService {
    fn activities_for_user(&self, user_id: &str) -> Result<Vec<Activity>> {
        self.activity_repo.list_for_user(user_id)
    }

    async fn log_activity(&self, new_activity: NewActivity) -> Result<Activity> {
        new_activity.validate()?;
        self.activity_repo.insert(new_activity).await
    }

    async fn delete_activity(&self, activity_id: String) -> Result<usize> {
        self.activity_repo.delete(activity_id).await
    }
}
