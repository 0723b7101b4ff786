use chrono::Utc;
use log::info;
use std::sync::Arc;

use super::maintenance_traits::{MaintenanceRepositoryTrait, MaintenanceServiceTrait};
use crate::auth::Session;
use crate::errors::Result;

/// Service for the state-destructive admin operations.
pub struct MaintenanceService {
    maintenance_repo: Arc<dyn MaintenanceRepositoryTrait>,
}

impl MaintenanceService {
    pub fn new(maintenance_repo: Arc<dyn MaintenanceRepositoryTrait>) -> Self {
        Self { maintenance_repo }
    }
}

#[async_trait::async_trait]
impl MaintenanceServiceTrait for MaintenanceService {
    async fn reset_user_data(&self, session: &Session, user_id: &str) -> Result<()> {
        session.require_admin(Utc::now().naive_utc())?;
        info!("Admin {} resetting all data for {}", session.user_id, user_id);
        self.maintenance_repo.reset_user_data(user_id).await
    }

    async fn delete_user(&self, session: &Session, user_id: &str) -> Result<()> {
        session.require_admin(Utc::now().naive_utc())?;
        info!("Admin {} deleting user {}", session.user_id, user_id);
        self.maintenance_repo.delete_user(user_id).await
    }
}
