#[cfg(test)]
mod tests {
    use crate::auth::Session;
    use crate::errors::{Error, Result};
    use crate::maintenance::{
        MaintenanceRepositoryTrait, MaintenanceService, MaintenanceServiceTrait,
    };
    use crate::roles::AppRole;
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct MockMaintenanceRepository {
        resets: Arc<Mutex<Vec<String>>>,
        deletions: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl MaintenanceRepositoryTrait for MockMaintenanceRepository {
        async fn reset_user_data(&self, user_id: &str) -> Result<()> {
            self.resets.lock().unwrap().push(user_id.to_string());
            Ok(())
        }

        async fn delete_user(&self, user_id: &str) -> Result<()> {
            self.deletions.lock().unwrap().push(user_id.to_string());
            Ok(())
        }
    }

    fn session(role: AppRole) -> Session {
        let now = Utc::now().naive_utc();
        Session::new(
            "admin-1".to_string(),
            "Admin".to_string(),
            role,
            now,
            now + Duration::hours(1),
        )
    }

    fn fixture() -> (MaintenanceService, Arc<MockMaintenanceRepository>) {
        let repo = Arc::new(MockMaintenanceRepository::default());
        (MaintenanceService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn admin_can_reset_and_delete() {
        let (service, repo) = fixture();
        let admin = session(AppRole::Admin);

        service.reset_user_data(&admin, "u1").await.unwrap();
        service.delete_user(&admin, "u2").await.unwrap();

        assert_eq!(*repo.resets.lock().unwrap(), vec!["u1".to_string()]);
        assert_eq!(*repo.deletions.lock().unwrap(), vec!["u2".to_string()]);
    }

    #[tokio::test]
    async fn broker_session_rejected() {
        let (service, repo) = fixture();
        let broker = session(AppRole::Broker);

        let err = service.reset_user_data(&broker, "u1").await.unwrap_err();
        assert!(matches!(err, Error::Unauthorized(_)));
        assert!(repo.resets.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn stale_session_rejected() {
        let (service, repo) = fixture();
        let mut admin = session(AppRole::Admin);
        admin.invalidate();

        let err = service.delete_user(&admin, "u1").await.unwrap_err();
        assert!(matches!(err, Error::Unauthorized(_)));
        assert!(repo.deletions.lock().unwrap().is_empty());
    }
}
