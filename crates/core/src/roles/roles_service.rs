use std::sync::Arc;

use super::roles_model::{AppRole, RoleGrant};
use super::roles_traits::{RoleRepositoryTrait, RoleServiceTrait};
use crate::errors::{Error, Result};

/// Service for managing role grants.
pub struct RoleService {
    role_repo: Arc<dyn RoleRepositoryTrait>,
}

impl RoleService {
    pub fn new(role_repo: Arc<dyn RoleRepositoryTrait>) -> Self {
        Self { role_repo }
    }
}

#[async_trait::async_trait]
impl RoleServiceTrait for RoleService {
    fn is_admin(&self, user_id: &str) -> Result<bool> {
        self.role_repo.has_role(user_id, AppRole::Admin)
    }

    fn roles_for_user(&self, user_id: &str) -> Result<Vec<RoleGrant>> {
        self.role_repo.list_for_user(user_id)
    }

    async fn grant_role(&self, user_id: &str, role: AppRole) -> Result<RoleGrant> {
        self.role_repo.grant(user_id, role).await
    }

    async fn revoke_role(
        &self,
        acting_user_id: &str,
        user_id: &str,
        role: AppRole,
    ) -> Result<usize> {
        // An admin may not lock themselves out of the admin panel.
        if role == AppRole::Admin && acting_user_id == user_id {
            return Err(Error::Unauthorized(
                "Admins cannot revoke their own admin role".to_string(),
            ));
        }
        self.role_repo.revoke(user_id, role).await
    }
}
