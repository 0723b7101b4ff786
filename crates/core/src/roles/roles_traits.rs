use crate::errors::Result;
use crate::roles::roles_model::{AppRole, RoleGrant};
use async_trait::async_trait;

/// Trait for role grant repository operations.
///
/// `has_role` mirrors the remote role-check procedure: a point read
/// parameterized by user id and role.
#[async_trait]
pub trait RoleRepositoryTrait: Send + Sync {
    fn has_role(&self, user_id: &str, role: AppRole) -> Result<bool>;
    fn list_for_user(&self, user_id: &str) -> Result<Vec<RoleGrant>>;
    async fn grant(&self, user_id: &str, role: AppRole) -> Result<RoleGrant>;
    async fn revoke(&self, user_id: &str, role: AppRole) -> Result<usize>;
}

/// Trait for role service operations.
#[async_trait]
pub trait RoleServiceTrait: Send + Sync {
    fn is_admin(&self, user_id: &str) -> Result<bool>;
    fn roles_for_user(&self, user_id: &str) -> Result<Vec<RoleGrant>>;
    async fn grant_role(&self, user_id: &str, role: AppRole) -> Result<RoleGrant>;
    /// Removes a role grant. `acting_user_id` is the admin performing
    /// the change; revoking one's own admin role is rejected.
    async fn revoke_role(&self, acting_user_id: &str, user_id: &str, role: AppRole)
        -> Result<usize>;
}
