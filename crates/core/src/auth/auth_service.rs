use chrono::{Duration, Utc};
use log::info;
use std::sync::Arc;

use super::auth_model::Session;
use crate::constants::SESSION_TTL_HOURS;
use crate::errors::Result;
use crate::profiles::ProfileRepositoryTrait;
use crate::roles::{AppRole, RoleRepositoryTrait};

/// Trait for session lifecycle operations.
pub trait AuthServiceTrait: Send + Sync {
    /// Builds a session for an identity the external provider already
    /// verified: loads the profile, resolves the role, stamps the TTL.
    fn sign_in(&self, user_id: &str) -> Result<Session>;

    /// Ends a session. The value is unusable afterwards.
    fn sign_out(&self, session: &mut Session);

    /// Guard for admin-only operations: the session must be live and
    /// carry the admin role.
    fn require_admin(&self, session: &Session) -> Result<()>;
}

/// Service owning session creation and the admin guard.
pub struct AuthService {
    profile_repo: Arc<dyn ProfileRepositoryTrait>,
    role_repo: Arc<dyn RoleRepositoryTrait>,
}

impl AuthService {
    pub fn new(
        profile_repo: Arc<dyn ProfileRepositoryTrait>,
        role_repo: Arc<dyn RoleRepositoryTrait>,
    ) -> Self {
        Self {
            profile_repo,
            role_repo,
        }
    }
}

impl AuthServiceTrait for AuthService {
    fn sign_in(&self, user_id: &str) -> Result<Session> {
        let profile = self.profile_repo.get_by_id(user_id)?;
        let role = if self.role_repo.has_role(user_id, AppRole::Admin)? {
            AppRole::Admin
        } else {
            AppRole::Broker
        };

        let issued_at = Utc::now().naive_utc();
        let expires_at = issued_at + Duration::hours(SESSION_TTL_HOURS);
        info!("Signed in {} as {}", user_id, role);
        Ok(Session::new(
            profile.id,
            profile.name,
            role,
            issued_at,
            expires_at,
        ))
    }

    fn sign_out(&self, session: &mut Session) {
        info!("Signed out {}", session.user_id);
        session.invalidate();
    }

    fn require_admin(&self, session: &Session) -> Result<()> {
        session.require_admin(Utc::now().naive_utc())
    }
}
