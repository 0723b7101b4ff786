//! Session context model.

use chrono::NaiveDateTime;

use crate::errors::{Error, Result};
use crate::roles::AppRole;

/// Session context for a signed-in user.
///
/// Created by [`crate::auth::AuthService::sign_in`], passed down
/// explicitly to every operation that needs the caller's identity, and
/// dead once signed out or past `expires_at`. Credential verification
/// itself happens at the external identity provider; this type only
/// carries the verified identity and its resolved role.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: String,
    pub display_name: String,
    pub role: AppRole,
    pub issued_at: NaiveDateTime,
    pub expires_at: NaiveDateTime,
    revoked: bool,
}

impl Session {
    pub(crate) fn new(
        user_id: String,
        display_name: String,
        role: AppRole,
        issued_at: NaiveDateTime,
        expires_at: NaiveDateTime,
    ) -> Self {
        Self {
            user_id,
            display_name,
            role,
            issued_at,
            expires_at,
            revoked: false,
        }
    }

    /// Whether the session can still be used at `now`.
    pub fn is_valid(&self, now: NaiveDateTime) -> bool {
        !self.revoked && now < self.expires_at
    }

    pub fn is_admin(&self) -> bool {
        self.role == AppRole::Admin
    }

    /// Marks the session unusable. There is no way back; sign in again.
    pub fn invalidate(&mut self) {
        self.revoked = true;
    }

    /// Guard for admin-only operations: the session must be live at
    /// `now` and carry the admin role.
    pub fn require_admin(&self, now: NaiveDateTime) -> Result<()> {
        if !self.is_valid(now) {
            return Err(Error::Unauthorized("Session expired".to_string()));
        }
        if !self.is_admin() {
            return Err(Error::Unauthorized(
                "Administrator role required".to_string(),
            ));
        }
        Ok(())
    }
}
