//! Role domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Application roles. Every signed-up user is a broker; admins are
/// granted explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppRole {
    Admin,
    #[default]
    Broker,
}

impl AppRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppRole::Admin => "admin",
            AppRole::Broker => "broker",
        }
    }
}

impl fmt::Display for AppRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "admin" => Ok(AppRole::Admin),
            "broker" => Ok(AppRole::Broker),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown role '{}'",
                other
            )))),
        }
    }
}

/// A role granted to a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoleGrant {
    pub id: String,
    pub user_id: String,
    pub role: AppRole,
    pub created_at: NaiveDateTime,
}
