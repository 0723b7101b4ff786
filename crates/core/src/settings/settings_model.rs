//! Settings domain models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What the login page shows behind the sign-in form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoginBackgroundKind {
    #[default]
    None,
    Image,
    Video,
}

impl LoginBackgroundKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginBackgroundKind::None => "none",
            LoginBackgroundKind::Image => "image",
            LoginBackgroundKind::Video => "video",
        }
    }
}

impl fmt::Display for LoginBackgroundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoginBackgroundKind {
    type Err = ();

    // Unknown values fall back to the default rather than erroring:
    // branding settings must never break the login page.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "image" => Ok(LoginBackgroundKind::Image),
            "video" => Ok(LoginBackgroundKind::Video),
            _ => Ok(LoginBackgroundKind::None),
        }
    }
}

/// Typed view over the login branding keys.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginSettings {
    pub background_kind: LoginBackgroundKind,
    pub background_url: Option<String>,
    pub logo_url: Option<String>,
}
