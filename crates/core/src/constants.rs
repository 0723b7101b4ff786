//! Shared constants for the True Invest domain.

/// Maximum length of a goal title.
pub const MAX_GOAL_TITLE_LEN: usize = 200;

/// Maximum length of a goal description.
pub const MAX_GOAL_DESCRIPTION_LEN: usize = 2000;

/// Default number of entries returned by the leaderboard view.
pub const LEADERBOARD_DEFAULT_LIMIT: usize = 10;

/// How long a session stays valid after sign-in.
pub const SESSION_TTL_HOURS: i64 = 12;

// Keys in the app_settings key-value store.
pub const SETTING_LOGIN_BACKGROUND_TYPE: &str = "login_background_type";
pub const SETTING_LOGIN_BACKGROUND_URL: &str = "login_background_url";
pub const SETTING_LOGO_URL: &str = "logo_url";
