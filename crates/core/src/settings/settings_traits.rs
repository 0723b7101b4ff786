use crate::errors::Result;
use crate::settings::settings_model::LoginSettings;
use async_trait::async_trait;

/// Trait for the key-value settings repository.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Reads one setting. Missing keys surface as `DatabaseError::NotFound`.
    fn get_setting(&self, setting_key: &str) -> Result<String>;
    async fn update_setting(&self, setting_key: &str, setting_value: &str) -> Result<()>;
}

/// Trait for settings service operations.
#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    /// Get a single setting value by key. Returns None if not found.
    fn get_setting_value(&self, key: &str) -> Result<Option<String>>;

    /// Set a single setting value by key.
    async fn set_setting_value(&self, key: &str, value: &str) -> Result<()>;

    /// Typed login branding view; absent keys fall back to defaults.
    fn get_login_settings(&self) -> Result<LoginSettings>;

    /// Writes the login branding keys.
    async fn update_login_settings(&self, settings: &LoginSettings) -> Result<()>;
}
