use std::sync::Arc;

use super::settings_model::{LoginBackgroundKind, LoginSettings};
use super::settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
use crate::constants::{
    SETTING_LOGIN_BACKGROUND_TYPE, SETTING_LOGIN_BACKGROUND_URL, SETTING_LOGO_URL,
};
use crate::errors::{DatabaseError, Error, Result};

/// Service over the key-value settings store.
pub struct SettingsService {
    settings_repo: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repo: Arc<dyn SettingsRepositoryTrait>) -> Self {
        Self { settings_repo }
    }
}

#[async_trait::async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_setting_value(&self, key: &str) -> Result<Option<String>> {
        match self.settings_repo.get_setting(key) {
            Ok(value) => Ok(Some(value)),
            Err(Error::Database(DatabaseError::NotFound(_))) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn set_setting_value(&self, key: &str, value: &str) -> Result<()> {
        self.settings_repo.update_setting(key, value).await
    }

    fn get_login_settings(&self) -> Result<LoginSettings> {
        let background_kind = self
            .get_setting_value(SETTING_LOGIN_BACKGROUND_TYPE)?
            .map(|v| v.parse().unwrap_or_default())
            .unwrap_or_default();
        let background_url = self.get_setting_value(SETTING_LOGIN_BACKGROUND_URL)?;
        let logo_url = self.get_setting_value(SETTING_LOGO_URL)?;

        Ok(LoginSettings {
            background_kind,
            background_url,
            logo_url,
        })
    }

    async fn update_login_settings(&self, settings: &LoginSettings) -> Result<()> {
        self.settings_repo
            .update_setting(SETTING_LOGIN_BACKGROUND_TYPE, settings.background_kind.as_str())
            .await?;
        if let Some(ref background_url) = settings.background_url {
            self.settings_repo
                .update_setting(SETTING_LOGIN_BACKGROUND_URL, background_url)
                .await?;
        }
        if let Some(ref logo_url) = settings.logo_url {
            self.settings_repo
                .update_setting(SETTING_LOGO_URL, logo_url)
                .await?;
        }
        Ok(())
    }
}
