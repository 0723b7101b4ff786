//! SQLite storage implementation for key-value settings.

mod model;
mod repository;

pub use model::AppSettingDB;
pub use repository::SettingsRepository;
