use crate::errors::Result;
use crate::profiles::profiles_model::{NewProfile, Profile, ProfileUpdate};
use async_trait::async_trait;

/// Trait for profile repository operations.
///
/// `list_by_points_desc` is the read behind the ranking view; the store
/// orders by `points_total` descending and breaks ties by its own stable
/// order.
#[async_trait]
pub trait ProfileRepositoryTrait: Send + Sync {
    fn get_by_id(&self, profile_id: &str) -> Result<Profile>;
    fn list(&self) -> Result<Vec<Profile>>;
    fn list_by_points_desc(&self) -> Result<Vec<Profile>>;
    async fn create(&self, new_profile: NewProfile) -> Result<Profile>;
    async fn update(&self, profile_update: ProfileUpdate) -> Result<Profile>;
    fn get_points_total(&self, profile_id: &str) -> Result<i32>;
    async fn set_points_total(&self, profile_id: &str, points: i32) -> Result<()>;
}

/// Trait for profile service operations.
#[async_trait]
pub trait ProfileServiceTrait: Send + Sync {
    fn get_profile(&self, profile_id: &str) -> Result<Profile>;
    fn list_profiles(&self) -> Result<Vec<Profile>>;
    async fn create_profile(&self, new_profile: NewProfile) -> Result<Profile>;
    async fn update_profile(&self, profile_update: ProfileUpdate) -> Result<Profile>;
}
