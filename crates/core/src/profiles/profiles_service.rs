use log::debug;
use std::sync::Arc;

use super::profiles_model::{NewProfile, Profile, ProfileUpdate};
use super::profiles_traits::{ProfileRepositoryTrait, ProfileServiceTrait};
use crate::errors::Result;

/// Service for managing broker profiles.
pub struct ProfileService {
    repository: Arc<dyn ProfileRepositoryTrait>,
}

impl ProfileService {
    /// Creates a new ProfileService instance.
    pub fn new(repository: Arc<dyn ProfileRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl ProfileServiceTrait for ProfileService {
    /// Retrieves a profile by its ID.
    fn get_profile(&self, profile_id: &str) -> Result<Profile> {
        self.repository.get_by_id(profile_id)
    }

    /// Lists all profiles, ordered by name (the admin panel listing).
    fn list_profiles(&self) -> Result<Vec<Profile>> {
        self.repository.list()
    }

    /// Creates a new profile.
    async fn create_profile(&self, new_profile: NewProfile) -> Result<Profile> {
        new_profile.validate()?;
        debug!("Creating profile for {}", new_profile.email);
        self.repository.create(new_profile).await
    }

    /// Updates name, contact info, or photo of an existing profile.
    async fn update_profile(&self, profile_update: ProfileUpdate) -> Result<Profile> {
        profile_update.validate()?;
        self.repository.update(profile_update).await
    }
}
