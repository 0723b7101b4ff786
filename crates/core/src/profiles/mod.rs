//! Profiles module - domain models, services, and traits.

mod profiles_model;
mod profiles_service;
mod profiles_traits;

#[cfg(test)]
mod profiles_model_tests;

// Re-export the public interface
pub use profiles_model::{LeaderboardEntry, NewProfile, Profile, ProfileUpdate};
pub use profiles_service::ProfileService;
pub use profiles_traits::{ProfileRepositoryTrait, ProfileServiceTrait};
