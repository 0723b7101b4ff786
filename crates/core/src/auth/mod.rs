//! Auth module - the explicit session context.

mod auth_model;
mod auth_service;


pub use auth_model::Session;
pub use auth_service::{AuthService, AuthServiceTrait};
