//! Roles module - role grants and the admin check.

mod roles_model;
mod roles_service;
mod roles_traits;


pub use roles_model::{AppRole, RoleGrant};
pub use roles_service::RoleService;
pub use roles_traits::{RoleRepositoryTrait, RoleServiceTrait};
