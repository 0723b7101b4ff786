//! SQLite storage implementation for role grants.

mod model;
mod repository;

pub use model::{NewRoleGrantDB, RoleGrantDB};
pub use repository::RoleRepository;
