//! SQLite storage implementation for the admin cascades.

mod repository;

pub use repository::MaintenanceRepository;
