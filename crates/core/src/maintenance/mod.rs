//! Maintenance module - admin bulk reset and user deletion.

mod maintenance_service;
mod maintenance_traits;

#[cfg(test)]
mod maintenance_service_tests;

pub use maintenance_service::MaintenanceService;
pub use maintenance_traits::{MaintenanceRepositoryTrait, MaintenanceServiceTrait};
