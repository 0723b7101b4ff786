//! Sales module - plain per-user sale records.

mod sales_model;
mod sales_service;
mod sales_traits;

pub use sales_model::{NewSale, Sale};
pub use sales_service::SaleService;
pub use sales_traits::{SaleRepositoryTrait, SaleServiceTrait};
