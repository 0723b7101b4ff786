//! SQLite storage implementation for sale records.

mod model;
mod repository;

pub use model::{NewSaleDB, SaleDB};
pub use repository::SaleRepository;
