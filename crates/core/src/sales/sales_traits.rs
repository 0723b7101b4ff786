use crate::errors::Result;
use crate::sales::sales_model::{NewSale, Sale};
use async_trait::async_trait;

/// Trait for sale repository operations.
#[async_trait]
pub trait SaleRepositoryTrait: Send + Sync {
    /// Lists a user's sales, most recent first.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Sale>>;
    async fn insert(&self, new_sale: NewSale) -> Result<Sale>;
    async fn delete(&self, sale_id: String) -> Result<usize>;
}

/// Trait for sale service operations.
#[async_trait]
pub trait SaleServiceTrait: Send + Sync {
    fn sales_for_user(&self, user_id: &str) -> Result<Vec<Sale>>;
    async fn record_sale(&self, new_sale: NewSale) -> Result<Sale>;
    async fn delete_sale(&self, sale_id: String) -> Result<usize>;
}
