use std::sync::Arc;

use super::sales_model::{NewSale, Sale};
use super::sales_traits::{SaleRepositoryTrait, SaleServiceTrait};
use crate::errors::Result;

/// Service for plain sale records.
pub struct SaleService {
    sale_repo: Arc<dyn SaleRepositoryTrait>,
}

impl SaleService {
    pub fn new(sale_repo: Arc<dyn SaleRepositoryTrait>) -> Self {
        Self { sale_repo }
    }
}

#[async_trait::async_trait]
impl SaleServiceTrait for SaleService {
    fn sales_for_user(&self, user_id: &str) -> Result<Vec<Sale>> {
        self.sale_repo.list_for_user(user_id)
    }

    async fn record_sale(&self, new_sale: NewSale) -> Result<Sale> {
        new_sale.validate()?;
        self.sale_repo.insert(new_sale).await
    }

    async fn delete_sale(&self, sale_id: String) -> Result<usize> {
        self.sale_repo.delete(sale_id).await
    }
}
