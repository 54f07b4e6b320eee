use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::shared::value_objects::{ProductId, StoreId};

use super::model::ProductRecord;

/// Read-only access to the storefront product catalog.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn get_store_product(
        &self,
        store_id: &StoreId,
        product_id: &ProductId,
    ) -> Result<ProductRecord, GatewayError>;

    async fn get_product(&self, product_id: &ProductId) -> Result<ProductRecord, GatewayError>;
}
