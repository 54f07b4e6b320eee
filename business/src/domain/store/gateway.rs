use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::product::model::ProductRecord;
use crate::domain::shared::value_objects::StoreId;

use super::model::Store;

#[async_trait]
pub trait StoreGateway: Send + Sync {
    async fn get_stores(&self) -> Result<Vec<Store>, GatewayError>;
    async fn get_store(&self, store_id: &StoreId) -> Result<Store, GatewayError>;
    async fn get_store_products(
        &self,
        store_id: &StoreId,
    ) -> Result<Vec<ProductRecord>, GatewayError>;
}
