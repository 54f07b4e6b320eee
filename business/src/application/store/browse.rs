use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::store::errors::StoreError;
use crate::domain::store::gateway::StoreGateway;
use crate::domain::store::model::StoreDetails;
use crate::domain::store::use_cases::browse::{BrowseStoreParams, BrowseStoreUseCase};

pub struct BrowseStoreUseCaseImpl {
    pub gateway: Arc<dyn StoreGateway>,
    pub logger: Arc<dyn Logger>,
}

fn to_store_error(e: GatewayError) -> StoreError {
    match e {
        GatewayError::NotFound => StoreError::NotFound,
        GatewayError::Unauthorized => StoreError::Unauthorized,
        _ => StoreError::Network,
    }
}

#[async_trait]
impl BrowseStoreUseCase for BrowseStoreUseCaseImpl {
    async fn execute(&self, params: BrowseStoreParams) -> Result<StoreDetails, StoreError> {
        self.logger
            .info(&format!("Browsing store {}", params.store_id));

        let store = self
            .gateway
            .get_store(&params.store_id)
            .await
            .map_err(to_store_error)?;

        let mut products = self
            .gateway
            .get_store_products(&params.store_id)
            .await
            .map_err(to_store_error)?;
        products.sort_by_key(|product| product.name.to_lowercase());

        self.logger.debug(&format!(
            "Store {} lists {} products",
            store.id,
            products.len()
        ));

        Ok(StoreDetails { store, products })
    }
}
