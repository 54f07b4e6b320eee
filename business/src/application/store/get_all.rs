use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::store::errors::StoreError;
use crate::domain::store::gateway::StoreGateway;
use crate::domain::store::model::Store;
use crate::domain::store::use_cases::get_all::GetStoresUseCase;

pub struct GetStoresUseCaseImpl {
    pub gateway: Arc<dyn StoreGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetStoresUseCase for GetStoresUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Store>, StoreError> {
        self.logger.info("Fetching stores");

        let mut stores = self.gateway.get_stores().await.map_err(|e| match e {
            GatewayError::Unauthorized => StoreError::Unauthorized,
            _ => StoreError::Network,
        })?;

        stores.sort_by_key(|store| store.name.to_lowercase());

        Ok(stores)
    }
}
