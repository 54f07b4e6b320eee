use async_trait::async_trait;

use crate::domain::shared::value_objects::StoreId;
use crate::domain::store::errors::StoreError;
use crate::domain::store::model::StoreDetails;

pub struct BrowseStoreParams {
    pub store_id: StoreId,
}

#[async_trait]
pub trait BrowseStoreUseCase: Send + Sync {
    async fn execute(&self, params: BrowseStoreParams) -> Result<StoreDetails, StoreError>;
}
