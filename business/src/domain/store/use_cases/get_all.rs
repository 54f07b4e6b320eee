use async_trait::async_trait;

use crate::domain::store::errors::StoreError;
use crate::domain::store::model::Store;

#[async_trait]
pub trait GetStoresUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Store>, StoreError>;
}
