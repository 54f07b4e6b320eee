use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::shared::value_objects::ProductId;

pub struct RemoveCartLineParams {
    pub product_id: ProductId,
}

#[async_trait]
pub trait RemoveCartLineUseCase: Send + Sync {
    async fn execute(&self, params: RemoveCartLineParams) -> Result<(), CartError>;
}
