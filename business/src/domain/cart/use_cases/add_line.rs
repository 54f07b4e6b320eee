use async_trait::async_trait;

use crate::domain::cart::errors::CartSubmissionError;
use crate::domain::cart::model::CartLineRequest;
use crate::domain::product::model::ResolvedProduct;

pub struct AddCartLineParams {
    pub product: ResolvedProduct,
}

#[async_trait]
pub trait AddCartLineUseCase: Send + Sync {
    async fn execute(&self, params: AddCartLineParams)
    -> Result<CartLineRequest, CartSubmissionError>;
}
