use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::shared::value_objects::ProductId;

use super::model::{Cart, CartLineRequest};

#[async_trait]
pub trait CartGateway: Send + Sync {
    async fn add_line(&self, line: &CartLineRequest) -> Result<(), GatewayError>;
    async fn get_cart(&self) -> Result<Cart, GatewayError>;
    async fn remove_line(&self, product_id: &ProductId) -> Result<(), GatewayError>;
    async fn clear(&self) -> Result<(), GatewayError>;
}
