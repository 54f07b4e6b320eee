use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::gateway::CartGateway;
use crate::domain::cart::use_cases::remove_line::{RemoveCartLineParams, RemoveCartLineUseCase};
use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;

pub struct RemoveCartLineUseCaseImpl {
    pub gateway: Arc<dyn CartGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartLineUseCase for RemoveCartLineUseCaseImpl {
    async fn execute(&self, params: RemoveCartLineParams) -> Result<(), CartError> {
        self.logger
            .info(&format!("Removing {} from cart", params.product_id));

        self.gateway
            .remove_line(&params.product_id)
            .await
            .map_err(|e| {
                self.logger.error(&format!("Cart removal failed: {}", e));
                match e {
                    GatewayError::NotFound => CartError::LineNotFound,
                    GatewayError::Unauthorized => CartError::Unauthorized,
                    _ => CartError::Network,
                }
            })
    }
}
