use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::gateway::CartGateway;
use crate::domain::cart::use_cases::clear::ClearCartUseCase;
use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub gateway: Arc<dyn CartGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self) -> Result<(), CartError> {
        self.logger.info("Clearing cart");

        self.gateway.clear().await.map_err(|e| {
            self.logger.error(&format!("Clearing cart failed: {}", e));
            match e {
                GatewayError::Unauthorized => CartError::Unauthorized,
                _ => CartError::Network,
            }
        })
    }
}
