use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartSubmissionError;
use crate::domain::cart::gateway::CartGateway;
use crate::domain::cart::model::CartLineRequest;
use crate::domain::cart::use_cases::add_line::{AddCartLineParams, AddCartLineUseCase};
use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;

pub struct AddCartLineUseCaseImpl {
    pub gateway: Arc<dyn CartGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartLineUseCase for AddCartLineUseCaseImpl {
    async fn execute(
        &self,
        params: AddCartLineParams,
    ) -> Result<CartLineRequest, CartSubmissionError> {
        let line = CartLineRequest::from_resolved(&params.product).inspect_err(|_| {
            self.logger.warn(&format!(
                "Refusing to submit {} without store and product identifiers",
                params.product.name
            ));
        })?;

        self.logger.info(&format!(
            "Adding to cart: {} ({}/{})",
            line.product_name(),
            line.store_id(),
            line.product_id()
        ));

        self.gateway.add_line(&line).await.map_err(|e| {
            self.logger
                .error(&format!("Cart submission failed: {}", e));
            match e {
                GatewayError::Unauthorized => CartSubmissionError::Unauthorized,
                GatewayError::Rejected { status } => CartSubmissionError::Rejected { status },
                GatewayError::NotFound => CartSubmissionError::Rejected { status: 404 },
                GatewayError::Network | GatewayError::InvalidResponse => {
                    CartSubmissionError::Network
                }
            }
        })?;

        Ok(line)
    }
}
