use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::gateway::CartGateway;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::get::GetCartUseCase;
use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub gateway: Arc<dyn CartGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self) -> Result<Cart, CartError> {
        self.logger.info("Fetching cart");

        let cart = self.gateway.get_cart().await.map_err(|e| match e {
            GatewayError::Unauthorized => CartError::Unauthorized,
            _ => CartError::Network,
        })?;

        self.logger.debug(&format!(
            "Cart has {} lines, {} items",
            cart.lines.len(),
            cart.total_items()
        ));

        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{CartLine, CartLineRequest};
    use crate::domain::shared::value_objects::ProductId;
    use mockall::mock;

    mock! {
        pub Gateway {}

        #[async_trait]
        impl CartGateway for Gateway {
            async fn add_line(&self, line: &CartLineRequest) -> Result<(), GatewayError>;
            async fn get_cart(&self) -> Result<Cart, GatewayError>;
            async fn remove_line(&self, product_id: &ProductId) -> Result<(), GatewayError>;
            async fn clear(&self) -> Result<(), GatewayError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_cart_from_gateway() {
        let mut mock_gateway = MockGateway::new();
        mock_gateway.expect_get_cart().returning(|| {
            Ok(Cart {
                lines: vec![CartLine {
                    product_id: ProductId::new("P1"),
                    store_id: None,
                    product_name: "Bread".to_string(),
                    price: 2.5,
                    quantity: 2,
                    image: None,
                    added_at: None,
                }],
            })
        });

        let use_case = GetCartUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let cart = use_case.execute().await.unwrap();

        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price(), 5.0);
    }

    #[tokio::test]
    async fn should_map_unauthorized_session() {
        let mut mock_gateway = MockGateway::new();
        mock_gateway
            .expect_get_cart()
            .returning(|| Err(GatewayError::Unauthorized));

        let use_case = GetCartUseCaseImpl {
            gateway: Arc::new(mock_gateway),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert_eq!(result.unwrap_err(), CartError::Unauthorized);
    }
}
