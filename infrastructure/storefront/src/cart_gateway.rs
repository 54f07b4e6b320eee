use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use business::domain::cart::gateway::CartGateway;
use business::domain::cart::model::{Cart, CartLine, CartLineRequest};
use business::domain::errors::GatewayError;
use business::domain::shared::value_objects::{ProductId, StoreId};

use crate::client::{StorefrontClient, ensure_success, transport_error};
use crate::dto::{non_blank, parse_price, parse_timestamp, scalar_id};

#[derive(Serialize)]
struct AddLineBody<'a> {
    product_id: &'a str,
    store_id: &'a str,
    product_name: &'a str,
    price: f64,
    quantity: u32,
    image: &'a str,
}

impl<'a> From<&'a CartLineRequest> for AddLineBody<'a> {
    fn from(line: &'a CartLineRequest) -> Self {
        Self {
            product_id: line.product_id().as_str(),
            store_id: line.store_id().as_str(),
            product_name: line.product_name(),
            price: line.price(),
            quantity: line.quantity(),
            image: line.image(),
        }
    }
}

#[derive(Deserialize)]
struct CartLineDto {
    #[serde(default)]
    store_id: Value,
    #[serde(default)]
    product_name: String,
    #[serde(default)]
    price: Value,
    quantity: Option<u32>,
    image: Option<String>,
    added_at: Option<String>,
}

impl CartLineDto {
    fn into_line(self, product_id: String) -> CartLine {
        CartLine {
            product_id: ProductId::new(product_id),
            store_id: scalar_id(&self.store_id).map(StoreId::new),
            product_name: self.product_name,
            price: parse_price(&self.price).unwrap_or_default(),
            quantity: self.quantity.unwrap_or(CartLineRequest::QUANTITY),
            image: non_blank(self.image),
            added_at: self.added_at.as_deref().and_then(parse_timestamp),
        }
    }
}

pub struct CartGatewayStorefront {
    client: StorefrontClient,
}

impl CartGatewayStorefront {
    pub fn new(client: StorefrontClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CartGateway for CartGatewayStorefront {
    async fn add_line(&self, line: &CartLineRequest) -> Result<(), GatewayError> {
        let response = self
            .client
            .client
            .post(self.client.cart_url())
            .json(&AddLineBody::from(line))
            .send()
            .await
            .map_err(transport_error)?;

        ensure_success(response)?;
        Ok(())
    }

    async fn get_cart(&self) -> Result<Cart, GatewayError> {
        let response = self
            .client
            .client
            .get(self.client.cart_url())
            .send()
            .await
            .map_err(transport_error)?;

        // The backend answers `null` for a cart that was never written.
        let lines: Option<BTreeMap<String, CartLineDto>> = ensure_success(response)?
            .json()
            .await
            .map_err(|_| GatewayError::InvalidResponse)?;

        Ok(Cart {
            lines: lines
                .unwrap_or_default()
                .into_iter()
                .map(|(product_id, dto)| dto.into_line(product_id))
                .collect(),
        })
    }

    async fn remove_line(&self, product_id: &ProductId) -> Result<(), GatewayError> {
        let response = self
            .client
            .client
            .delete(self.client.cart_line_url(product_id.as_str()))
            .send()
            .await
            .map_err(transport_error)?;

        ensure_success(response)?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), GatewayError> {
        let response = self
            .client
            .client
            .delete(self.client.cart_url())
            .send()
            .await
            .map_err(transport_error)?;

        ensure_success(response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server;
    use axum::extract::{Path, State};
    use axum::http::StatusCode;
    use axum::routing::{delete, get};
    use axum::{Json, Router};
    use business::domain::product::model::ResolvedProduct;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    type Received = Arc<Mutex<Vec<Value>>>;

    async fn add(State(received): State<Received>, Json(body): Json<Value>) -> Json<Value> {
        received.lock().unwrap().push(body);
        Json(json!({ "success": true }))
    }

    async fn cart() -> Json<Value> {
        Json(json!({
            "P9": {
                "store_id": "S1",
                "product_name": "Milk Packet",
                "price": 45,
                "quantity": 2,
                "image": "",
                "added_at": "2025-03-01T10:15:30.123456",
            },
            "P1": {
                "store_id": "S1",
                "product_name": "Bread",
                "price": "30.5",
            },
        }))
    }

    fn milk_line() -> CartLineRequest {
        CartLineRequest::from_resolved(&ResolvedProduct {
            product_id: Some(ProductId::new("P9")),
            store_id: Some(StoreId::new("S1")),
            name: "Milk Packet".to_string(),
            price: 45.0,
            size_or_weight: Some("500ml".to_string()),
            image_url: None,
            description: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_post_single_line_with_quantity_one() {
        let received: Received = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route("/api/cart", get(cart).post(add))
            .with_state(received.clone());
        let gateway = CartGatewayStorefront::new(test_server::spawn(app).await);

        gateway.add_line(&milk_line()).await.unwrap();

        let bodies = received.lock().unwrap().clone();
        assert_eq!(bodies.len(), 1);
        assert_eq!(
            bodies[0],
            json!({
                "product_id": "P9",
                "store_id": "S1",
                "product_name": "Milk Packet",
                "price": 45.0,
                "quantity": 1,
                "image": "",
            })
        );
    }

    #[tokio::test]
    async fn should_classify_rejected_submission() {
        let app = Router::new().route(
            "/api/cart",
            get(cart).post(|| async { StatusCode::UNPROCESSABLE_ENTITY }),
        );
        let gateway = CartGatewayStorefront::new(test_server::spawn(app).await);

        let result = gateway.add_line(&milk_line()).await;

        assert_eq!(result, Err(GatewayError::Rejected { status: 422 }));
    }

    #[tokio::test]
    async fn should_classify_login_redirect_as_unauthorized() {
        let app = Router::new().route(
            "/api/cart",
            get(|| async { (StatusCode::FOUND, [("location", "/login")]) }),
        );
        let gateway = CartGatewayStorefront::new(test_server::spawn(app).await);

        let result = gateway.get_cart().await;

        assert_eq!(result, Err(GatewayError::Unauthorized));
    }

    #[tokio::test]
    async fn should_read_cart_lines_keyed_by_product() {
        let app = Router::new().route("/api/cart", get(cart));
        let gateway = CartGatewayStorefront::new(test_server::spawn(app).await);

        let cart = gateway.get_cart().await.unwrap();

        assert_eq!(cart.lines.len(), 2);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), 120.5);
        let milk = cart
            .lines
            .iter()
            .find(|line| line.product_id.as_str() == "P9")
            .unwrap();
        assert_eq!(milk.store_id, Some(StoreId::new("S1")));
        assert_eq!(milk.image, None);
        assert!(milk.added_at.is_some());
    }

    #[tokio::test]
    async fn should_read_null_cart_as_empty() {
        let app = Router::new().route("/api/cart", get(|| async { Json(Value::Null) }));
        let gateway = CartGatewayStorefront::new(test_server::spawn(app).await);

        let cart = gateway.get_cart().await.unwrap();

        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn should_delete_single_line_by_product() {
        let received: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route(
                "/api/cart/:product_id",
                delete(
                    |State(received): State<Arc<Mutex<Vec<String>>>>,
                     Path(product_id): Path<String>| async move {
                        received.lock().unwrap().push(product_id);
                        Json(json!({ "success": true }))
                    },
                ),
            )
            .with_state(received.clone());
        let gateway = CartGatewayStorefront::new(test_server::spawn(app).await);

        gateway.remove_line(&ProductId::new("P 9")).await.unwrap();

        assert_eq!(received.lock().unwrap().as_slice(), ["P 9"]);
    }

    #[tokio::test]
    async fn should_clear_cart_with_delete() {
        let cleared = Arc::new(Mutex::new(false));
        let app = Router::new()
            .route(
                "/api/cart",
                get(cart).delete(|State(cleared): State<Arc<Mutex<bool>>>| async move {
                    *cleared.lock().unwrap() = true;
                    Json(json!({ "success": true }))
                }),
            )
            .with_state(cleared.clone());
        let gateway = CartGatewayStorefront::new(test_server::spawn(app).await);

        gateway.clear().await.unwrap();

        assert!(*cleared.lock().unwrap());
    }

    #[tokio::test]
    async fn should_classify_forbidden_removal_as_unauthorized() {
        let app = Router::new().route(
            "/api/cart/:product_id",
            delete(|| async { StatusCode::FORBIDDEN }),
        );
        let gateway = CartGatewayStorefront::new(test_server::spawn(app).await);

        let result = gateway.remove_line(&ProductId::new("P9")).await;

        assert_eq!(result, Err(GatewayError::Unauthorized));
    }

    #[tokio::test]
    async fn should_read_numeric_store_id_in_cart_line() {
        let app = Router::new().route(
            "/api/cart",
            get(|| async {
                Json(json!({ "340": { "store_id": 12, "product_name": "Sugar", "price": 50 } }))
            }),
        );
        let gateway = CartGatewayStorefront::new(test_server::spawn(app).await);

        let cart = gateway.get_cart().await.unwrap();

        assert_eq!(cart.lines[0].store_id, Some(StoreId::new("12")));
    }
}
