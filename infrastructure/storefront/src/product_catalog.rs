use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use business::domain::errors::GatewayError;
use business::domain::product::catalog::ProductCatalog;
use business::domain::product::model::ProductRecord;
use business::domain::shared::value_objects::{ProductId, StoreId};

use crate::client::{StorefrontClient, ensure_success, transport_error};
use crate::dto::{is_missing_record, non_blank, parse_price, scalar_id};

#[derive(Deserialize)]
pub(crate) struct ProductDto {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    store_id: Value,
    name: String,
    #[serde(default)]
    price: Value,
    size: Option<String>,
    weight: Option<String>,
    description: Option<String>,
    image: Option<String>,
}

impl ProductDto {
    pub(crate) fn into_record(self) -> Result<ProductRecord, GatewayError> {
        let price = parse_price(&self.price).ok_or(GatewayError::InvalidResponse)?;
        Ok(ProductRecord {
            id: scalar_id(&self.id),
            store_id: scalar_id(&self.store_id),
            name: self.name,
            price,
            size: non_blank(self.size).or_else(|| non_blank(self.weight)),
            description: non_blank(self.description),
            image: non_blank(self.image),
        })
    }
}

pub struct ProductCatalogStorefront {
    client: StorefrontClient,
}

impl ProductCatalogStorefront {
    pub fn new(client: StorefrontClient) -> Self {
        Self { client }
    }

    async fn fetch(&self, url: Url) -> Result<ProductRecord, GatewayError> {
        let response = self
            .client
            .client
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;

        let body: Value = ensure_success(response)?
            .json()
            .await
            .map_err(|_| GatewayError::InvalidResponse)?;

        if is_missing_record(&body) {
            return Err(GatewayError::NotFound);
        }

        serde_json::from_value::<ProductDto>(body)
            .map_err(|_| GatewayError::InvalidResponse)?
            .into_record()
    }
}

#[async_trait]
impl ProductCatalog for ProductCatalogStorefront {
    async fn get_store_product(
        &self,
        store_id: &StoreId,
        product_id: &ProductId,
    ) -> Result<ProductRecord, GatewayError> {
        let url = self
            .client
            .store_product_url(store_id.as_str(), product_id.as_str());
        self.fetch(url).await
    }

    async fn get_product(&self, product_id: &ProductId) -> Result<ProductRecord, GatewayError> {
        let url = self.client.product_url(product_id.as_str());
        self.fetch(url).await
    }
}
