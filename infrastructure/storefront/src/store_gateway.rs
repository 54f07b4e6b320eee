use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use business::domain::errors::GatewayError;
use business::domain::product::model::ProductRecord;
use business::domain::shared::value_objects::StoreId;
use business::domain::store::gateway::StoreGateway;
use business::domain::store::model::Store;

use crate::client::{StorefrontClient, ensure_success, transport_error};
use crate::dto::{is_missing_record, non_blank};
use crate::product_catalog::ProductDto;

#[derive(Deserialize)]
struct StoreDto {
    name: Option<String>,
    description: Option<String>,
}

impl StoreDto {
    fn into_store(self, id: String) -> Store {
        Store {
            name: non_blank(self.name).unwrap_or_else(|| id.clone()),
            description: non_blank(self.description),
            id: StoreId::new(id),
        }
    }
}

/// Store directory of the storefront. Stores and their products are keyed
/// by id; an empty directory comes back as `null`.
pub struct StoreGatewayStorefront {
    client: StorefrontClient,
}

impl StoreGatewayStorefront {
    pub fn new(client: StorefrontClient) -> Self {
        Self { client }
    }

    async fn fetch(&self, url: Url) -> Result<Value, GatewayError> {
        let response = self
            .client
            .client
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;

        ensure_success(response)?
            .json()
            .await
            .map_err(|_| GatewayError::InvalidResponse)
    }
}

#[async_trait]
impl StoreGateway for StoreGatewayStorefront {
    async fn get_stores(&self) -> Result<Vec<Store>, GatewayError> {
        let body = self.fetch(self.client.stores_url()).await?;
        let stores: Option<BTreeMap<String, StoreDto>> =
            serde_json::from_value(body).map_err(|_| GatewayError::InvalidResponse)?;

        Ok(stores
            .unwrap_or_default()
            .into_iter()
            .map(|(id, dto)| dto.into_store(id))
            .collect())
    }

    async fn get_store(&self, store_id: &StoreId) -> Result<Store, GatewayError> {
        let body = self.fetch(self.client.store_url(store_id.as_str())).await?;
        if is_missing_record(&body) {
            return Err(GatewayError::NotFound);
        }

        let dto: StoreDto =
            serde_json::from_value(body).map_err(|_| GatewayError::InvalidResponse)?;
        Ok(dto.into_store(store_id.as_str().to_string()))
    }

    async fn get_store_products(
        &self,
        store_id: &StoreId,
    ) -> Result<Vec<ProductRecord>, GatewayError> {
        let body = self
            .fetch(self.client.store_products_url(store_id.as_str()))
            .await?;
        let products: Option<BTreeMap<String, ProductDto>> =
            serde_json::from_value(body).map_err(|_| GatewayError::InvalidResponse)?;

        products
            .unwrap_or_default()
            .into_iter()
            .map(|(product_id, dto)| {
                let mut record = dto.into_record()?;
                record.id.get_or_insert(product_id);
                record
                    .store_id
                    .get_or_insert_with(|| store_id.as_str().to_string());
                Ok(record)
            })
            .collect()
    }
}
