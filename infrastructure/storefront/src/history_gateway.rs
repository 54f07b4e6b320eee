use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use business::domain::errors::GatewayError;
use business::domain::history::gateway::HistoryGateway;
use business::domain::history::model::ScanHistoryEntry;
use business::domain::shared::value_objects::{ProductId, StoreId};

use crate::client::{StorefrontClient, ensure_success, transport_error};
use crate::dto::{parse_timestamp, scalar_id};

#[derive(Deserialize)]
struct HistoryEntryDto {
    #[serde(default)]
    store_id: Value,
    product_name: Option<String>,
    scanned_at: Option<String>,
}

pub struct HistoryGatewayStorefront {
    client: StorefrontClient,
}

impl HistoryGatewayStorefront {
    pub fn new(client: StorefrontClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HistoryGateway for HistoryGatewayStorefront {
    async fn get_history(&self) -> Result<Vec<ScanHistoryEntry>, GatewayError> {
        let response = self
            .client
            .client
            .get(self.client.history_url())
            .send()
            .await
            .map_err(transport_error)?;

        let entries: Option<BTreeMap<String, HistoryEntryDto>> = ensure_success(response)?
            .json()
            .await
            .map_err(|_| GatewayError::InvalidResponse)?;

        Ok(entries
            .unwrap_or_default()
            .into_iter()
            .map(|(product_id, dto)| ScanHistoryEntry {
                product_id: ProductId::new(product_id),
                store_id: scalar_id(&dto.store_id).map(StoreId::new),
                product_name: dto.product_name.unwrap_or_default(),
                scanned_at: dto.scanned_at.as_deref().and_then(parse_timestamp),
            })
            .collect())
    }
}
