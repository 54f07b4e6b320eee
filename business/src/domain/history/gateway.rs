use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::ScanHistoryEntry;

#[async_trait]
pub trait HistoryGateway: Send + Sync {
    async fn get_history(&self) -> Result<Vec<ScanHistoryEntry>, GatewayError>;
}
