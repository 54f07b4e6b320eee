use std::cmp::Reverse;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::history::errors::HistoryError;
use crate::domain::history::gateway::HistoryGateway;
use crate::domain::history::model::ScanHistoryEntry;
use crate::domain::history::use_cases::get_all::GetScanHistoryUseCase;
use crate::domain::logger::Logger;

pub struct GetScanHistoryUseCaseImpl {
    pub gateway: Arc<dyn HistoryGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetScanHistoryUseCase for GetScanHistoryUseCaseImpl {
    async fn execute(&self) -> Result<Vec<ScanHistoryEntry>, HistoryError> {
        self.logger.info("Fetching scan history");

        let mut entries = self.gateway.get_history().await.map_err(|e| match e {
            GatewayError::Unauthorized => HistoryError::Unauthorized,
            _ => HistoryError::Network,
        })?;

        // Most recent first; entries without a timestamp go last.
        entries.sort_by_key(|entry| Reverse(entry.scanned_at));

        Ok(entries)
    }
}
