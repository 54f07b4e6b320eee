use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::product::catalog::ProductCatalog;
use crate::domain::product::errors::{ProductLookupError, ResolveError};
use crate::domain::product::model::{ResolvedProduct, ResolvedScan};
use crate::domain::product::use_cases::resolve::{ResolvePayloadParams, ResolvePayloadUseCase};
use crate::domain::scan::payload::{PayloadIdentifiers, parse_payload};

pub struct ResolvePayloadUseCaseImpl {
    pub catalog: Arc<dyn ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResolvePayloadUseCase for ResolvePayloadUseCaseImpl {
    async fn execute(&self, params: ResolvePayloadParams) -> Result<ResolvedScan, ResolveError> {
        let parsed = parse_payload(&params.payload).inspect_err(|_| {
            self.logger
                .warn(&format!("Unparseable payload: {:?}", params.payload));
        })?;

        self.logger.info(&format!(
            "Resolving {} payload: {}",
            parsed.strategy, parsed.identifiers
        ));

        let record = match &parsed.identifiers {
            PayloadIdentifiers::StoreProduct {
                store_id,
                product_id,
            } => self.catalog.get_store_product(store_id, product_id).await,
            PayloadIdentifiers::GlobalProduct { product_id } => {
                self.catalog.get_product(product_id).await
            }
        }
        .map_err(|e| match e {
            GatewayError::NotFound => ProductLookupError::NotFound,
            GatewayError::Unauthorized => ProductLookupError::Unauthorized,
            GatewayError::Network
            | GatewayError::Rejected { .. }
            | GatewayError::InvalidResponse => ProductLookupError::Network,
        })?;

        let product = ResolvedProduct::from_lookup(&parsed.identifiers, record);

        self.logger.info(&format!(
            "Product resolved: {} ({:.2})",
            product.name, product.price
        ));

        Ok(ResolvedScan {
            payload: parsed,
            product,
        })
    }
}
