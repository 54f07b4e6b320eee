use crate::domain::scan::payload::{ParsedPayload, PayloadIdentifiers};
use crate::domain::shared::value_objects::{ProductId, StoreId};

/// Product record as served by the storefront catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductRecord {
    pub id: Option<String>,
    pub store_id: Option<String>,
    pub name: String,
    pub price: f64,
    pub size: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Canonical, backend-verified product ready for confirmation.
///
/// Identifiers are optional because a global lookup may return a product
/// that is not attached to any store; such a product cannot be added to a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProduct {
    pub product_id: Option<ProductId>,
    pub store_id: Option<StoreId>,
    pub name: String,
    pub price: f64,
    pub size_or_weight: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

impl ResolvedProduct {
    /// Combines the identifiers used for the lookup with the record the
    /// backend returned for them. Identifiers echoed by the backend win.
    pub fn from_lookup(identifiers: &PayloadIdentifiers, record: ProductRecord) -> Self {
        let product_id = record
            .id
            .as_deref()
            .and_then(ProductId::parse)
            .or_else(|| Some(identifiers.product_id().clone()));
        let store_id = record
            .store_id
            .as_deref()
            .and_then(StoreId::parse)
            .or_else(|| identifiers.store_id().cloned());

        Self {
            product_id,
            store_id,
            name: record.name,
            price: record.price,
            size_or_weight: record.size.filter(|s| !s.trim().is_empty()),
            image_url: record.image.filter(|i| !i.trim().is_empty()),
            description: record.description,
        }
    }

    pub fn is_cartable(&self) -> bool {
        self.product_id.is_some() && self.store_id.is_some()
    }
}

/// A decoded payload together with the product it resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedScan {
    pub payload: ParsedPayload,
    pub product: ResolvedProduct,
}
