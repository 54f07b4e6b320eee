use chrono::{DateTime, Utc};

use super::errors::CartSubmissionError;
use crate::domain::product::model::ResolvedProduct;
use crate::domain::shared::value_objects::{ProductId, StoreId};

/// The single line submitted to the cart when a scan is confirmed.
///
/// Only constructible from a [`ResolvedProduct`] carrying both identifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineRequest {
    product_id: ProductId,
    store_id: StoreId,
    product_name: String,
    price: f64,
    quantity: u32,
    image: String,
}

impl CartLineRequest {
    pub const QUANTITY: u32 = 1;

    pub fn from_resolved(product: &ResolvedProduct) -> Result<Self, CartSubmissionError> {
        let (Some(product_id), Some(store_id)) = (&product.product_id, &product.store_id) else {
            return Err(CartSubmissionError::MissingIdentifiers);
        };

        Ok(Self {
            product_id: product_id.clone(),
            store_id: store_id.clone(),
            product_name: product.name.clone(),
            price: product.price,
            quantity: Self::QUANTITY,
            image: product.image_url.clone().unwrap_or_default(),
        })
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn store_id(&self) -> &StoreId {
        &self.store_id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn image(&self) -> &str {
        &self.image
    }
}

/// A line already stored in the customer's cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub store_id: Option<StoreId>,
    pub product_name: String,
    pub price: f64,
    pub quantity: u32,
    pub image: Option<String>,
    pub added_at: Option<DateTime<Utc>>,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn total_price(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }
}
