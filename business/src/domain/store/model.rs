use crate::domain::product::model::ProductRecord;
use crate::domain::shared::value_objects::StoreId;

#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    pub description: Option<String>,
}

/// A store with the products it sells, each carrying its own id.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreDetails {
    pub store: Store,
    pub products: Vec<ProductRecord>,
}
