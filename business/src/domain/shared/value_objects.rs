use serde::{Deserialize, Serialize};

/// Identifier of a store (tenant) in the storefront backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreId(String);

impl StoreId {
    /// Creates a new StoreId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Trims the input and returns `None` when nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StoreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StoreId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identifier of a product, unique within its store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Trims the input and returns `None` when nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_store_id_from_str() {
        let store_id = StoreId::new("store-123");
        assert_eq!(store_id.as_str(), "store-123");
    }

    #[test]
    fn should_trim_parsed_store_id() {
        let store_id = StoreId::parse("  S1 ").unwrap();
        assert_eq!(store_id.as_str(), "S1");
    }

    #[test]
    fn should_reject_blank_store_id() {
        assert!(StoreId::parse("   ").is_none());
        assert!(StoreId::parse("").is_none());
    }

    #[test]
    fn should_reject_blank_product_id() {
        assert!(ProductId::parse("\t\n").is_none());
    }

    #[test]
    fn should_display_product_id() {
        let product_id = ProductId::new("P9");
        assert_eq!(format!("{}", product_id), "P9");
    }

    #[test]
    fn should_compare_product_ids_for_equality() {
        let a = ProductId::new("same");
        let b: ProductId = "same".into();
        let c = ProductId::new("other");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
