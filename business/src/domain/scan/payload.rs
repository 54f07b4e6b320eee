use serde_json::{Map, Value};
use url::Url;

use super::errors::PayloadParseError;
use crate::domain::shared::value_objects::{ProductId, StoreId};

const STORE_KEYS: [&str; 2] = ["store_id", "storeId"];
const PRODUCT_KEYS: [&str; 3] = ["id", "product_id", "productId"];

/// Which decoding strategy produced the identifiers of a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadStrategy {
    Json,
    Path,
    Opaque,
}

impl std::fmt::Display for PayloadStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadStrategy::Json => write!(f, "json"),
            PayloadStrategy::Path => write!(f, "path"),
            PayloadStrategy::Opaque => write!(f, "opaque"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadIdentifiers {
    /// Product scoped to a store: `GET /api/stores/{store}/products/{product}`.
    StoreProduct {
        store_id: StoreId,
        product_id: ProductId,
    },
    /// Store-less lookup: `GET /api/products/{product}`.
    GlobalProduct { product_id: ProductId },
}

impl PayloadIdentifiers {
    pub fn product_id(&self) -> &ProductId {
        match self {
            PayloadIdentifiers::StoreProduct { product_id, .. } => product_id,
            PayloadIdentifiers::GlobalProduct { product_id } => product_id,
        }
    }

    pub fn store_id(&self) -> Option<&StoreId> {
        match self {
            PayloadIdentifiers::StoreProduct { store_id, .. } => Some(store_id),
            PayloadIdentifiers::GlobalProduct { .. } => None,
        }
    }
}

impl std::fmt::Display for PayloadIdentifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadIdentifiers::StoreProduct {
                store_id,
                product_id,
            } => write!(f, "{}/{}", store_id, product_id),
            PayloadIdentifiers::GlobalProduct { product_id } => write!(f, "*/{}", product_id),
        }
    }
}

/// Values printed on the QR label itself. Shown before confirmation only;
/// the cart line is always built from the backend record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayHints {
    pub name: Option<String>,
    pub price_label: Option<String>,
    pub size_or_weight: Option<String>,
    pub image: Option<String>,
}

impl DisplayHints {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price_label.is_none()
            && self.size_or_weight.is_none()
            && self.image.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPayload {
    pub raw: String,
    pub strategy: PayloadStrategy,
    pub identifiers: PayloadIdentifiers,
    pub hints: Option<DisplayHints>,
}

/// Interprets a decoded payload.
///
/// Strategies are tried in order and the first one yielding identifiers wins:
/// - JSON object carrying both a store and a product identifier
/// - path segments `store/{s}/product/{p}` (or the legacy `api/qr/{s}/{p}`)
/// - the whole payload as an opaque, store-less product identifier
///
/// A JSON object carrying only a product identifier becomes a store-less
/// lookup on that identifier, keeping its display hints.
pub fn parse_payload(raw: &str) -> Result<ParsedPayload, PayloadParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PayloadParseError::Unparseable);
    }

    let json_object = match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    };

    if let Some(identifiers) = json_object.as_ref().and_then(store_identifiers_from_json) {
        return Ok(json_payload(trimmed, json_object.as_ref(), identifiers));
    }

    if let Some((store_id, product_id)) = identifiers_from_path(trimmed) {
        return Ok(ParsedPayload {
            raw: trimmed.to_string(),
            strategy: PayloadStrategy::Path,
            identifiers: PayloadIdentifiers::StoreProduct {
                store_id,
                product_id,
            },
            hints: None,
        });
    }

    if let Some(product_id) = json_object.as_ref().and_then(product_id_from_json) {
        return Ok(json_payload(
            trimmed,
            json_object.as_ref(),
            PayloadIdentifiers::GlobalProduct { product_id },
        ));
    }

    let product_id = ProductId::parse(trimmed).ok_or(PayloadParseError::Unparseable)?;
    Ok(ParsedPayload {
        raw: trimmed.to_string(),
        strategy: PayloadStrategy::Opaque,
        identifiers: PayloadIdentifiers::GlobalProduct { product_id },
        hints: None,
    })
}

fn json_payload(
    raw: &str,
    map: Option<&Map<String, Value>>,
    identifiers: PayloadIdentifiers,
) -> ParsedPayload {
    ParsedPayload {
        raw: raw.to_string(),
        strategy: PayloadStrategy::Json,
        identifiers,
        hints: map.map(hints_from_json).filter(|hints| !hints.is_empty()),
    }
}

fn store_identifiers_from_json(map: &Map<String, Value>) -> Option<PayloadIdentifiers> {
    let store_id = json_scalar(map, &STORE_KEYS).and_then(|s| StoreId::parse(&s))?;
    let product_id = product_id_from_json(map)?;
    Some(PayloadIdentifiers::StoreProduct {
        store_id,
        product_id,
    })
}

fn product_id_from_json(map: &Map<String, Value>) -> Option<ProductId> {
    json_scalar(map, &PRODUCT_KEYS).and_then(|p| ProductId::parse(&p))
}

fn hints_from_json(map: &Map<String, Value>) -> DisplayHints {
    DisplayHints {
        name: json_scalar(map, &["name"]),
        price_label: json_scalar(map, &["price"]),
        size_or_weight: json_scalar(map, &["weight", "size"]),
        image: json_scalar(map, &["image"]),
    }
}

/// First non-blank string or number found under any of `keys`.
fn json_scalar(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        let value = match map.get(*key)? {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        (!value.is_empty()).then_some(value)
    })
}

fn identifiers_from_path(raw: &str) -> Option<(StoreId, ProductId)> {
    let path = match Url::parse(raw) {
        Ok(url) => url.path().to_string(),
        Err(_) => raw.split(['?', '#']).next().unwrap_or_default().to_string(),
    };
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let store_product = || {
        let store_idx = segments.iter().position(|s| *s == "store")?;
        let product_idx = store_idx
            + 2
            + segments
                .get(store_idx + 2..)?
                .iter()
                .position(|s| *s == "product")?;
        Some((*segments.get(store_idx + 1)?, *segments.get(product_idx + 1)?))
    };
    let legacy_qr = || {
        segments
            .windows(4)
            .find(|w| w[0] == "api" && w[1] == "qr")
            .map(|w| (w[2], w[3]))
    };

    let (store, product) = store_product().or_else(legacy_qr)?;
    Some((StoreId::parse(store)?, ProductId::parse(product)?))
}
