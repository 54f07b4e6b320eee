use std::fmt::Write;

use business::domain::cart::model::Cart;
use business::domain::history::model::ScanHistoryEntry;
use business::domain::product::model::ResolvedScan;
use business::domain::scan::events::SessionNotice;
use business::domain::scan::payload::parse_payload;
use business::domain::store::model::{Store, StoreDetails};

use crate::ui::error::{IntoUserMessage, UserMessage};

/// One line of terminal output per notice.
pub fn notice_line(notice: &SessionNotice) -> String {
    match notice {
        SessionNotice::Started { session_id } => format!(
            "Scanning (session {}). Press Ctrl-C to stop.",
            session_id
        ),
        SessionNotice::CameraFailed(err) => err.clone().into_user_message().to_string(),
        SessionNotice::Paused { payload } => paused_line(payload),
        SessionNotice::Resolved(scan) => product_summary(scan),
        SessionNotice::ResolveFailed(err) => err.clone().into_user_message().to_string(),
        SessionNotice::Added(line) => format!(
            "Added to cart: {} x{} ({:.2})",
            line.product_name(),
            line.quantity(),
            line.price()
        ),
        SessionNotice::SubmitFailed { error, attempts } => format!(
            "{} (attempt {})",
            error.clone().into_user_message(),
            attempts
        ),
        SessionNotice::Discarded => "Scan discarded. Ready for the next code.".to_string(),
        SessionNotice::ScannerLost => UserMessage::new(
            "camera.source_lost",
            "The scanner stopped sending codes. Check its connection and start a new scan.",
        )
        .to_string(),
        SessionNotice::Closed => "Scanner closed.".to_string(),
    }
}

/// Label hints are only a preview; the backend record is what gets confirmed.
fn paused_line(payload: &str) -> String {
    let label = parse_payload(payload)
        .ok()
        .and_then(|parsed| parsed.hints)
        .and_then(|hints| hints.name)
        .unwrap_or_else(|| payload.trim().to_string());
    format!("Code scanned: {}. Looking it up...", label)
}

pub fn product_summary(scan: &ResolvedScan) -> String {
    let product = &scan.product;
    let mut out = format!("{} - {:.2}", product.name, product.price);
    if let Some(size) = &product.size_or_weight {
        let _ = write!(out, " ({})", size);
    }
    match &product.store_id {
        Some(store_id) => {
            let _ = write!(out, " [store {}]", store_id);
        }
        None => out.push_str(" [no store]"),
    }
    if let Some(description) = &product.description {
        let _ = write!(out, "\n  {}", description);
    }
    out
}

pub fn cart_table(cart: &Cart) -> String {
    if cart.is_empty() {
        return "Your cart is empty.".to_string();
    }
    let mut out = String::new();
    for line in &cart.lines {
        let _ = writeln!(
            out,
            "{:<30} x{:<3} {:>10.2}",
            line.product_name,
            line.quantity,
            line.subtotal()
        );
    }
    let _ = write!(
        out,
        "{} items, total {:.2}",
        cart.total_items(),
        cart.total_price()
    );
    out
}

pub fn history_table(entries: &[ScanHistoryEntry]) -> String {
    if entries.is_empty() {
        return "No scanned products yet.".to_string();
    }
    entries
        .iter()
        .map(|entry| {
            let when = entry
                .scanned_at
                .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string());
            let store = entry
                .store_id
                .as_ref()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string());
            format!("{}  {:<30} {}", when, entry.product_name, store)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn store_list(stores: &[Store]) -> String {
    if stores.is_empty() {
        return "No stores available yet.".to_string();
    }
    stores
        .iter()
        .map(|store| match &store.description {
            Some(description) => format!("{:<12} {}  ({})", store.id, store.name, description),
            None => format!("{:<12} {}", store.id, store.name),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Store header followed by one line per product; product ids are what
/// `lookup` and `cart remove` take.
pub fn store_details(details: &StoreDetails) -> String {
    let mut out = details.store.name.clone();
    if let Some(description) = &details.store.description {
        let _ = write!(out, "\n{}", description);
    }
    if details.products.is_empty() {
        out.push_str("\nNo products in this store yet.");
        return out;
    }
    for product in &details.products {
        let _ = write!(
            out,
            "\n{:<12} {:<30} {:>10.2}",
            product.id.as_deref().unwrap_or("-"),
            product.name,
            product.price
        );
        if let Some(size) = &product.size {
            let _ = write!(out, " ({})", size);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cart::errors::CartSubmissionError;
    use business::domain::cart::model::CartLine;
    use business::domain::product::model::ResolvedProduct;
    use business::domain::product::model::ProductRecord;
    use business::domain::shared::value_objects::{ProductId, StoreId};

    fn scan() -> ResolvedScan {
        ResolvedScan {
            payload: parse_payload("/store/S1/product/P9").unwrap(),
            product: ResolvedProduct {
                product_id: Some(ProductId::new("P9")),
                store_id: Some(StoreId::new("S1")),
                name: "Milk Packet".to_string(),
                price: 45.0,
                size_or_weight: Some("500ml".to_string()),
                image_url: None,
                description: None,
            },
        }
    }

    #[test]
    fn should_summarize_resolved_product() {
        assert_eq!(
            product_summary(&scan()),
            "Milk Packet - 45.00 (500ml) [store S1]"
        );
    }

    #[test]
    fn should_preview_label_name_while_looking_up() {
        let line = notice_line(&SessionNotice::Paused {
            payload: r#"{"store_id":"S1","id":"P9","name":"Milk"}"#.to_string(),
        });

        assert_eq!(line, "Code scanned: Milk. Looking it up...");
    }

    #[test]
    fn should_show_attempt_count_on_failed_submission() {
        let line = notice_line(&SessionNotice::SubmitFailed {
            error: CartSubmissionError::Network,
            attempts: 2,
        });

        assert!(line.contains("[cart.network]"));
        assert!(line.ends_with("(attempt 2)"));
    }

    #[test]
    fn should_explain_lost_scanner() {
        let line = notice_line(&SessionNotice::ScannerLost);
        assert!(line.ends_with("[camera.source_lost]"));
    }

    #[test]
    fn should_total_cart() {
        let cart = Cart {
            lines: vec![CartLine {
                product_id: ProductId::new("P9"),
                store_id: Some(StoreId::new("S1")),
                product_name: "Milk Packet".to_string(),
                price: 45.0,
                quantity: 2,
                image: None,
                added_at: None,
            }],
        };

        assert!(cart_table(&cart).ends_with("2 items, total 90.00"));
        assert_eq!(cart_table(&Cart::default()), "Your cart is empty.");
    }

    #[test]
    fn should_render_history_without_timestamp() {
        let entries = vec![ScanHistoryEntry {
            product_id: ProductId::new("P9"),
            store_id: None,
            product_name: "Milk Packet".to_string(),
            scanned_at: None,
        }];

        assert!(history_table(&entries).starts_with("-  Milk Packet"));
    }

    #[test]
    fn should_list_store_products_with_ids() {
        let details = StoreDetails {
            store: Store {
                id: StoreId::new("S1"),
                name: "Akhil Mart".to_string(),
                description: None,
            },
            products: vec![ProductRecord {
                id: Some("P9".to_string()),
                name: "Milk Packet".to_string(),
                price: 45.0,
                size: Some("500ml".to_string()),
                ..Default::default()
            }],
        };

        let text = store_details(&details);

        assert!(text.starts_with("Akhil Mart\nP9 "));
        assert!(text.ends_with("45.00 (500ml)"));
        assert_eq!(store_list(&[]), "No stores available yet.");
    }
}
