use business::domain::auth::errors::AuthError;
use business::domain::cart::errors::{CartError, CartSubmissionError};
use business::domain::history::errors::HistoryError;
use business::domain::product::errors::{ProductLookupError, ResolveError};
use business::domain::scan::errors::{CameraAcquisitionError, PayloadParseError};
use business::domain::store::errors::StoreError;

use crate::ui::error::{IntoUserMessage, UserMessage};

impl IntoUserMessage for CameraAcquisitionError {
    fn into_user_message(self) -> UserMessage {
        let code = self.to_string();
        let text = match &self {
            CameraAcquisitionError::PermissionDenied => {
                "Scanner permission denied. Check the device permissions."
            }
            CameraAcquisitionError::NotFound => "No scanner found at the configured source.",
            CameraAcquisitionError::DeviceBusy => "Scanner is already in use by another program.",
            CameraAcquisitionError::InsecureContext => {
                "Remote scanner bridges need --allow-insecure-remote or a loopback address."
            }
            CameraAcquisitionError::Unavailable(_) => "Unable to access the scanner.",
        };
        UserMessage::new(&code, text)
    }
}

impl IntoUserMessage for ResolveError {
    fn into_user_message(self) -> UserMessage {
        match self {
            ResolveError::Parse(PayloadParseError::Unparseable) => UserMessage::new(
                "payload.unparseable",
                "Scanned something, but it is not a valid product code.",
            ),
            ResolveError::Lookup(ProductLookupError::NotFound) => {
                UserMessage::new("product.not_found", "Product not found.")
            }
            ResolveError::Lookup(ProductLookupError::Unauthorized) => UserMessage::new(
                "product.unauthorized",
                "Session expired. Log in again.",
            ),
            ResolveError::Lookup(ProductLookupError::Network) => UserMessage::new(
                "product.network",
                "Failed to load product details.",
            ),
        }
    }
}

impl IntoUserMessage for CartSubmissionError {
    fn into_user_message(self) -> UserMessage {
        let code = self.to_string();
        let text = match &self {
            CartSubmissionError::MissingIdentifiers => {
                "This product is not sold by a store and cannot be added to the cart."
            }
            CartSubmissionError::Network => "Failed to add to cart. Check the connection.",
            CartSubmissionError::Unauthorized => "Session expired. Log in again.",
            CartSubmissionError::Rejected { .. } => "The store rejected this cart line.",
        };
        UserMessage::new(&code, text)
    }
}

impl IntoUserMessage for CartError {
    fn into_user_message(self) -> UserMessage {
        let code = self.to_string();
        let text = match &self {
            CartError::LineNotFound => "That product is not in your cart.",
            CartError::Network => "Failed to update the cart.",
            CartError::Unauthorized => "Session expired. Log in again.",
        };
        UserMessage::new(&code, text)
    }
}

impl IntoUserMessage for HistoryError {
    fn into_user_message(self) -> UserMessage {
        let code = self.to_string();
        let text = match &self {
            HistoryError::Network => "Failed to load the scan history.",
            HistoryError::Unauthorized => "Session expired. Log in again.",
        };
        UserMessage::new(&code, text)
    }
}

impl IntoUserMessage for StoreError {
    fn into_user_message(self) -> UserMessage {
        let code = self.to_string();
        let text = match &self {
            StoreError::NotFound => "Store not found.",
            StoreError::Network => "Failed to load stores.",
            StoreError::Unauthorized => "Session expired. Log in again.",
        };
        UserMessage::new(&code, text)
    }
}

impl IntoUserMessage for AuthError {
    fn into_user_message(self) -> UserMessage {
        let code = self.to_string();
        let text = match &self {
            AuthError::MissingCredentials => "E-mail and password are required.",
            AuthError::InvalidCredentials => "Invalid credentials.",
            AuthError::RoleNotAllowed => "Only customer accounts can use the kiosk.",
            AuthError::Network => "Cannot reach the storefront.",
        };
        UserMessage::new(&code, text)
    }
}
