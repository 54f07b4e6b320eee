use std::time::Duration;

use reqwest::redirect::Policy;
use reqwest::{Client, Response, StatusCode};
use url::Url;

use business::domain::errors::GatewayError;

/// Shared storefront HTTP client configuration.
///
/// Cloning is cheap and every clone shares the same connection pool and
/// cookie store, so a login through one gateway authenticates the others.
#[derive(Clone)]
pub struct StorefrontClient {
    pub client: Client,
    pub base_url: Url,
}

impl StorefrontClient {
    pub fn new(base_url: Url, timeout: Duration) -> Self {
        // Redirects are not followed: the backend answers an expired session
        // with a redirect to its login page.
        let client = Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .redirect(Policy::none())
            .build()
            .unwrap_or_default();

        Self { client, base_url }
    }

    /// Appends percent-encoded path segments to the base URL.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub fn login_url(&self) -> Url {
        self.endpoint(&["api", "login"])
    }

    pub fn store_product_url(&self, store_id: &str, product_id: &str) -> Url {
        self.endpoint(&["api", "stores", store_id, "products", product_id])
    }

    pub fn product_url(&self, product_id: &str) -> Url {
        self.endpoint(&["api", "products", product_id])
    }

    pub fn cart_url(&self) -> Url {
        self.endpoint(&["api", "cart"])
    }

    pub fn cart_line_url(&self, product_id: &str) -> Url {
        self.endpoint(&["api", "cart", product_id])
    }

    pub fn stores_url(&self) -> Url {
        self.endpoint(&["api", "stores"])
    }

    pub fn store_url(&self, store_id: &str) -> Url {
        self.endpoint(&["api", "stores", store_id])
    }

    pub fn store_products_url(&self, store_id: &str) -> Url {
        self.endpoint(&["api", "stores", store_id, "products"])
    }

    pub fn history_url(&self) -> Url {
        self.endpoint(&["api", "history"])
    }
}

pub(crate) fn transport_error(_: reqwest::Error) -> GatewayError {
    GatewayError::network()
}

/// Classifies a non-2xx status.
pub(crate) fn status_error(status: StatusCode) -> GatewayError {
    match status {
        StatusCode::NOT_FOUND => GatewayError::not_found(),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GatewayError::unauthorized(),
        s if s.is_redirection() => GatewayError::unauthorized(),
        s => GatewayError::rejected(s.as_u16()),
    }
}

pub(crate) fn ensure_success(response: Response) -> Result<Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(status_error(status))
    }
}
