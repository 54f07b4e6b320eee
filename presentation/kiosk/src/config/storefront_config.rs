use std::time::Duration;

use url::Url;

use super::{ConfigError, VarLookup};

/// Storefront backend access.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl StorefrontConfig {
    pub const DEFAULT_URL: &'static str = "http://127.0.0.1:5000";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    /// Environment variables:
    /// - STOREFRONT_URL: Base URL of the storefront (default: "http://127.0.0.1:5000")
    /// - STOREFRONT_TIMEOUT_SECS: Per-request timeout (default: 10)
    /// - STOREFRONT_EMAIL / STOREFRONT_PASSWORD: Customer login (prompted when unset)
    pub fn from_vars(var: VarLookup) -> Result<Self, ConfigError> {
        let raw_url = var("STOREFRONT_URL").unwrap_or_else(|| Self::DEFAULT_URL.to_string());
        let timeout_secs = match var("STOREFRONT_TIMEOUT_SECS") {
            Some(raw) => parse_timeout(&raw)?,
            None => Self::DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url: parse_base_url(&raw_url)?,
            timeout: Duration::from_secs(timeout_secs),
            email: var("STOREFRONT_EMAIL").filter(|v| !v.trim().is_empty()),
            password: var("STOREFRONT_PASSWORD").filter(|v| !v.is_empty()),
        })
    }

    pub fn set_base_url(&mut self, raw: &str) -> Result<(), ConfigError> {
        self.base_url = parse_base_url(raw)?;
        Ok(())
    }

    pub fn set_timeout_secs(&mut self, secs: u64) -> Result<(), ConfigError> {
        if secs == 0 {
            return Err(ConfigError::InvalidTimeout(secs.to_string()));
        }
        self.timeout = Duration::from_secs(secs);
        Ok(())
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim())
        .map_err(|_| ConfigError::InvalidStorefrontUrl(raw.to_string()))?;
    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(url),
        _ => Err(ConfigError::InvalidStorefrontUrl(raw.to_string())),
    }
}

fn parse_timeout(raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .ok_or_else(|| ConfigError::InvalidTimeout(raw.to_string()))
}
