pub mod app_config;
pub mod camera_config;
pub mod storefront_config;

/// Reads one configuration variable; `None` when unset.
pub type VarLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.invalid_storefront_url: {0}")]
    InvalidStorefrontUrl(String),
    #[error("config.invalid_timeout: {0}")]
    InvalidTimeout(String),
    #[error("config.invalid_scanner_source: {0}")]
    InvalidScannerSource(String),
}

pub(crate) fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
