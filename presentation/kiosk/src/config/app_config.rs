use super::camera_config::CameraConfig;
use super::storefront_config::StorefrontConfig;
use super::{ConfigError, VarLookup};
use crate::cli::ConfigOverrides;

pub struct AppConfig {
    pub storefront: StorefrontConfig,
    pub camera: CameraConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: VarLookup) -> Result<Self, ConfigError> {
        Ok(Self {
            storefront: StorefrontConfig::from_vars(var)?,
            camera: CameraConfig::from_vars(var)?,
        })
    }

    /// Command line flags win over the environment.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(url) = &overrides.storefront_url {
            self.storefront.set_base_url(url)?;
        }
        if let Some(secs) = overrides.timeout_secs {
            self.storefront.set_timeout_secs(secs)?;
        }
        if let Some(email) = &overrides.email {
            self.storefront.email = Some(email.clone());
        }
        if let Some(source) = &overrides.source {
            self.camera.set_source(source)?;
        }
        if overrides.allow_insecure_remote {
            self.camera.allow_insecure_remote = true;
        }
        Ok(self)
    }
}
