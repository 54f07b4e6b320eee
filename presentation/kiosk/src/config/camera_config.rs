use camera::ScannerSource;

use super::{ConfigError, VarLookup, parse_flag};

/// Scanner device selection.
#[derive(Debug, Clone)]
pub struct CameraConfig {
    pub source: ScannerSource,
    pub allow_insecure_remote: bool,
}

impl CameraConfig {
    pub const DEFAULT_SOURCE: &'static str = "/dev/ttyACM0";

    /// Environment variables:
    /// - SCANNER_SOURCE: Device path, `device:<path>` or `tcp://host:port` (default: "/dev/ttyACM0")
    /// - SCANNER_ALLOW_INSECURE_REMOTE: Accept a non-loopback TCP bridge (default: false)
    pub fn from_vars(var: VarLookup) -> Result<Self, ConfigError> {
        let raw = var("SCANNER_SOURCE").unwrap_or_else(|| Self::DEFAULT_SOURCE.to_string());
        Ok(Self {
            source: parse_source(&raw)?,
            allow_insecure_remote: var("SCANNER_ALLOW_INSECURE_REMOTE")
                .is_some_and(|v| parse_flag(&v)),
        })
    }

    pub fn set_source(&mut self, raw: &str) -> Result<(), ConfigError> {
        self.source = parse_source(raw)?;
        Ok(())
    }
}

fn parse_source(raw: &str) -> Result<ScannerSource, ConfigError> {
    raw.parse()
        .map_err(|e| ConfigError::InvalidScannerSource(format!("{} ({})", raw, e)))
}
